use crate::error::BoundaryError;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum and maximum mesh refinement levels of a patch geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefinementLevels {
    pub min: u32,
    pub max: u32,
}

impl RefinementLevels {
    /// Levels used when none are given.
    pub const UNSET: Self = Self { min: 1, max: 1 };

    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Reads a pair of levels from any two items that print as integers
    /// (`[2, 3]`, `["2", " 3 "]`). No items means [`RefinementLevels::UNSET`].
    ///
    /// # Errors
    /// [`BoundaryError::InvalidRefinementLevel`] for a wrong item count or a non-integer item.
    pub fn normalize<I>(levels: I) -> Result<Self, BoundaryError>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let items: Vec<String> = levels.into_iter().map(|item| item.to_string()).collect();
        match items.as_slice() {
            [] => Ok(Self::UNSET),
            [min, max] => Ok(Self { min: level(min, &items)?, max: level(max, &items)? }),
            _ => Err(invalid(&items, format!("expected two levels, got {}", items.len()))),
        }
    }
}

impl Default for RefinementLevels {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<(u32, u32)> for RefinementLevels {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for RefinementLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}

/// Serialized as `[min, max]`.
impl Serialize for RefinementLevels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.min)?;
        pair.serialize_element(&self.max)?;
        pair.end()
    }
}

fn level(item: &str, items: &[String]) -> Result<u32, BoundaryError> {
    item.trim()
        .parse()
        .map_err(|e| invalid(items, format!("`{}` is not a non-negative integer: {e}", item.trim())))
}

fn invalid(items: &[String], reason: String) -> BoundaryError {
    BoundaryError::InvalidRefinementLevel {
        input: format!("[{}]", items.join(", ")),
        reason: reason.into(),
        context: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_means_unset() {
        assert_eq!(RefinementLevels::normalize(Vec::<u32>::new()).unwrap(), RefinementLevels::new(1, 1));
    }

    #[test]
    fn strings_and_integers_are_accepted() {
        assert_eq!(RefinementLevels::normalize(["2", "3"]).unwrap(), RefinementLevels::new(2, 3));
        assert_eq!(RefinementLevels::normalize([" 0 ", "4"]).unwrap(), RefinementLevels::new(0, 4));
        assert_eq!(RefinementLevels::normalize([5_u32, 5]).unwrap(), RefinementLevels::from((5, 5)));
    }

    #[test]
    fn rejects_bad_shapes_and_values() {
        for input in [vec!["1"], vec!["1", "2", "3"], vec!["a", "2"], vec!["-1", "2"], vec!["1.5", "2"]] {
            let err = RefinementLevels::normalize(input).unwrap_err();
            assert!(matches!(err, BoundaryError::InvalidRefinementLevel { .. }), "{err}");
        }
    }

    #[test]
    fn displays_as_tuple() {
        assert_eq!(RefinementLevels::new(2, 3).to_string(), "(2, 3)");
    }
}
