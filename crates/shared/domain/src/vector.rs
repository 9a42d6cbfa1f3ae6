use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 3-component vector written the OpenFOAM way: `(x y z)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(pub [f64; 3]);

impl Vector3 {
    pub const ZERO: Self = Self([0.0; 3]);
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Checked construction; OpenFOAM cannot read `nan` or `inf` components.
    ///
    /// # Errors
    /// A message naming the vector when a component is not finite.
    pub fn finite(components: [f64; 3]) -> Result<Self, String> {
        let vector = Self(components);
        if components.iter().all(|c| c.is_finite()) {
            Ok(vector)
        } else {
            Err(format!("vector '{vector}' has a non-finite component"))
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(components: [f64; 3]) -> Self {
        Self(components)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x} {y} {z})")
    }
}

impl FromStr for Vector3 {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("vector '{s}' must be written as (x y z)"))?;

        let components = inner
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("vector '{s}' has a non-numeric component: {e}"))?;

        let components = <[f64; 3]>::try_from(components)
            .map_err(|c| format!("vector '{s}' has {} components, expected 3", c.len()))?;
        Self::finite(components)
    }
}

impl Serialize for Vector3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Components([f64; 3]),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Raw::Components(components) => Self::finite(components).map_err(serde::de::Error::custom),
        }
    }
}
