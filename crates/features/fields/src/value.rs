use crate::error::FieldError;
use fcase_domain::constants::{NONUNIFORM, UNIFORM};
use fcase_domain::vector::Vector3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Right-hand side of a `value` entry.
///
/// `Uniform("0.1")` renders as `uniform 0.1`; `Raw` is written verbatim and covers macro
/// references (`$internalField`) and `nonuniform` lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Uniform(String),
    Raw(String),
}

impl FieldValue {
    #[must_use]
    pub fn uniform(value: impl fmt::Display) -> Self {
        Self::Uniform(value.to_string())
    }

    #[must_use]
    pub fn raw(expression: impl Into<String>) -> Self {
        Self::Raw(expression.into())
    }

    #[must_use]
    pub const fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform(value) => write!(f, "{UNIFORM} {value}"),
            Self::Raw(expression) => f.write_str(expression),
        }
    }
}

impl FromStr for FieldValue {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(FieldError::parse(s, "empty value"));
        }

        if let Some(rest) = text.strip_prefix(UNIFORM) {
            // `uniformly` is not the keyword.
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                let rest = rest.trim();
                if rest.is_empty() {
                    return Err(FieldError::parse(s, "`uniform` needs a value"));
                }
                return Ok(Self::Uniform(rest.to_owned()));
            }
        }

        if text.contains([';', '{', '}']) {
            return Err(FieldError::parse(s, "value must not contain `;`, `{` or `}`"));
        }

        if text.starts_with(NONUNIFORM) || text.starts_with('$') || text.starts_with('#') {
            return Ok(Self::Raw(text.to_owned()));
        }

        Ok(Self::Uniform(text.to_owned()))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

impl From<Vector3> for FieldValue {
    fn from(value: Vector3) -> Self {
        Self::uniform(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Components([f64; 3]),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self::from(value)),
            Raw::Components(components) => {
                Vector3::finite(components).map(Self::from).map_err(serde::de::Error::custom)
            },
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Deserializes an `f64` given either as a number or as numeric text (`"0.85"`).
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*value)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map_err(|e| serde::de::Error::custom(format!("invalid number '{text}': {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_expressions() {
        assert_eq!("uniform (0 0 0)".parse::<FieldValue>().unwrap(), FieldValue::uniform("(0 0 0)"));
        assert_eq!("0.1".parse::<FieldValue>().unwrap(), FieldValue::uniform("0.1"));
        assert_eq!("$internalField".parse::<FieldValue>().unwrap(), FieldValue::raw("$internalField"));
        assert_eq!(
            "uniform $turbulentKE".parse::<FieldValue>().unwrap(),
            FieldValue::uniform("$turbulentKE")
        );
        assert!(!"nonuniform List<scalar> 0()".parse::<FieldValue>().unwrap().is_uniform());
    }

    #[test]
    fn rejects_empty_values() {
        assert!("".parse::<FieldValue>().is_err());
        assert!("uniform   ".parse::<FieldValue>().is_err());
    }

    #[test]
    fn rejects_dictionary_delimiters() {
        assert!("uniform 0; type slip".parse::<FieldValue>().is_err());
        assert!("{ uniform 0 }".parse::<FieldValue>().is_err());
        assert!(serde_json::from_str::<FieldValue>("\"$internalField;\"").is_err());
    }

    #[test]
    fn renders_with_keyword() {
        assert_eq!(FieldValue::from(0.0).to_string(), "uniform 0");
        assert_eq!(FieldValue::from(Vector3::ZERO).to_string(), "uniform (0 0 0)");
        assert_eq!(FieldValue::raw("$pressure").to_string(), "$pressure");
    }

    #[test]
    fn deserializes_numbers_vectors_and_text() {
        let v: FieldValue = serde_json::from_str("0.5").unwrap();
        assert_eq!(v, FieldValue::uniform("0.5"));
        let v: FieldValue = serde_json::from_str("[1.0, 0.0, 0.0]").unwrap();
        assert_eq!(v, FieldValue::uniform("(1 0 0)"));
        let v: FieldValue = serde_json::from_str("\"$internalField\"").unwrap();
        assert_eq!(v, FieldValue::raw("$internalField"));
    }
}
