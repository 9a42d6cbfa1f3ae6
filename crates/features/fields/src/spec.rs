use crate::error::FieldError;
use crate::field::Field;
use fcase_domain::vector::Vector3;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::trace;

/// Caller input for a field slot, before coercion.
///
/// Deserializes from JSON/TOML values: a table becomes [`FieldSpec::Mapping`], `null` becomes
/// [`FieldSpec::Omitted`], anything else goes through [`FieldSpec::from`] on [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    Built(Field),
    Mapping(Map<String, Value>),
    Scalar(String),
    /// Explicit null. Builders treat it as no input; resolving it alone gives zeroGradient.
    Omitted,
}

impl FieldSpec {
    /// Coerces the input into a [`Field`].
    ///
    /// # Errors
    /// The [`FieldError`] of [`Field::from_mapping`] or [`Field::from_scalar`].
    pub fn resolve(self) -> Result<Field, FieldError> {
        match self {
            Self::Built(field) => Ok(field),
            Self::Omitted => Ok(Field::ZeroGradient),
            Self::Mapping(mapping) => {
                trace!(entries = mapping.len(), "Coercing field from mapping");
                Field::from_mapping(&mapping)
            },
            Self::Scalar(text) => {
                trace!(input = %text, "Coercing field from text");
                Field::from_scalar(&text)
            },
        }
    }

    /// Short rendering of the input for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Built(field) => field.to_string(),
            Self::Mapping(mapping) => Value::Object(mapping.clone()).to_string(),
            Self::Scalar(text) => text.clone(),
            Self::Omitted => Value::Null.to_string(),
        }
    }

    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }
}

impl From<Field> for FieldSpec {
    fn from(field: Field) -> Self {
        Self::Built(field)
    }
}

impl From<Map<String, Value>> for FieldSpec {
    fn from(mapping: Map<String, Value>) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Value> for FieldSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mapping) => Self::Mapping(mapping),
            Value::String(text) => Self::Scalar(text),
            Value::Null => Self::Omitted,
            other => Self::Scalar(other.to_string()),
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(text: &str) -> Self {
        Self::Scalar(text.to_owned())
    }
}

impl From<String> for FieldSpec {
    fn from(text: String) -> Self {
        Self::Scalar(text)
    }
}

impl From<f64> for FieldSpec {
    fn from(value: f64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<i32> for FieldSpec {
    fn from(value: i32) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<[f64; 3]> for FieldSpec {
    fn from(components: [f64; 3]) -> Self {
        Self::Built(Field::fixed_value(Vector3(components)))
    }
}

impl From<Vector3> for FieldSpec {
    fn from(vector: Vector3) -> Self {
        Self::Built(Field::fixed_value(vector))
    }
}

impl<'de> Deserialize<'de> for FieldSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}
