//! Textual field forms: numbers, vectors, bare type names and dictionary bodies.

use crate::error::FieldError;
use crate::field::Field;
use crate::value::FieldValue;
use fcase_domain::vector::Vector3;
use serde_json::{Map, Value};
use tracing::trace;

const TYPE_KEY: &str = "type";

pub(crate) fn field(text: &str) -> Result<Field, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::parse(text, "empty input"));
    }

    if let Ok(number) = trimmed.parse::<f64>() {
        if !number.is_finite() {
            return Err(FieldError::parse(text, "number must be finite"));
        }
        trace!(input = trimmed, "Read field as uniform scalar");
        return Ok(Field::fixed_value(FieldValue::uniform(trimmed)));
    }

    if trimmed.starts_with('(') {
        let vector: Vector3 = trimmed.parse().map_err(|reason: String| FieldError::parse(text, reason))?;
        trace!(input = trimmed, "Read field as uniform vector");
        return Ok(Field::fixed_value(vector));
    }

    if trimmed.starts_with('{') || trimmed.contains(';') {
        let mapping = dictionary(text, trimmed)?;
        trace!(input = trimmed, entries = mapping.len(), "Read field as dictionary body");
        return Field::from_mapping(&mapping);
    }

    if is_identifier(trimmed) {
        trace!(input = trimmed, "Read field as bare type name");
        let mut mapping = Map::new();
        mapping.insert(TYPE_KEY.to_owned(), Value::String(trimmed.to_owned()));
        return Field::from_mapping(&mapping);
    }

    Err(FieldError::parse(text, "expected a number, a vector, a field type or a dictionary body"))
}

/// Splits `{ key value; key value; }` into string entries.
fn dictionary(original: &str, trimmed: &str) -> Result<Map<String, Value>, FieldError> {
    let body = match trimmed.strip_prefix('{') {
        Some(rest) => rest
            .strip_suffix('}')
            .ok_or_else(|| FieldError::parse(original, "unbalanced braces"))?,
        None => trimmed,
    };
    if body.contains(['{', '}']) {
        return Err(FieldError::parse(original, "nested dictionaries are not supported"));
    }

    let mut mapping = Map::new();
    for entry in body.split(';').map(str::trim).filter(|entry| !entry.is_empty()) {
        let Some((key, value)) = entry.split_once(char::is_whitespace) else {
            return Err(FieldError::parse(original, format!("entry `{entry}` has no value")));
        };
        if mapping.insert(key.to_owned(), Value::String(value.trim().to_owned())).is_some() {
            return Err(FieldError::parse(original, format!("duplicate key `{key}`")));
        }
    }

    if !mapping.contains_key(TYPE_KEY) {
        return Err(FieldError::parse(original, "dictionary body has no `type` entry"));
    }
    Ok(mapping)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_become_uniform_fixed_values() {
        assert_eq!(field(" 0.1 ").unwrap(), Field::fixed_value(FieldValue::uniform("0.1")));
        assert!(field("NaN").is_err());
        assert!(field("inf").is_err());
    }

    #[test]
    fn vectors_become_uniform_fixed_values() {
        assert_eq!(field("(1 0 0)").unwrap(), Field::fixed_value(Vector3::X));
        assert!(field("(1 0)").is_err());
        assert!(field("(nan inf 0)").is_err());
    }

    #[test]
    fn bare_names_select_parameterless_types() {
        assert_eq!(field("zeroGradient").unwrap(), Field::ZeroGradient);
        assert_eq!(field("slip").unwrap(), Field::Slip);
        assert!(matches!(field("fixedValue"), Err(FieldError::Mapping { .. })));
        assert!(matches!(field("noSuchType"), Err(FieldError::Mapping { .. })));
    }

    #[test]
    fn dictionary_bodies_with_or_without_braces() {
        let expected = Field::fixed_value(FieldValue::uniform("0"));
        assert_eq!(field("{ type fixedValue; value uniform 0; }").unwrap(), expected);
        assert_eq!(field("type fixedValue; value uniform 0").unwrap(), expected);
    }

    #[test]
    fn malformed_dictionaries_are_rejected() {
        assert!(field("{ type fixedValue; value uniform 0;").is_err());
        assert!(field("type fixedValue; type slip;").is_err());
        assert!(field("value uniform 0;").is_err());
        assert!(field("type;").is_err());
        assert!(field("{ type fixedValue; value { x 1; }; }").is_err());
    }

    #[test]
    fn rejects_free_text() {
        let err = field("not a field").unwrap_err();
        assert_eq!(err.input(), "not a field");
        assert!(field("   ").is_err());
    }
}
