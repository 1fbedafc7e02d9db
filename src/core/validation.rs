//! Input Validation
//!
//! Shape predicates over strings and decoded JSON, plus assertion helpers that
//! turn a failed predicate into a [`ValidationError`] naming the field.

use serde_json::Value;

use crate::error::{ProtocolError, ValidationError};
use crate::types::Scope;

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True for strings that are empty or whitespace only.
pub fn is_string_empty(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// Require a non-empty string argument.
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    if is_string_empty(value) {
        return Err(ValidationError::empty(field));
    }
    Ok(value)
}

/// Require a non-empty scope sequence.
pub fn require_non_empty_scopes<'a>(scopes: &'a [Scope]) -> Result<&'a [Scope], ValidationError> {
    if scopes.is_empty() {
        return Err(ValidationError::shape("scopes", "a non-empty list of scopes"));
    }
    Ok(scopes)
}

/// Require a decoded response body to be a JSON object.
pub fn require_object<'a>(
    field: &str,
    value: &'a Value,
) -> Result<&'a serde_json::Map<String, Value>, ProtocolError> {
    value.as_object().ok_or_else(|| ProtocolError::InvalidField {
        field: field.to_string(),
        expected: "a JSON object".to_string(),
    })
}

/// Require `object[field]` to be a non-empty string.
pub fn require_string_field<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'a str, ProtocolError> {
    let value = object.get(field).ok_or_else(|| ProtocolError::MissingField {
        field: field.to_string(),
    })?;

    match value.as_str() {
        Some(s) if !is_string_empty(s) => Ok(s),
        _ => Err(ProtocolError::InvalidField {
            field: field.to_string(),
            expected: "a non-empty string".to_string(),
        }),
    }
}

/// Require `object[field]` to be a non-negative integer.
pub fn require_u64_field(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<u64, ProtocolError> {
    let value = object.get(field).ok_or_else(|| ProtocolError::MissingField {
        field: field.to_string(),
    })?;

    if !is_number(value) {
        return Err(ProtocolError::InvalidField {
            field: field.to_string(),
            expected: "a number".to_string(),
        });
    }

    value.as_u64().ok_or_else(|| ProtocolError::InvalidField {
        field: field.to_string(),
        expected: "a non-negative integer".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_predicates() {
        assert!(is_string(&json!("x")));
        assert!(!is_string(&json!(1)));
        assert!(is_array(&json!([])));
        assert!(is_object(&json!({})));
        assert!(!is_object(&json!([])));
        assert!(is_number(&json!(3600)));
        assert!(is_string_empty(""));
        assert!(is_string_empty("   "));
        assert!(!is_string_empty("abc"));
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("clientId", "abc").unwrap(), "abc");
        assert_eq!(
            require_non_empty("clientId", "").unwrap_err(),
            ValidationError::EmptyField {
                field: "clientId".to_string()
            }
        );
    }

    #[test]
    fn test_require_non_empty_scopes() {
        assert!(require_non_empty_scopes(&[]).is_err());
        assert!(require_non_empty_scopes(&[Scope::Read]).is_ok());
    }

    #[test]
    fn test_require_fields() {
        let body = json!({"expires_in": 3600, "access_token": "A", "negative": -1, "empty": ""});
        let object = require_object("body", &body).unwrap();

        assert_eq!(require_u64_field(object, "expires_in").unwrap(), 3600);
        assert_eq!(require_string_field(object, "access_token").unwrap(), "A");

        assert!(matches!(
            require_string_field(object, "refresh_token"),
            Err(ProtocolError::MissingField { .. })
        ));
        assert!(matches!(
            require_string_field(object, "empty"),
            Err(ProtocolError::InvalidField { .. })
        ));
        assert!(matches!(
            require_u64_field(object, "negative"),
            Err(ProtocolError::InvalidField { .. })
        ));
        assert!(matches!(
            require_u64_field(object, "access_token"),
            Err(ProtocolError::InvalidField { .. })
        ));
        assert!(require_object("body", &json!(null)).is_err());
    }
}
