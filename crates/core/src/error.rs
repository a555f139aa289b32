//! Struct error model.

use thiserror::Error;

/// Result type used across the factory and its instances.
pub type StructResult<T> = Result<T, StructError>;

/// Errors raised while defining struct types or working with their instances.
///
/// Construction is permissive by default, so `Arity` and `UnknownField` only
/// surface when a type opts into [`Validation::Strict`](crate::Validation::Strict).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructError {
    /// One or more field names were rejected at definition time.
    #[error(
        "{type_name} only allows field names shaped like identifiers (/[_a-z][a-zA-Z0-9_]*/), rejected: {}",
        .names.join(", ")
    )]
    Configuration {
        type_name: String,
        names: Vec<String>,
    },

    /// A write was attempted on a locked instance.
    #[error("can't modify frozen {type_name}: field `{field}`")]
    ImmutabilityViolation { type_name: String, field: String },

    /// No user method or field reader answers to this name.
    #[error("undefined method `{method}` for {type_name}")]
    UnknownMethod { type_name: String, method: String },

    /// `after_initialize` tried to record an attribute that is not
    /// identifier-shaped.
    #[error("invalid attribute name `{name}` for {type_name}")]
    InvalidAttribute { type_name: String, name: String },

    /// A user-supplied method or hook failed.
    #[error("behavior failed: {0}")]
    Behavior(String),

    /// Positional construction received the wrong number of values (strict mode).
    #[error("wrong number of values for {type_name} (given {given}, expected {expected})")]
    Arity {
        type_name: String,
        expected: usize,
        given: usize,
    },

    /// Mapping construction received an undeclared key (strict mode).
    #[error("unknown field `{field}` for {type_name}")]
    UnknownField { type_name: String, field: String },
}

impl StructError {
    pub fn configuration(type_name: impl Into<String>, names: Vec<String>) -> Self {
        Self::Configuration {
            type_name: type_name.into(),
            names,
        }
    }

    pub fn immutable(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ImmutabilityViolation {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn unknown_method(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn invalid_attribute(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    /// Convenience for user methods and hooks that need to fail.
    pub fn behavior(msg: impl Into<String>) -> Self {
        Self::Behavior(msg.into())
    }

    pub fn arity(type_name: impl Into<String>, expected: usize, given: usize) -> Self {
        Self::Arity {
            type_name: type_name.into(),
            expected,
            given,
        }
    }

    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn is_immutability_violation(&self) -> bool {
        matches!(self, Self::ImmutabilityViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_lists_every_rejected_name() {
        let err = StructError::configuration("Person", vec!["Name".into(), "1st".into()]);
        let msg = err.to_string();
        assert!(msg.starts_with("Person only allows field names"));
        assert!(msg.ends_with("rejected: Name, 1st"));
    }

    #[test]
    fn immutability_violation_is_detectable() {
        let err = StructError::immutable("Person", "name");
        assert!(err.is_immutability_violation());
        assert_eq!(err.to_string(), "can't modify frozen Person: field `name`");
        assert!(!StructError::behavior("nope").is_immutability_violation());
    }
}
