//! Field descriptors: validated, cheaply clonable field names.

use core::str::FromStr;
use std::sync::Arc;

use crate::error::StructError;

/// Name of one attribute slot on a struct type.
///
/// Always shaped like an identifier: a lowercase letter or underscore followed
/// by ASCII letters, digits or underscores.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(Arc<str>);

impl FieldName {
    /// Parse a field name, returning `None` if it is not identifier-shaped.
    pub fn parse(name: &str) -> Option<Self> {
        is_identifier(name).then(|| Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true when `name` matches `^[_a-z][a-zA-Z0-9_]*$`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl core::fmt::Debug for FieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl core::fmt::Display for FieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for FieldName {
    type Err = StructError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StructError::configuration("FieldName", vec![s.to_string()]))
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier_shapes() {
        for name in ["a", "foo", "_private", "snake_case", "camelCase", "x1", "__"] {
            assert!(is_identifier(name), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_non_identifier_shapes() {
        for name in ["", "Foo", "1st", "with-dash", "with space", "é", "a.b", "a?"] {
            assert!(!is_identifier(name), "{name} should be rejected");
        }
    }

    #[test]
    fn from_str_reports_configuration_error() {
        let err = "Bad".parse::<FieldName>().unwrap_err();
        assert_eq!(err, StructError::configuration("FieldName", vec!["Bad".into()]));
        assert_eq!("good".parse::<FieldName>().unwrap().as_str(), "good");
    }

    #[test]
    fn debug_renders_as_symbol() {
        let name = FieldName::parse("email").unwrap();
        assert_eq!(format!("{name:?}"), ":email");
        assert_eq!(name.to_string(), "email");
    }
}
