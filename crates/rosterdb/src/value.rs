use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// Scalar field value as seen at the form boundary.
/// Every tracked field is a string there; `Null` marks a field that
/// exists on the record but currently has no value.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Text(String),
}

impl Value {
    /// Whether the value satisfies a required-field check.
    ///
    /// Whitespace-only text counts as empty, so `" "` does not satisfy
    /// a requirement even though it compares unequal to `""` for
    /// dirty tracking.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Text(text) => !text.trim().is_empty(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Option<String>> for Value {
    fn from(text: Option<String>) -> Self {
        text.map_or(Self::Null, Self::Text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_not_filled() {
        assert!(!Value::Null.is_filled());
    }

    #[test]
    fn whitespace_only_text_is_not_filled() {
        assert!(!Value::Text(String::new()).is_filled());
        assert!(!Value::Text("   ".to_string()).is_filled());
        assert!(!Value::Text("\t\n".to_string()).is_filled());
    }

    #[test]
    fn padded_text_is_filled() {
        assert!(Value::Text(" Tom ".to_string()).is_filled());
    }

    #[test]
    fn whitespace_differs_from_empty_for_equality() {
        // Equality stays a plain string compare; only is_filled trims.
        assert_ne!(Value::from(" "), Value::from(""));
    }

    #[test]
    fn option_conversion_maps_none_to_null() {
        assert_eq!(Value::from(None), Value::Null);
        assert_eq!(
            Value::from(Some("x".to_string())),
            Value::Text("x".to_string())
        );
    }
}
