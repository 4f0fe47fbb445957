// Error handling for uri-templates

use std::fmt;

use thiserror::Error;

/// Malformed template text
///
/// `position` is the 0-based character offset of the offending character, or
/// the template length when the input ended inside an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position} in URI template \"{template}\"")]
pub struct ParseError {
    pub message: String,
    pub template: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, template: &str, position: usize) -> Self {
        Self {
            message: message.into(),
            template: template.to_string(),
            position,
        }
    }
}

/// A variable value whose shape cannot be expanded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid value type of variable \"{name}\": {type_description}. \
     Expected: string, array of strings or object of strings"
)]
pub struct InvalidValueTypeError {
    pub name: String,
    pub type_description: String,
}

/// How an expanded string is to be interpreted as a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UriKind {
    #[default]
    Absolute,
    Relative,
    RelativeOrAbsolute,
}

impl fmt::Display for UriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriKind::Absolute => write!(f, "absolute"),
            UriKind::Relative => write!(f, "relative"),
            UriKind::RelativeOrAbsolute => write!(f, "relative or absolute"),
        }
    }
}

/// An expanded string that is not a legal URI of the requested kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("invalid {kind} URI \"{uri}\": {source}")]
    Syntax {
        uri: String,
        kind: UriKind,
        source: url::ParseError,
    },
    #[error("\"{uri}\" is not a {kind} URI")]
    WrongKind { uri: String, kind: UriKind },
}

/// Any failure of the template facade
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidValueType(#[from] InvalidValueTypeError),
    #[error(transparent)]
    Uri(#[from] UriError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::new("unexpected end of URI template", "{a", 2);
        assert_eq!(
            err.to_string(),
            "unexpected end of URI template at position 2 in URI template \"{a\""
        );
    }

    #[test]
    fn test_invalid_value_type_message_names_variable_and_type() {
        let err = InvalidValueTypeError {
            name: "int".to_string(),
            type_description: "number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"int\""));
        assert!(msg.contains("number"));
    }

    #[test]
    fn test_umbrella_is_transparent() {
        let err: Error = ParseError::new("invalid URI template modifier", "{a:}", 3).into();
        assert_eq!(
            err.to_string(),
            "invalid URI template modifier at position 3 in URI template \"{a:}\""
        );
        assert!(matches!(err, Error::Parse(_)));
    }
}
