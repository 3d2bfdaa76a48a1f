use super::span::Location;
use thiserror::Error;

/// Errors raised while matching a single production. These never escape the
/// public API; the parser converts them into diagnostics and recovers.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    /// Unexpected token encountered
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
    },

    /// Unexpected end of input
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        expected: String,
        location: Location,
    },

    /// A reserved word appeared in identifier position
    #[error("reserved word '{word}' cannot be used as an identifier")]
    ReservedWord { word: String, location: Location },

    /// Invalid syntax
    #[error("{message}")]
    InvalidSyntax { message: String, location: Location },
}

impl ParseError {
    pub fn unexpected_token(expected: &str, found: &str, location: Location) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            location,
        }
    }

    pub fn unexpected_end_of_input(expected: &str, location: Location) -> Self {
        ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
            location,
        }
    }

    pub fn invalid_syntax(message: &str, location: Location) -> Self {
        ParseError::InvalidSyntax {
            message: message.to_string(),
            location,
        }
    }

    /// Get the location of the error
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedToken { location, .. } => *location,
            ParseError::UnexpectedEndOfInput { location, .. } => *location,
            ParseError::ReservedWord { location, .. } => *location,
            ParseError::InvalidSyntax { location, .. } => *location,
        }
    }
}

/// Result type for individual productions
pub type ParseResult<T> = Result<T, ParseError>;
