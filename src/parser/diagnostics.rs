use super::error::ParseError;
use super::span::Span;
use std::fmt;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The recovery step the front-end took after reporting a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Nothing was skipped; analysis continued at the next token
    None,
    /// A single unrecognized character was consumed
    SkippedCharacter,
    /// An unterminated literal was closed at the line boundary
    ClosedAtLineBoundary,
    /// Tokens were skipped up to the next top-level declaration keyword
    SkippedToDeclaration,
    /// Tokens were skipped up to the next member boundary (';' or '}')
    SkippedToMemberBoundary,
    /// The unmatched tokens were kept verbatim as a raw expression statement
    RawStatement,
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RecoveryAction::None => "none",
            RecoveryAction::SkippedCharacter => "skipped character",
            RecoveryAction::ClosedAtLineBoundary => "closed at line boundary",
            RecoveryAction::SkippedToDeclaration => "skipped to next declaration",
            RecoveryAction::SkippedToMemberBoundary => "skipped to member boundary",
            RecoveryAction::RawStatement => "kept as raw statement",
        };
        write!(f, "{}", text)
    }
}

/// A structured record of a lexical or syntactic issue. Diagnostics
/// accumulate during a single analysis pass and are handed back to the
/// caller alongside the tree; none of them abort the pass.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub recovery: RecoveryAction,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span, recovery: RecoveryAction) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
            recovery,
        }
    }

    pub fn warning(message: impl Into<String>, span: Span, recovery: RecoveryAction) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
            recovery,
        }
    }

    /// Convert a production error into a diagnostic record
    pub fn from_parse_error(err: &ParseError, recovery: RecoveryAction) -> Self {
        Self::error(err.to_string(), Span::single(err.location()), recovery)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.span, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::span::Location;

    #[test]
    fn diagnostic_display_includes_position() {
        let span = Span::single(Location::new(3, 7, 20));
        let d = Diagnostic::error("expected ';'", span, RecoveryAction::SkippedToMemberBoundary);
        assert_eq!(d.to_string(), "error at 3:7: expected ';'");
        assert!(d.is_error());
    }
}
