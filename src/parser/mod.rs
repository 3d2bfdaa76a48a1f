//! Lexing and parsing for snippet sources.
//!
//! The front-end is total: every input, however malformed, produces a tree
//! plus a list of diagnostics describing what was wrong and how analysis
//! recovered. Nothing in here panics or loops forever on bad input.

pub mod diagnostics;
pub mod error;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod span;

pub use diagnostics::{Diagnostic, RecoveryAction, Severity};
pub use error::{ParseError, ParseResult};
pub use lexer::{Lexer, LexicalToken, Token, TokenKind};
pub use parser::Parser;
pub use span::{HasSpan, Location, Span};

use crate::ast::SourceFile;

/// Parse a snippet source into a tree plus diagnostics. Never fails.
pub fn parse(source: &str) -> (SourceFile, Vec<Diagnostic>) {
    Parser::new(source).parse()
}

/// Scan a snippet source into its non-trivia tokens plus diagnostics.
pub fn tokenize(source: &str) -> (Vec<LexicalToken>, Vec<Diagnostic>) {
    Lexer::new(source).tokenize()
}

/// Scan a snippet source into every token including whitespace and comments.
/// Concatenating the lexemes reconstructs the source byte for byte.
pub fn tokenize_lossless(source: &str) -> (Vec<LexicalToken>, Vec<Diagnostic>) {
    Lexer::new(source).tokenize_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_total_on_arbitrary_bytes() {
        for source in ["", ";;;", "}}}", "class", "\u{FEFF}", "{ ( [ < \" '"] {
            let (_, _) = parse(source);
        }
    }

    #[test]
    fn tokenize_filters_trivia() {
        let (tokens, _) = tokenize("class A // c\n{}");
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn tokenize_lossless_keeps_trivia() {
        let source = "class A // c\n{}";
        let (tokens, _) = tokenize_lossless(source);
        let rebuilt: String = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(rebuilt, source);
    }
}
