use logos::Logos;

use super::diagnostics::{Diagnostic, RecoveryAction};
use super::span::{Location, Span};

/// Token types for the snippet language
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Keywords
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("static")]
    Static,
    #[token("final")]
    Final,
    #[token("abstract")]
    Abstract,
    #[token("throws")]
    Throws,
    #[token("new")]
    New,
    #[token("return")]
    Return,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("this")]
    This,
    #[token("super")]
    Super,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("void")]
    Void,
    #[token("boolean")]
    Boolean,
    #[token("byte")]
    Byte,
    #[token("short")]
    Short,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("char")]
    Char,
    #[token("float")]
    Float,
    #[token("double")]
    Double,

    // Operators
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    // No '>>'/'<<' tokens: generic brackets always lex as single '<'/'>',
    // so deeply nested type arguments close one bracket at a time.
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    PipePipe,

    // Separators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,

    // Literals; both quote styles delimit strings in the fixture corpus
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    StringLiteral,
    // A quote with no closing delimiter before the line break; kept as a
    // literal token and reported as a diagnostic
    #[regex(r#""[^"\n]*"#)]
    #[regex(r"'[^'\n]*")]
    UnterminatedString,
    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[fFdD]?")]
    NumberLiteral,

    // Identifiers
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,

    // Comments and whitespace
    #[regex(r"//[^\n]*")]
    LineComment,
    // Block/Javadoc comment (handles /**...*/, /*...*/, and multiple '*')
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 2)]
    BlockComment,
    #[regex(r"[ \t\n\r]+", priority = 2)]
    Whitespace,

    // Unicode BOM (Byte Order Mark) - treat as ignorable whitespace
    #[token("\u{FEFF}")]
    Bom,

    // Catch-all for any character no other rule recognizes; scanning never
    // fails, it classifies and moves on
    #[regex(r".", priority = 1)]
    Error,
}

/// Coarse token classification used in diagnostics and tool output.
/// `Eof` never appears inside a token stream; consumers synthesize it when
/// they run off the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Punctuation,
    StringLiteral,
    NumberLiteral,
    Trivia,
    Error,
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Punctuation => "punctuation",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::Trivia => "trivia",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", text)
    }
}

impl Token {
    /// Check if this token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(self,
            Token::Package | Token::Import | Token::Class | Token::Interface |
            Token::Enum | Token::Extends | Token::Implements |
            Token::Public | Token::Protected | Token::Private |
            Token::Static | Token::Final | Token::Abstract |
            Token::Throws | Token::New | Token::Return | Token::For |
            Token::If | Token::Else | Token::While |
            Token::This | Token::Super | Token::True | Token::False |
            Token::Null | Token::Void | Token::Boolean | Token::Byte |
            Token::Short | Token::Int | Token::Long | Token::Char |
            Token::Float | Token::Double
        )
    }

    /// Check if this token is a modifier
    pub fn is_modifier(&self) -> bool {
        matches!(self,
            Token::Public | Token::Protected | Token::Private |
            Token::Static | Token::Final | Token::Abstract
        )
    }

    /// Check if this token is a primitive type
    pub fn is_primitive_type(&self) -> bool {
        matches!(self,
            Token::Boolean | Token::Byte | Token::Short | Token::Int |
            Token::Long | Token::Char | Token::Float | Token::Double |
            Token::Void
        )
    }

    /// Check if this token is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self,
            Token::StringLiteral | Token::UnterminatedString |
            Token::NumberLiteral | Token::True | Token::False | Token::Null
        )
    }

    /// Check if this token is whitespace or a comment
    pub fn is_trivia(&self) -> bool {
        matches!(self,
            Token::Whitespace | Token::Bom | Token::LineComment | Token::BlockComment
        )
    }

    /// Coarse classification of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Identifier => TokenKind::Identifier,
            Token::StringLiteral | Token::UnterminatedString => TokenKind::StringLiteral,
            Token::NumberLiteral => TokenKind::NumberLiteral,
            Token::Error => TokenKind::Error,
            t if t.is_keyword() => TokenKind::Keyword,
            t if t.is_trivia() => TokenKind::Trivia,
            _ => TokenKind::Punctuation,
        }
    }
}

/// Lexical token with location information. Immutable once produced.
#[derive(Debug, Clone)]
pub struct LexicalToken {
    pub token: Token,
    pub lexeme: String,
    pub location: Location,
}

impl LexicalToken {
    pub fn new(token: Token, lexeme: String, location: Location) -> Self {
        Self { token, lexeme, location }
    }

    /// Get the token type
    pub fn token_type(&self) -> &Token {
        &self.token
    }

    /// Get the lexeme (actual text)
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Get the start location
    pub fn location(&self) -> Location {
        self.location
    }

    /// Get the full source span covered by the lexeme
    pub fn span(&self) -> Span {
        let mut end = self.location;
        end.advance_str(&self.lexeme);
        Span::new(self.location, end)
    }

    /// Check if this token matches the given token type
    pub fn is(&self, token_type: &Token) -> bool {
        std::mem::discriminant(&self.token) == std::mem::discriminant(token_type)
    }
}

/// Lexer for snippet sources. Total over all inputs: unrecognized characters
/// become `Token::Error` plus a diagnostic and scanning resumes at the next
/// character.
pub struct Lexer<'a> {
    lexer: logos::Lexer<'a, Token>,
    location: Location,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Token::lexer(source),
            location: Location::start(),
            diagnostics: Vec::new(),
        }
    }

    /// Get the next token, or None at end of input
    pub fn next_token(&mut self) -> Option<LexicalToken> {
        let result = self.lexer.next()?;
        let token = match result {
            Ok(token) => token,
            // Unreachable with the catch-all rule in place; kept so a future
            // pattern change cannot make scanning abort
            Err(()) => {
                if self.lexer.slice().is_empty() {
                    if let Some(ch) = self.lexer.remainder().chars().next() {
                        self.lexer.bump(ch.len_utf8());
                    }
                }
                Token::Error
            }
        };

        let lexeme = self.lexer.slice().to_string();
        let start = self.location;
        self.location.advance_str(&lexeme);
        let span = Span::new(start, self.location);

        match token {
            Token::Error => {
                self.diagnostics.push(Diagnostic::error(
                    format!("unrecognized character '{}'", lexeme),
                    span,
                    RecoveryAction::SkippedCharacter,
                ));
            }
            Token::UnterminatedString => {
                self.diagnostics.push(Diagnostic::error(
                    "unterminated string literal; closed at end of line",
                    span,
                    RecoveryAction::ClosedAtLineBoundary,
                ));
            }
            _ => {}
        }

        Some(LexicalToken::new(token, lexeme, start))
    }

    /// Get every token from the source, including whitespace and comments.
    /// Concatenating the lexemes in order reconstructs the source exactly.
    pub fn tokenize_all(mut self) -> (Vec<LexicalToken>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        (tokens, self.diagnostics)
    }

    /// Get all non-trivia tokens from the source
    pub fn tokenize(mut self) -> (Vec<LexicalToken>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            if !token.token.is_trivia() {
                tokens.push(token);
            }
        }
        (tokens, self.diagnostics)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexicalToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_identifiers() {
        let source = "public class Test extends Object implements Marker";
        let (tokens, diagnostics) = Lexer::new(source).tokenize();

        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 7);
        assert!(tokens[0].is(&Token::Public));
        assert!(tokens[1].is(&Token::Class));
        assert!(tokens[2].is(&Token::Identifier));
        assert!(tokens[3].is(&Token::Extends));
        assert!(tokens[4].is(&Token::Identifier));
        assert!(tokens[5].is(&Token::Implements));
        assert!(tokens[6].is(&Token::Identifier));
    }

    #[test]
    fn both_quote_styles_are_strings() {
        let source = r#""hello" 'world' 42 true false null"#;
        let (tokens, diagnostics) = Lexer::new(source).tokenize();

        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 6);
        assert!(tokens[0].is(&Token::StringLiteral));
        assert!(tokens[1].is(&Token::StringLiteral));
        assert!(tokens[2].is(&Token::NumberLiteral));
        assert!(tokens[3].is(&Token::True));
        assert!(tokens[4].is(&Token::False));
        assert!(tokens[5].is(&Token::Null));
    }

    #[test]
    fn unterminated_string_closes_at_line_end() {
        let source = "'Hello\nnext";
        let (tokens, diagnostics) = Lexer::new(source).tokenize();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].recovery,
            crate::parser::diagnostics::RecoveryAction::ClosedAtLineBoundary
        );
        assert!(tokens[0].is(&Token::UnterminatedString));
        assert_eq!(tokens[0].lexeme(), "'Hello");
        assert!(tokens[1].is(&Token::Identifier));
    }

    #[test]
    fn unrecognized_character_yields_error_token() {
        let source = "int x # y";
        let (tokens, diagnostics) = Lexer::new(source).tokenize();

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains('#'));
        assert!(tokens.iter().any(|t| t.is(&Token::Error)));
        // Scanning resumed after the bad character
        assert!(tokens.last().unwrap().is(&Token::Identifier));
    }

    #[test]
    fn nested_generics_close_one_bracket_at_a_time() {
        let source = "String<Test<Thing<What>>>[]";
        let (tokens, diagnostics) = Lexer::new(source).tokenize();

        assert!(diagnostics.is_empty());
        let gts = tokens.iter().filter(|t| t.is(&Token::Gt)).count();
        assert_eq!(gts, 3);
        assert!(tokens[tokens.len() - 2].is(&Token::LBracket));
        assert!(tokens[tokens.len() - 1].is(&Token::RBracket));
    }

    #[test]
    fn lossless_lexing_reconstructs_source() {
        let source = "class A { // note\n  int x = 1; /* block */ }\u{FEFF}@";
        let (tokens, _) = Lexer::new(source).tokenize_all();
        let rebuilt: String = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn comments_are_trivia() {
        let source = "// line comment\n/* block comment */";
        let (tokens, diagnostics) = Lexer::new(source).tokenize();
        assert!(diagnostics.is_empty());
        assert!(tokens.is_empty());
    }

    #[test]
    fn token_spans_cover_lexemes() {
        let source = "class Foo";
        let (tokens, _) = Lexer::new(source).tokenize();
        assert_eq!(tokens[1].span().start.column, 7);
        assert_eq!(tokens[1].span().end.column, 10);
        assert_eq!(tokens[1].span().len(), 3);
    }
}
