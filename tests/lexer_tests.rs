use jfront::parser::{RecoveryAction, Token, TokenKind};

#[test]
fn lossless_scan_reconstructs_every_input() {
    let sources = [
        "public final class X {}",
        "class A { // trailing\n  int x = 0x1F; /* note */ }",
        "'unterminated to end of line\nint y;",
        "\u{FEFF}package p;  \t\r\n",
        "weird @ # ` bytes $name _under",
        "",
    ];
    for source in sources {
        let (tokens, _) = jfront::tokenize_lossless(source);
        let rebuilt: String = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(rebuilt, source, "failed for {:?}", source);
    }
}

#[test]
fn filtered_scan_drops_whitespace_and_comments() {
    let source = "class A { /* body */ } // done";
    let (tokens, diagnostics) = jfront::tokenize(source);
    assert!(diagnostics.is_empty());
    let kinds: Vec<_> = tokens.iter().map(|t| t.token_type().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Punctuation,
        ]
    );
}

#[test]
fn single_and_double_quoted_strings() {
    let (tokens, diagnostics) = jfront::tokenize(r#""double" 'single' "with \" escape""#);
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.is(&Token::StringLiteral)));
}

#[test]
fn unterminated_string_reports_and_continues() {
    let source = "String s = 'oops\nint x;";
    let (tokens, diagnostics) = jfront::tokenize(source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].recovery, RecoveryAction::ClosedAtLineBoundary);
    assert_eq!(diagnostics[0].span.start.line, 1);

    // Scanning picked back up on the next line
    assert!(tokens.iter().any(|t| t.is(&Token::Int)));
    assert!(tokens.iter().any(|t| t.is(&Token::UnterminatedString)));
}

#[test]
fn unknown_characters_each_get_a_diagnostic() {
    let source = "int a # b @ c";
    let (tokens, diagnostics) = jfront::tokenize(source);
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.is_error()));
    assert_eq!(tokens.iter().filter(|t| t.is(&Token::Error)).count(), 2);
    // All three identifiers survive
    assert_eq!(tokens.iter().filter(|t| t.is(&Token::Identifier)).count(), 3);
}

#[test]
fn no_fused_shift_tokens() {
    let (tokens, diagnostics) = jfront::tokenize("Map<String, List<Item>> cache");
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.iter().filter(|t| t.is(&Token::Gt)).count(), 2);
    assert_eq!(tokens.iter().filter(|t| t.is(&Token::Lt)).count(), 2);
}

#[test]
fn locations_track_lines_and_columns() {
    let source = "class A\n  extends B";
    let (tokens, _) = jfront::tokenize(source);
    assert_eq!(tokens[0].location().line, 1);
    assert_eq!(tokens[0].location().column, 1);
    assert_eq!(tokens[2].location().line, 2);
    assert_eq!(tokens[2].location().column, 3);
    assert_eq!(tokens[2].span().end.column, 10);
}

#[test]
fn number_shapes() {
    let (tokens, diagnostics) = jfront::tokenize("0 42 1_000 7L 0xFF 3.14 2.5e10 1.0f");
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.len(), 8);
    assert!(tokens.iter().all(|t| t.is(&Token::NumberLiteral)));
}
