// tests/lexer_tests.rs

use sramp_query::ast::Token;
use sramp_query::error::ParseErrorKind;
use sramp_query::lexer::{tokenize, Lexer};

fn tokens(input: &str) -> Vec<Token> {
    tokenize(input)
        .unwrap()
        .into_iter()
        .map(|s| s.token)
        .collect()
}

// ============================================================================
// Punctuation and Operators
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("/", Token::Slash),
        ("[", Token::LBracket),
        ("]", Token::RBracket),
        ("(", Token::LParen),
        (")", Token::RParen),
        ("@", Token::At),
        (",", Token::Comma),
        (":", Token::Colon),
        (".", Token::Dot),
        ("=", Token::Eq),
        ("<", Token::Lt),
        (">", Token::Gt),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
    }
}

#[test]
fn test_two_char_tokens() {
    assert_eq!(tokens("//"), vec![Token::DoubleSlash, Token::Eof]);
    assert_eq!(tokens("!="), vec![Token::NotEq, Token::Eof]);
    assert_eq!(tokens("<="), vec![Token::LtEq, Token::Eof]);
    assert_eq!(tokens(">="), vec![Token::GtEq, Token::Eof]);
}

#[test]
fn test_lone_bang_is_rejected() {
    let err = tokenize("[@a ! 'x']").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('!'));
    assert_eq!(err.position, 4);
}

#[test]
fn test_unknown_character() {
    let err = tokenize("/s-ramp#").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('#'));
    assert_eq!(err.position, 7);
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_names_allow_hyphen_and_dot() {
    assert_eq!(
        tokens("s-ramp maven.groupId _private x1"),
        vec![
            Token::Name("s-ramp".to_string()),
            Token::Name("maven.groupId".to_string()),
            Token::Name("_private".to_string()),
            Token::Name("x1".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_prefixed_name_is_three_tokens() {
    assert_eq!(
        tokens("fn:matches"),
        vec![
            Token::Name("fn".to_string()),
            Token::Colon,
            Token::Name("matches".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_keywords_only_match_whole_names() {
    assert_eq!(
        tokens("and or order andy"),
        vec![
            Token::And,
            Token::Or,
            Token::Name("order".to_string()),
            Token::Name("andy".to_string()),
            Token::Eof,
        ]
    );
}

// ============================================================================
// String Literals
// ============================================================================

#[test]
fn test_both_quote_styles() {
    assert_eq!(
        tokens(r#"'single' "double""#),
        vec![
            Token::String("single".to_string()),
            Token::String("double".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_other_quote_style_needs_no_escape() {
    assert_eq!(
        tokens(r#""it's" 'say "hi"'"#),
        vec![
            Token::String("it's".to_string()),
            Token::String("say \"hi\"".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_doubled_quote_is_an_escape() {
    assert_eq!(
        tokens("'it''s' \"a\"\"b\""),
        vec![
            Token::String("it's".to_string()),
            Token::String("a\"b".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_question_mark_inside_string() {
    assert_eq!(
        tokens("'what?'"),
        vec![Token::String("what?".to_string()), Token::Eof]
    );
}

#[test]
fn test_unterminated_string() {
    let err = tokenize("/s-ramp/xsd/XsdDocument[@name = 'foo]").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    assert_eq!(err.position, 32);
    assert_eq!(
        err.to_string(),
        "Invalid final argument: did you forget to close your quotes? (at position 32)"
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers_keep_their_text() {
    assert_eq!(
        tokens("42 1.50 -3 12345678901234567890123456789012345"),
        vec![
            Token::Number("42".to_string()),
            Token::Number("1.50".to_string()),
            Token::Number("-3".to_string()),
            Token::Number("12345678901234567890123456789012345".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_leading_dot_and_minus() {
    assert_eq!(
        tokens(".5 -.25"),
        vec![
            Token::Number("0.5".to_string()),
            Token::Number("-0.25".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_dot_not_followed_by_digit() {
    assert_eq!(
        tokens("(., 'x')"),
        vec![
            Token::LParen,
            Token::Dot,
            Token::Comma,
            Token::String("x".to_string()),
            Token::RParen,
            Token::Eof,
        ]
    );
}

// ============================================================================
// Whitespace and Comments
// ============================================================================

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        tokens("/s-ramp (: all artifacts (: nested :) :) [@a]"),
        tokens("/s-ramp[@a]")
    );
}

#[test]
fn test_unterminated_comment() {
    let err = tokenize("/s-ramp (: oops").unwrap_err();
    assert_eq!(err.position, 8);
}

#[test]
fn test_positions_skip_whitespace() {
    let spans = tokenize("  /  s-ramp").unwrap();
    assert_eq!(spans[0].position, 2);
    assert_eq!(spans[1].position, 5);
    assert_eq!(spans[2].position, 11);
}
