//! Literal tests - numbers with suffixes, strings and escapes

use crate::frontend::lexer::{tokenize, Number, TokenKind};

#[test]
fn test_integer() {
    let tokens = tokenize("42").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Integer(42)));
}

#[test]
fn test_long_suffix() {
    let tokens = tokenize("123456L").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Long(123456)));
}

#[test]
fn test_fraction_without_suffix_is_float() {
    let tokens = tokenize("1.2345").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Float(1.2345)));
}

#[test]
fn test_double_suffix() {
    let tokens = tokenize("1.2345d").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Double(1.2345)));
}

#[test]
fn test_zero_fraction_is_float() {
    let tokens = tokenize("0.0").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Float(0.0)));
}

#[test]
fn test_float_suffix_without_fraction() {
    let tokens = tokenize("5f").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Float(5.0)));
}

#[test]
fn test_negative_number() {
    let tokens = tokenize("-12").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Integer(-12)));
}

#[test]
fn test_lone_minus_is_structural() {
    let tokens = tokenize("- x").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Other('-'));
}

#[test]
fn test_dot_after_integer_stays_separate() {
    let tokens = tokenize("1.x").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Integer(1)));
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::Identifier("x".to_string()));
}

#[test]
fn test_double_quoted_string() {
    let tokens = tokenize("\"hello\"").unwrap();
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral("hello".to_string())
    );
}

#[test]
fn test_single_quoted_string() {
    let tokens = tokenize("'world'").unwrap();
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral("world".to_string())
    );
}

#[test]
fn test_all_escapes_round_trip() {
    let tokens = tokenize("\"\\0\\b\\t\\n\\v\\f\\r\\'\\\\\"").unwrap();
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral("\0\u{0008}\t\n\u{000B}\u{000C}\r'\\".to_string())
    );
}

#[test]
fn test_escaped_quote_inside_string() {
    let tokens = tokenize("\"say \\\"hi\\\"\"").unwrap();
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral("say \"hi\"".to_string())
    );
}
