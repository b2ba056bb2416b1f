#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_function_definition_tokens() {
    assert_eq!(
        kinds("(define (add (a b)) (+ a b))"),
        vec![
            TokenKind::LeftParen,
            TokenKind::Define,
            TokenKind::LeftParen,
            TokenKind::Symbol,
            TokenKind::LeftParen,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::RightParen,
            TokenKind::RightParen,
            TokenKind::LeftParen,
            TokenKind::Plus,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::RightParen,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_all_operators() {
    assert_eq!(
        kinds("+ - * / = < >"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equal,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_reserved_words_and_symbols() {
    assert_eq!(
        kinds("if begin let set and or not true nil iffy set-x!"),
        vec![
            TokenKind::If,
            TokenKind::Begin,
            TokenKind::Let,
            TokenKind::Set,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::True,
            TokenKind::Nil,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_number_literals() {
    let tokens = lex("42 3.25").unwrap();
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Number(42.0)));
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].literal, Some(TokenLiteral::Number(3.25)));
}

#[test]
fn test_minus_is_never_part_of_number() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_string_escapes() {
    let tokens = lex(r#""a\tb\n\"q\"""#).unwrap();
    assert_eq!(
        tokens[0].literal,
        Some(TokenLiteral::Str("a\tb\n\"q\"".to_string()))
    );
}

#[test]
fn test_empty_string() {
    let tokens = lex(r#""""#).unwrap();
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Str(String::new())));
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("; leading comment\n(x) ; trailing"),
        vec![
            TokenKind::LeftParen,
            TokenKind::Symbol,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_line_numbers() {
    let tokens = lex("(a\n b\n\n c)").unwrap();
    let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 4, 4, 4]);
}

#[test]
fn test_multiline_string_advances_line() {
    let tokens = lex("\"one\ntwo\" x").unwrap();
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_empty_source_is_just_eof() {
    let tokens = lex("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        lex("(a\n #)"),
        Err(LexError::UnexpectedCharacter { ch: '#', line: 2 })
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        lex("(print \"abc"),
        Err(LexError::UnterminatedString { line: 1 })
    );
}

#[test]
fn test_invalid_escape() {
    assert_eq!(
        lex(r#""\q""#),
        Err(LexError::InvalidEscape { ch: 'q', line: 1 })
    );
}

proptest! {
    #[test]
    fn prop_integer_lexemes_round_trip(n in 0u32..) {
        let tokens = lex(&n.to_string()).unwrap();
        prop_assert_eq!(tokens[0].literal.clone(), Some(TokenLiteral::Number(f64::from(n))));
    }

    #[test]
    fn prop_decimal_lexemes_round_trip(x in 0.0f64..1.0e9) {
        let tokens = lex(&x.to_string()).unwrap();
        prop_assert_eq!(tokens[0].literal.clone(), Some(TokenLiteral::Number(x)));
    }
}
