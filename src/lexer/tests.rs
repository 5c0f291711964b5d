//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments and line tracking
//! - Error cases

use super::{
    lexer::{tokenize, unescape},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let source = "let mut fn if else while return print true false".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Mut);
    assert_eq!(tokens[2].kind, TokenKind::Fn);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::While);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::Print);
    assert_eq!(tokens[8].kind, TokenKind::True);
    assert_eq!(tokens[9].kind, TokenKind::False);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo baz_123 _underscore letter printer".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    // Keywords only match whole words
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "letter");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "printer");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 2.0".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "2.0");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"test""#.to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    // Token text keeps the escapes as written
    assert_eq!(tokens[0].value, r"hello\nworld");
    assert_eq!(tokens[4].value, r#"quote\"test"#);
    assert_eq!(tokens[5].kind, TokenKind::EOF);

    let decoded: Vec<Vec<u8>> = tokens[..5].iter().map(|token| unescape(&token.value)).collect();
    assert_eq!(decoded[0], b"hello\nworld");
    assert_eq!(decoded[1], b"tab\there");
    assert_eq!(decoded[2], b"backslash\\");
    assert_eq!(decoded[3], b"hexA");
    assert_eq!(decoded[4], b"quote\"test");
}

#[test]
fn test_unescape_bytes() {
    assert_eq!(unescape(r"\xff\x80"), vec![0xff, 0x80]);
    assert_eq!(unescape(r"\0end"), b"\0end");
    assert_eq!(unescape("é"), "é".as_bytes());
    assert_eq!(unescape(r"\xzz"), b"\\xzz");
    assert_eq!(unescape(r"\q"), b"\\q");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / == != < > <= >= =".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Equals);
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::LessEquals);
    assert_eq!(tokens[9].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[10].kind, TokenKind::Assignment);
    assert_eq!(tokens[11].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } , ; : ->".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::Colon);
    assert_eq!(tokens[7].kind, TokenKind::Arrow);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let source = "let x: int = 5; // this is a comment\nprint(x);".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Print,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_tracks_lines() {
    let source = "let a: int = 1;\n\n// note\nmut b: string = \"two\nlines\";\nb = \"x\";".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].line(), 1);
    let mut_token = tokens.iter().find(|token| token.kind == TokenKind::Mut).unwrap();
    assert_eq!(mut_token.line(), 4);

    let last_identifier = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Identifier)
        .last()
        .unwrap();
    assert_eq!(last_identifier.value, "b");
    assert_eq!(last_identifier.line(), 6);
}

#[test]
fn test_tokenize_positions() {
    let source = "let  x".to_string();
    let tokens = tokenize(source, Some("test.ch".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.offset, 0);
    assert_eq!(tokens[0].span.end.offset, 3);
    assert_eq!(tokens[1].span.start.offset, 5);
    assert_eq!(*tokens[1].span.start.file, "test.ch");
}

#[test]
fn test_tokenize_unrecognised_token() {
    let source = "let x: int = 5 @ 3;".to_string();
    let error = tokenize(source, Some("test.ch".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().offset, 15);
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "print(\"never closed);".to_string();
    let result = tokenize(source, None);

    assert!(result.is_err());
}
