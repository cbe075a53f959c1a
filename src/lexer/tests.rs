//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Glyph punctuation and the assignment operator
//! - Comments and position tracking
//! - Error cases

use super::{
    lexer::{tokenize, tokenize_with, unescape},
    tokens::TokenKind,
};
use crate::{config::glyphs::Glyphs, errors::errors::{ErrorImpl, ErrorKind}};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.brik".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.brik".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 -7 42. .5 -0.25".to_string();
    let tokens = tokenize(source, Some("test.brik".to_string())).unwrap();

    let values: Vec<&str> = tokens[..7].iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", "0", "-7", "42.", ".5", "-0.25"]);
    assert!(tokens[..7].iter().all(|t| t.kind == TokenKind::Number));
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_number_followed_by_identifier() {
    assert_eq!(
        kinds("12abc"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_integer_overflow_is_lexical_error() {
    let error = tokenize("x := 99999999999999999999".to_string(), None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!((error.line(), error.column()), (1, 6));
    assert!(error.get_tip().to_string().contains("signed 64-bit range"));

    let float = tokenize("x := 99999999999999999999.0".to_string(), None).unwrap();
    assert_eq!(float[2].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "world" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.brik".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "quote\"test" "odd\q""#.to_string();
    let tokens = tokenize(source, Some("test.brik".to_string())).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"test");
    assert_eq!(tokens[4].value, "oddq");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_unescape_drops_unknown_backslash() {
    assert_eq!(unescape(r"a\zb"), "azb");
    assert_eq!(unescape(r"\\\n"), "\\\n");
    assert_eq!(unescape("plain"), "plain");
}

#[test]
fn test_string_may_span_lines() {
    let tokens = tokenize("a := \"one\ntwo\" b".to_string(), None).unwrap();

    assert_eq!(tokens[2].value, "one\ntwo");
    assert_eq!(tokens[3].value, "b");
    assert_eq!((tokens[3].position.line, tokens[3].position.column), (2, 6));
}

#[test]
fn test_unterminated_string() {
    let source = "a := 1\nb := 2\nc := \"never closed\n".to_string();
    let error = tokenize(source, Some("test.brik".to_string())).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!((error.line(), error.column()), (3, 6));
}

#[test]
fn test_trailing_backslash_is_unterminated() {
    let error = tokenize("s := \"abc\\".to_string(), None).unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.column(), 6);

    let error = tokenize("s := \"abc\\\"".to_string(), None).unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_tokenize_glyphs() {
    assert_eq!(
        kinds("x := ¿ a := ¡ 1, 2 ! ?"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::OpenRecord,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::OpenList,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::CloseList,
            TokenKind::CloseRecord,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_assignment_is_a_single_token() {
    let tokens = tokenize("a:=b".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].value, ":=");
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_lone_colon_is_unrecognised() {
    let error = tokenize("a : b".to_string(), None).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: ':' });
    assert_eq!(error.character(), Some(':'));
    assert_eq!((error.line(), error.column()), (1, 3));
}

#[test]
fn test_comments_are_discarded() {
    assert_eq!(
        kinds("# heading\na := 1 # trailing\n# done"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_hash_inside_string_is_not_a_comment() {
    let tokens = tokenize("a := \"#tag\"".to_string(), None).unwrap();
    assert_eq!(tokens[2].value, "#tag");
}

#[test]
fn test_positions() {
    let source = "a := 1\n  bb := ¡ \"x\" !\r\n".to_string();
    let tokens = tokenize(source, Some("test.brik".to_string())).unwrap();

    let positions: Vec<(u32, u32)> = tokens
        .iter()
        .map(|t| (t.position.line, t.position.column))
        .collect();

    assert_eq!(
        positions,
        vec![(1, 1), (1, 3), (1, 6), (2, 3), (2, 6), (2, 9), (2, 11), (2, 15), (3, 1)]
    );
    assert_eq!(tokens[0].position.file.as_str(), "test.brik");
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("a := 1\nb := @".to_string(), None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.character(), Some('@'));
    assert_eq!((error.line(), error.column()), (2, 6));
    assert_eq!(error.get_position().file.as_str(), "<input>");
}

#[test]
fn test_lone_dot_is_unrecognised() {
    let error = tokenize("a.b".to_string(), None).unwrap_err();
    assert_eq!(error.character(), Some('.'));
    assert_eq!(error.column(), 2);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize(String::new(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 1));
}

#[test]
fn test_custom_glyphs() {
    let glyphs = Glyphs::new('[', ']', '{', '}', "<-").unwrap();
    let tokens = tokenize_with("p <- { x <- [1] }".to_string(), None, &glyphs).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::OpenRecord,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::OpenList,
            TokenKind::Number,
            TokenKind::CloseList,
            TokenKind::CloseRecord,
            TokenKind::EOF,
        ]
    );

    // The default glyphs mean nothing under the custom set.
    assert!(tokenize_with("x <- ¡ !".to_string(), None, &glyphs).is_err());
}

#[test]
fn test_assignment_preferred_over_shared_bracket() {
    let glyphs = Glyphs::new('[', ']', '{', '=', ":=").unwrap();
    let tokens = tokenize_with("r := { a := 1 =".to_string(), None, &glyphs).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[6].kind, TokenKind::CloseRecord);
}
