use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::Position;

lazy_static! {
    // Patterns whose shape does not depend on the configured glyphs. All are
    // anchored so they only ever match at the head of the remaining input.
    pub static ref COMMENT_PATTERN: Regex = Regex::new("^#[^\n]*").unwrap();
    pub static ref STRING_PATTERN: Regex = Regex::new(r#"(?s)^"(?:[^"\\]|\\.)*""#).unwrap();
    pub static ref UNTERMINATED_STRING_PATTERN: Regex = Regex::new("^\"").unwrap();
    pub static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^-?(?:[0-9]+\.[0-9]*|\.[0-9]+|[0-9]+)").unwrap();
    pub static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    pub static ref NEWLINE_PATTERN: Regex = Regex::new("^\n").unwrap();
    pub static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\r]+").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    Assignment, // :=

    OpenList,    // ¡
    CloseList,   // !
    OpenRecord,  // ¿
    CloseRecord, // ?

    Comma,
}

impl TokenKind {
    /// Human readable name, independent of the configured glyphs.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Assignment => "assignment operator",
            TokenKind::OpenList => "list opening glyph",
            TokenKind::CloseList => "list closing glyph",
            TokenKind::OpenRecord => "record opening glyph",
            TokenKind::CloseRecord => "record closing glyph",
            TokenKind::Comma => "`,`",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. `value` holds the decoded text of strings and the
/// raw lexeme for everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::String, TokenKind::Identifier, TokenKind::Number]) {
            write!(
                f,
                "{}:{} {} ({:?})",
                self.position.line, self.position.column, self.kind, self.value
            )
        } else {
            write!(
                f,
                "{}:{} {}",
                self.position.line, self.position.column, self.kind
            )
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
