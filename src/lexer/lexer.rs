use std::rc::Rc;

use log::trace;
use regex::Regex;

use crate::{
    config::glyphs::Glyphs,
    errors::errors::{Error, ErrorImpl},
    value::value::Number,
    Position, ANONYMOUS_SOURCE, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{
    Token, TokenKind, COMMENT_PATTERN, IDENTIFIER_PATTERN, NEWLINE_PATTERN, NUMBER_PATTERN,
    STRING_PATTERN, UNTERMINATED_STRING_PATTERN, WHITESPACE_PATTERN,
};

/// Consumes the lexeme a pattern matched at the head of the input.
pub type RegexHandler = fn(&mut Lexer, String) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>, glyphs: &Glyphs) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from(ANONYMOUS_SOURCE)));

        // Order is priority: the first pattern matching at the head wins.
        Lexer {
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: COMMENT_PATTERN.clone(), handler: skip_handler },
                RegexPattern { regex: STRING_PATTERN.clone(), handler: string_handler },
                RegexPattern { regex: UNTERMINATED_STRING_PATTERN.clone(), handler: unterminated_string_handler },
                RegexPattern { regex: NUMBER_PATTERN.clone(), handler: number_handler },
                RegexPattern { regex: glyph_regex(glyphs.assign()), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
                RegexPattern { regex: glyph_regex(&glyphs.list_open().to_string()), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenList) },
                RegexPattern { regex: glyph_regex(&glyphs.list_close().to_string()), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseList) },
                RegexPattern { regex: glyph_regex(&glyphs.record_open().to_string()), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenRecord) },
                RegexPattern { regex: glyph_regex(&glyphs.record_close().to_string()), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseRecord) },
                RegexPattern { regex: glyph_regex(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
                RegexPattern { regex: IDENTIFIER_PATTERN.clone(), handler: symbol_handler },
                RegexPattern { regex: NEWLINE_PATTERN.clone(), handler: skip_handler },
                RegexPattern { regex: WHITESPACE_PATTERN.clone(), handler: skip_handler },
            ],
            source,
            file: file_name,
        }
    }

    /// Moves past `n` bytes of input, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());

        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    /// Finds the first pattern in the table that matches at the head.
    fn next_match(&self) -> Option<(RegexHandler, String)> {
        let remainder = self.remainder();

        self.patterns.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .map(|found| (pattern.handler, String::from(found.as_str())))
        })
    }
}

fn glyph_regex(glyph: &str) -> Regex {
    Regex::new(&format!("^{}", regex::escape(glyph))).expect("escaped glyph is a valid pattern")
}

fn skip_handler(lexer: &mut Lexer, lexeme: String) -> Result<(), Error> {
    lexer.advance_n(lexeme.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, lexeme: String) -> Result<(), Error> {
    let position = lexer.get_position();

    if Number::from_lexeme(&lexeme).is_err() {
        return Err(Error::new(ErrorImpl::NumberParseError { token: lexeme }, position));
    }

    let length = lexeme.len();
    lexer.push(MK_TOKEN!(TokenKind::Number, lexeme, position));
    lexer.advance_n(length);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, lexeme: String) -> Result<(), Error> {
    let position = lexer.get_position();
    let body = &lexeme[1..lexeme.len() - 1];

    lexer.push(MK_TOKEN!(TokenKind::String, unescape(body), position));
    lexer.advance_n(lexeme.len());
    Ok(())
}

// Reached only when the full string pattern failed at an opening quote.
fn unterminated_string_handler(lexer: &mut Lexer, _lexeme: String) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.get_position()))
}

fn symbol_handler(lexer: &mut Lexer, lexeme: String) -> Result<(), Error> {
    let position = lexer.get_position();
    let length = lexeme.len();

    lexer.push(MK_TOKEN!(TokenKind::Identifier, lexeme, position));
    lexer.advance_n(length);
    Ok(())
}

/// Resolves `\n`, `\t`, `\"` and `\\`; any other escaped character is kept
/// and its backslash dropped.
pub fn unescape(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(escaped) => result.push(escaped),
            None => {}
        }
    }

    result
}

/// Tokenizes `source` using the default glyph set.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source, file, &Glyphs::default())
}

pub fn tokenize_with(
    source: String,
    file: Option<String>,
    glyphs: &Glyphs,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file, glyphs);

    while !lex.at_eof() {
        match lex.next_match() {
            Some((handler, lexeme)) => handler(&mut lex, lexeme)?,
            None => {
                let character = lex.at().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character },
                    lex.get_position(),
                ));
            }
        }
    }

    let position = lex.get_position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));
    Ok(lex.tokens)
}
