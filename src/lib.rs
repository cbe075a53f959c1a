#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use log::debug;

use crate::{
    config::glyphs::Glyphs,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize_with,
    parser::{parser::parse, symbols::SymbolTable},
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod value;

extern crate regex;

/// File name used when the caller does not name the source.
pub const ANONYMOUS_SOURCE: &str = "<input>";

/// A 1-based line/column location inside a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn start(file: Rc<String>) -> Self {
        Position::new(1, 1, file)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Runs the whole front end with the default glyph set.
pub fn load_program(source: String, file: Option<String>) -> Result<SymbolTable, Error> {
    load_program_with(source, file, &Glyphs::default())
}

/// Tokenizes and parses `source`, returning the bound names in source order.
pub fn load_program_with(
    source: String,
    file: Option<String>,
    glyphs: &Glyphs,
) -> Result<SymbolTable, Error> {
    let tokens = tokenize_with(source, file, glyphs)?;
    debug!("tokenized {} tokens", tokens.len());

    let symbols = parse(tokens)?;
    debug!("bound {} names", symbols.len());

    Ok(symbols)
}

/// Returns the text of the 1-based `line` in `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Renders `error` against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (expected assignment operator)
/// -> final.brik:20:3
///   |
/// 20 | a # 1
///   | --^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", position));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line_at_position(source, position.line).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (&string[start..], start)
}
