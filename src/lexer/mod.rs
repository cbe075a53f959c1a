//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts BRIK source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered regex pattern table
//! - Recognition of identifiers, strings, numbers and the glyph punctuation
//! - Token line/column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
