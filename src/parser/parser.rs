//! Parser implementation for building the symbol table.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a lookahead-1 recursive descent: a statement lookup table
//! picks the production for each top-level token, and an expression lookup
//! table picks the production for each expression start. No token is ever
//! revisited.
//!
//! It maintains:
//! - The token cursor
//! - Statement handlers
//! - NUD (null denotation) handlers for expression starts
//! - The symbol table, which is both resolution environment and output

use std::{collections::HashMap, rc::Rc};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, ANONYMOUS_SOURCE, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
    symbols::SymbolTable,
};

/// How many lists and records may be open at once.
pub const MAX_NESTING: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (expression start) handlers
    nud_lookup: NUDLookup,
    /// Names bound so far
    symbols: SymbolTable,
    /// Composites currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A stream that does not end in EOF gets one appended after its last
    /// token, so the cursor always has something to look at.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = match tokens.last() {
                Some(token) => token.position.clone(),
                None => Position::start(Rc::new(String::from(ANONYMOUS_SOURCE))),
            };
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            symbols: SymbolTable::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token, if any.
    pub fn previous_token(&self) -> Option<&Token> {
        self.pos.checked_sub(1).map(|pos| &self.tokens[pos])
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past EOF.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Builds the error for a token the current production cannot accept.
    ///
    /// At EOF the error points at the last consumed token instead of the
    /// synthetic end marker.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();

        if token.kind == TokenKind::EOF {
            let position = self
                .previous_token()
                .map(|previous| previous.position.clone())
                .unwrap_or_else(|| token.position.clone());

            Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from(expected),
                },
                position,
            )
        } else {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    expected: String::from(expected),
                },
                token.position.clone(),
            )
        }
    }

    /// Expects a token of the specified kind, describing what was expected
    /// on failure.
    pub fn expect_error(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, expected_kind.describe())
    }

    /// Skips any run of commas at the cursor.
    pub fn skip_commas(&mut self) {
        while self.current_token_kind() == TokenKind::Comma {
            self.advance();
        }
    }

    /// Records that the composite opened by `open` is being read.
    ///
    /// Fails past `MAX_NESTING`, positioned at the opening glyph, so deep
    /// input ends in an error instead of exhausting the stack.
    pub fn enter_composite(&mut self, open: &Token) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                open.position.clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_composite(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are more statements to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (expression start) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }
}

/// Parses a stream of tokens into the table of top-level bindings.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF. The first
/// statement that fails aborts the parse.
pub fn parse(tokens: Vec<Token>) -> Result<SymbolTable, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    trace!("parsing {} tokens", parser.tokens.len());

    while parser.has_tokens() {
        parse_stmt(&mut parser)?;
    }

    debug!("parsed {} bindings", parser.symbols().len());

    Ok(parser.into_symbols())
}
