use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind, value::value::Value};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<(), Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Value, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_symbol_expr);

    // Composites
    parser.nud(TokenKind::OpenList, parse_list_expr);
    parser.nud(TokenKind::OpenRecord, parse_record_expr);

    // Statements
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::Comma, parse_separator_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
