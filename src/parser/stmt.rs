use log::trace;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("an identifier to start an assignment")),
    }
}

/// `name := expr`, binding `name` in the symbol table.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<(), Error> {
    let name = parser.expect(TokenKind::Identifier)?;

    parser.expect_error(
        TokenKind::Assignment,
        &format!("assignment operator after `{}`", name.value),
    )?;

    let value = parse_expr(parser)?;
    trace!("bind {} = {}", name.value, value);

    parser.symbols_mut().bind(name.value, value);
    Ok(())
}

// Separators left between or after assignments carry no meaning.
pub fn parse_separator_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Comma)?;
    Ok(())
}
