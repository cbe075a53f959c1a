use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    value::value::{Number, Record, Value},
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Value, Error> {
    let handler = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("an expression")),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Value, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();

            match Number::from_lexeme(&token.value) {
                Ok(number) => Ok(Value::Number(number)),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.position,
                )),
            }
        }
        TokenKind::String => Ok(Value::String(parser.advance().value.clone())),
        _ => Err(parser.unexpected("a string or number")),
    }
}

/// An identifier used as a value: whatever it is bound to right now, or a
/// reference placeholder if it is not bound yet.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Value, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    Ok(parser.symbols().resolve(&name).into_value())
}

pub fn parse_list_expr(parser: &mut Parser) -> Result<Value, Error> {
    let open = parser.expect(TokenKind::OpenList)?;
    parser.enter_composite(&open)?;
    let closing = format!(
        "list closing glyph for the list opened at {}:{}",
        open.position.line, open.position.column
    );

    let mut items = vec![];

    loop {
        parser.skip_commas();

        if parser.current_token_kind() == TokenKind::CloseList {
            parser.advance();
            break;
        }

        if parser.current_token_kind() == TokenKind::EOF {
            return Err(parser.unexpected(&closing));
        }

        items.push(parse_expr(parser)?);

        if !matches!(
            parser.current_token_kind(),
            TokenKind::Comma | TokenKind::CloseList
        ) {
            return Err(parser.unexpected(&format!("`,` or {}", closing)));
        }
    }

    parser.exit_composite();
    Ok(Value::List(items))
}

pub fn parse_record_expr(parser: &mut Parser) -> Result<Value, Error> {
    let open = parser.expect(TokenKind::OpenRecord)?;
    parser.enter_composite(&open)?;
    let closing = format!(
        "record closing glyph for the record opened at {}:{}",
        open.position.line, open.position.column
    );

    let mut record = Record::new();
    // Running out of input inside a record is reported at its latest key.
    let mut last_key = open.position;

    loop {
        parser.skip_commas();

        match parser.current_token_kind() {
            TokenKind::CloseRecord => {
                parser.advance();
                break;
            }
            TokenKind::EOF => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput { expected: closing },
                    last_key,
                ));
            }
            _ => {}
        }

        let key = parser.expect_error(TokenKind::Identifier, "a field name")?;
        last_key = key.position.clone();

        parser.expect_error(
            TokenKind::Assignment,
            &format!("assignment operator after field `{}`", key.value),
        )?;

        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: format!("a value for field `{}`", key.value),
                },
                last_key,
            ));
        }

        let value = parse_expr(parser)?;
        record.insert(key.value, value);

        match parser.current_token_kind() {
            TokenKind::Comma | TokenKind::CloseRecord => {}
            TokenKind::EOF => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput { expected: closing },
                    last_key,
                ));
            }
            _ => return Err(parser.unexpected(&format!("`,` or {}", closing))),
        }
    }

    parser.exit_composite();
    Ok(Value::Record(record))
}
