//! Type annotation parsing.
//!
//! Chalk type annotations are single names from a closed set, so there is no
//! type-level precedence to handle: a name either resolves or is an error.

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect_detailed(TokenKind::Identifier, "expected a type name")?;

    Type::from_name(&token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownType {
                type_: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })
}
