use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the syntax error for an unexpected token (or missing token).
pub(crate) fn unexpected(found: Option<&(Token, usize)>, expected: &str) -> ParseError {
    let (found, position) = found.map_or(("EOF", 0), |(tok, pos)| (tok.kind_name(), *pos));
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found: found.to_string(),
                                  position }
}

/// Consumes the next token, which must equal `expected`.
///
/// Only used for tokens that carry no payload (keywords, punctuation and
/// [`Token::Eof`]).
///
/// # Returns
/// The byte position of the consumed token.
pub(crate) fn expect<'a, I>(tokens: &mut Peekable<I>, expected: &Token) -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        other => Err(unexpected(other, expected.kind_name())),
    }
}

/// Parses a plain identifier and returns its name.
///
/// Keywords and `true`/`false` are separate tokens, so any identifier token
/// is a valid name.
pub(crate) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        other => Err(unexpected(other, "IDENT")),
    }
}
