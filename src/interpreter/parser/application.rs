use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a chain of applications.
///
/// Application is juxtaposition of atoms, binds tighter than any operator
/// and is left-associative: `f x y` is `(f x) y`.
///
/// Grammar:
/// ```text
///     application := primary primary*
/// ```
pub(crate) fn parse_application<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut function = parse_primary(tokens, depth)?;
    while tokens.peek().is_some_and(|(token, _)| token.starts_atom()) {
        let argument = parse_primary(tokens, depth)?;
        function = Expr::App { function: Box::new(function),
                               argument: Box::new(argument), };
    }
    Ok(function)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | BOOL | IDENT | "(" expression ")"
/// ```
/// A parenthesised group may hold any expression, including `if`, `let`
/// and `fun`.
///
/// # Errors
/// `UnexpectedToken` when the stream does not start with an atom, and
/// `LiteralTooLarge` for integers outside the `i64` range.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(digits), position)) => {
            digits.parse()
                  .map(Expr::Integer)
                  .map_err(|_| ParseError::LiteralTooLarge { literal:  digits.clone(),
                                                             position: *position, })
        },
        Some((Token::Bool(b), _)) => Ok(Expr::Bool(*b)),
        Some((Token::Identifier(name), _)) => Ok(Expr::Variable(name.clone())),
        Some((Token::LParen, _)) => {
            let inner = parse_expression(tokens, depth + 1)?;
            expect(tokens, &Token::RParen)?;
            Ok(inner)
        },
        other => Err(unexpected(other, "expression")),
    }
}
