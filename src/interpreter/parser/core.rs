use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            utils::{expect, parse_identifier},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply parenthesised groups and `if`/`let`/`fun` constructs may nest.
pub const MAX_NESTING: usize = 200;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. `if`, `let`, `let rec`
/// and `fun` are recognised by their leading keyword; anything else is an
/// operator expression, parsed from the loosest level (`<`) downwards.
///
/// Grammar:
/// ```text
///     expression := "if" expression "then" expression "else" expression
///                 | "let" "rec" IDENT "=" "fun" IDENT "->" expression "in" expression
///                 | "let" IDENT "=" expression "in" expression
///                 | "fun" IDENT "->" expression
///                 | comparison
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Number of groups and keyword constructs enclosing this
///   expression; `0` for a whole input.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// `NestingTooDeep` once `depth` exceeds [`MAX_NESTING`], plus any syntax
/// error in the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth > MAX_NESTING {
        let position = tokens.peek().map_or(0, |(_, position)| *position);
        return Err(ParseError::NestingTooDeep { position });
    }

    match tokens.peek() {
        Some((Token::If, _)) => {
            tokens.next();
            parse_if(tokens, depth + 1)
        },
        Some((Token::Let, _)) => {
            tokens.next();
            if let Some((Token::Rec, _)) = tokens.peek() {
                tokens.next();
                parse_let_rec(tokens, depth + 1)
            } else {
                parse_let(tokens, depth + 1)
            }
        },
        Some((Token::Fun, _)) => {
            tokens.next();
            parse_fun(tokens, depth + 1)
        },
        _ => parse_comparison(tokens, depth),
    }
}

/// Parses the remainder of an `if` expression after the `if` keyword.
///
/// Syntax:
/// ```text
///     if <condition> then <expr> else <expr>
/// ```
/// The `else` branch is mandatory and extends as far right as possible.
///
/// # Errors
/// - `UnexpectedToken` if `then` or `else` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, &Token::Then)?;
    let then_branch = parse_expression(tokens, depth)?;
    expect(tokens, &Token::Else)?;
    let else_branch = parse_expression(tokens, depth)?;

    Ok(Expr::If { condition:   Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch: Box::new(else_branch), })
}

/// Parses `IDENT = expr in expr` after the `let` keyword.
pub fn parse_let<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals)?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, &Token::In)?;
    let body = parse_expression(tokens, depth)?;

    Ok(Expr::Let { name,
                   value: Box::new(value),
                   body: Box::new(body) })
}

/// Parses `IDENT = fun IDENT -> expr in expr` after `let rec`.
///
/// The bound expression of a recursive definition must be a literal `fun`.
pub fn parse_let_rec<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals)?;
    expect(tokens, &Token::Fun)?;
    let param = parse_identifier(tokens)?;
    expect(tokens, &Token::Arrow)?;
    let function_body = parse_expression(tokens, depth)?;
    expect(tokens, &Token::In)?;
    let body = parse_expression(tokens, depth)?;

    Ok(Expr::LetRec { name,
                      param,
                      function_body: Rc::new(function_body),
                      body: Box::new(body) })
}

/// Parses `IDENT -> expr` after the `fun` keyword.
pub fn parse_fun<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let param = parse_identifier(tokens)?;
    expect(tokens, &Token::Arrow)?;
    let body = parse_expression(tokens, depth)?;

    Ok(Expr::Fun { param,
                   body: Rc::new(body) })
}
