use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{application::parse_application, core::ParseResult},
    },
};

/// Parses comparison expressions.
///
/// `<` is the loosest operator of the language, for every kind of operand,
/// so both sides are full additive expressions. Chains are left-associative:
/// `a < b < c` parses as `(a < b) < c`.
///
/// The rule is: `comparison := additive ("<" additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Nesting depth of the enclosing expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the additive expression itself when no `<`
/// follows.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, depth)?;
    while let Some(op) = peek_operator(tokens, &[BinaryOperator::Less]) {
        tokens.next();
        let right = parse_additive(tokens, depth)?;
        left = binary(op, left, right);
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators of equal precedence: `+` and
/// `-`. A `-` therefore folds everything to its left first, so `1 - 2 - 3`
/// is `(1 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    while let Some(op) = peek_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        tokens.next();
        let right = parse_multiplicative(tokens, depth)?;
        left = binary(op, left, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := application ("*" application)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_application(tokens, depth)?;
    while let Some(op) = peek_operator(tokens, &[BinaryOperator::Mul]) {
        tokens.next();
        let right = parse_application(tokens, depth)?;
        left = binary(op, left, right);
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use evalml::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Arrow), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Less => Some(BinaryOperator::Less),
        _ => None,
    }
}

/// Returns the operator at the head of the stream if it is one of `accepted`.
fn peek_operator<'a, I>(tokens: &mut Peekable<I>,
                        accepted: &[BinaryOperator])
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.peek()
          .and_then(|(token, _)| token_to_binary_operator(token))
          .filter(|op| accepted.contains(op))
}

fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right) }
}
