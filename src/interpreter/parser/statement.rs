use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// The function part of a closure's text, between `[` and `]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosureForm {
    /// `fun param -> body`
    Fun {
        /// The parameter name.
        param: String,
        /// The function body.
        body:  Rc<Expr>,
    },
    /// `rec name = fun param -> body`
    Rec {
        /// The recursive function's own name.
        name:  String,
        /// The parameter name.
        param: String,
        /// The function body.
        body:  Rc<Expr>,
    },
}

/// Parses a single statement: one expression followed by end of input.
///
/// The language is single-statement; any token left over after the
/// expression is a syntax error.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs, ending
///   with [`Token::Eof`].
///
/// # Returns
/// The parsed [`Expr`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, 0)?;
    expect(tokens, &Token::Eof)?;
    Ok(expr)
}

/// Tokenizes and parses a complete source string.
///
/// # Errors
/// Lexical errors and syntax errors, as [`ParseError`].
///
/// # Example
/// ```
/// use evalml::{error::ParseError, interpreter::parser::statement::parse_source};
///
/// assert!(parse_source("let x = 1 in x + 1").is_ok());
/// assert!(matches!(parse_source("let x = 1 x"),
///                  Err(ParseError::UnexpectedToken { .. })));
/// assert!(matches!(parse_source("1 $ 2"),
///                  Err(ParseError::UnexpectedCharacter { character: '$', position: 2 })));
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    parse_statement(&mut tokens.iter().peekable())
}

/// Parses the function part of a closure's text.
///
/// Accepts exactly `fun IDENT -> expr` or `rec IDENT = fun IDENT -> expr`,
/// followed by end of input.
///
/// # Errors
/// Any lexical or syntax error; callers translate these into decode errors.
pub fn parse_closure_form(source: &str) -> ParseResult<ClosureForm> {
    let tokens = tokenize(source)?;
    let mut tokens = tokens.iter().peekable();

    let name = match tokens.peek() {
        Some((Token::Rec, _)) => {
            tokens.next();
            let name = parse_identifier(&mut tokens)?;
            expect(&mut tokens, &Token::Equals)?;
            Some(name)
        },
        _ => None,
    };

    expect(&mut tokens, &Token::Fun)?;
    let param = parse_identifier(&mut tokens)?;
    expect(&mut tokens, &Token::Arrow)?;
    let body = Rc::new(parse_statement(&mut tokens)?);

    Ok(match name {
        Some(name) => ClosureForm::Rec { name, param, body },
        None => ClosureForm::Fun { param, body },
    })
}

/// Splits a judgment input `<env> |- <expr>` into its two halves.
///
/// Input without a turnstile is an expression under the empty environment.
///
/// # Example
/// ```
/// use evalml::interpreter::parser::statement::split_judgment;
///
/// assert_eq!(split_judgment("x = 1 |- x + 1"), ("x = 1", "x + 1"));
/// assert_eq!(split_judgment("|- 3"), ("", "3"));
/// assert_eq!(split_judgment("3"), ("", "3"));
/// ```
#[must_use]
pub fn split_judgment(source: &str) -> (&str, &str) {
    source.split_once("|-")
          .map_or(("", source.trim()), |(env, expr)| (env.trim(), expr.trim()))
}

