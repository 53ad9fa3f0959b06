//! # evalml
//!
//! evalml evaluates programs of a small eager functional language and
//! produces, next to the value, the complete big-step derivation that proves
//! the evaluation: which rule justified every sub-evaluation, under which
//! environment.
//!
//! The language has integers, booleans, `+ - * <`, `if`, `let`, `fun`,
//! `let rec` and application. Input is a judgment to prove, written
//! `<env> |- <expr>`:
//!
//! ```
//! let (value, derivation) = evalml::get_result("x = 2 |- x * 3").unwrap();
//! assert_eq!(value, "6");
//! assert!(derivation.starts_with("x = 2 |- x * 3 evalto 6 by E-Times {"));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{
        derivation::Derivation,
        evaluator::core::{Context, DEFAULT_MAX_DEPTH},
        parser::statement::{parse_source, split_judgment},
        value::{codec::decode_env, core::Value, env::Env},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the binary operators. The AST is
/// built by the parser, walked by the evaluator, and printed back as
/// canonical source text inside derivations and closures.
pub mod ast;
/// Provides unified error types for parsing, decoding and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer and parser, value
///   decoding, evaluator).
/// - Attaches positions, names and offending values for context.
/// - Implements the standard error traits.
pub mod error;
/// Orchestrates the evaluation of a judgment.
///
/// Ties together lexing, parsing, value decoding, evaluation and derivation
/// rendering.
pub mod interpreter;

/// The outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The final value.
    pub value:      Value,
    /// The derivation concluding `env |- expr evalto value`.
    pub derivation: Derivation,
    /// Number of evaluation rules applied.
    pub steps:      usize,
}

impl Evaluation {
    /// Canonical text of the value.
    #[must_use]
    pub fn value_text(&self) -> String {
        self.value.to_string()
    }

    /// The rendered derivation, newline-terminated.
    #[must_use]
    pub fn derivation_text(&self) -> String {
        self.derivation.to_string()
    }
}

/// Evaluates an already parsed expression under an environment.
///
/// Rule applications may nest [`DEFAULT_MAX_DEPTH`] levels deep.
///
/// # Errors
/// Any [`RuntimeError`] raised by a rule.
pub fn evaluate(env: &Env, expr: &Expr) -> Result<Evaluation, RuntimeError> {
    evaluate_with_limit(env, expr, DEFAULT_MAX_DEPTH)
}

/// Evaluates with a custom bound on nested rule applications.
///
/// Deeper bounds need a correspondingly larger thread stack.
///
/// # Errors
/// Any [`RuntimeError`] raised by a rule; `RecursionLimit` once premises nest
/// deeper than `max_depth`.
///
/// # Example
/// ```
/// use evalml::{
///     error::RuntimeError,
///     evaluate_with_limit,
///     interpreter::{parser::statement::parse_source, value::env::Env},
/// };
///
/// let expr = parse_source("1 + 2 * 3").unwrap();
/// assert!(evaluate_with_limit(&Env::new(), &expr, 3).is_ok());
/// assert_eq!(evaluate_with_limit(&Env::new(), &expr, 2),
///            Err(RuntimeError::RecursionLimit { depth: 2 }));
/// ```
pub fn evaluate_with_limit(env: &Env,
                           expr: &Expr,
                           max_depth: usize)
                           -> Result<Evaluation, RuntimeError> {
    let mut context = Context::with_max_depth(max_depth);
    let (value, derivation) = context.eval(env, expr)?;
    debug!("evaluated to {value} in {} steps", context.steps());

    Ok(Evaluation { value,
                    derivation,
                    steps: context.steps() })
}

/// Evaluates `expr_text` under the environment written in `env_text`.
///
/// # Errors
/// Decoding errors for the environment, lexical and syntax errors for the
/// expression, and runtime errors from evaluation.
///
/// # Example
/// ```
/// use evalml::{
///     derive_in,
///     error::{Error, RuntimeError},
/// };
///
/// let evaluation = derive_in("x = 1, x = 2", "x").unwrap();
/// assert_eq!(evaluation.value_text(), "2");
///
/// assert_eq!(derive_in("", "z"),
///            Err(Error::Runtime(RuntimeError::UnboundVariable { name: "z".to_string() })));
/// ```
pub fn derive_in(env_text: &str, expr_text: &str) -> Result<Evaluation, Error> {
    derive_in_with_limit(env_text, expr_text, DEFAULT_MAX_DEPTH)
}

/// [`derive_in`] with a custom bound on nested rule applications, see
/// [`evaluate_with_limit`].
///
/// # Errors
/// See [`derive_in`].
pub fn derive_in_with_limit(env_text: &str,
                            expr_text: &str,
                            max_depth: usize)
                            -> Result<Evaluation, Error> {
    debug!("deriving '{env_text} |- {expr_text}' with depth limit {max_depth}");
    let env = decode_env(env_text)?;
    let expr = parse_source(expr_text)?;
    Ok(evaluate_with_limit(&env, &expr, max_depth)?)
}

/// Evaluates a judgment of the form `<env> |- <expr>`.
///
/// The environment may be empty (`|- 1 + 2`); input without `|-` is taken
/// as an expression under the empty environment.
///
/// # Errors
/// See [`derive_in`].
pub fn derive(source: &str) -> Result<Evaluation, Error> {
    derive_with_limit(source, DEFAULT_MAX_DEPTH)
}

/// [`derive`] with a custom bound on nested rule applications.
///
/// # Errors
/// See [`derive_in`].
pub fn derive_with_limit(source: &str, max_depth: usize) -> Result<Evaluation, Error> {
    let (env_text, expr_text) = split_judgment(source);
    derive_in_with_limit(env_text, expr_text, max_depth)
}

/// Returns the value text and the derivation text of a judgment.
///
/// This is the entry point for callers that only deal in text, such as a
/// submission endpoint.
///
/// # Errors
/// See [`derive_in`]. No partial output is produced on error.
///
/// # Examples
/// ```
/// use evalml::get_result;
///
/// let (value, derivation) = get_result("|- 1 - 2 - 3").unwrap();
/// assert_eq!(value, "-4");
/// assert!(derivation.ends_with("};\n"));
///
/// // Example with an intentional error (unknown character).
/// assert!(get_result("|- 1 / 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<(String, String), Error> {
    let evaluation = derive(source)?;
    Ok((evaluation.value_text(), evaluation.derivation_text()))
}
