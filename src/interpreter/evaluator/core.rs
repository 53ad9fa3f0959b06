use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        derivation::{Derivation, Rule},
        value::{core::Value, env::Env},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What every rule produces: the value and the derivation concluding it.
pub type Derived = (Value, Derivation);

/// Default bound on how deeply rule applications may nest.
///
/// Every level costs several native stack frames, so the bound keeps an
/// evaluation well inside a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Per-evaluation bookkeeping.
///
/// The context holds no bindings: environments are passed explicitly to every
/// rule, so a `Context` only tracks how deep the current rule application is
/// and how many rules have been applied. Create one per evaluation.
#[derive(Debug)]
pub struct Context {
    depth:     usize,
    steps:     usize,
    max_depth: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}

impl Context {
    /// A context bounded by [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that stops with `RecursionLimit` once rule applications
    /// nest deeper than `max_depth`.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { depth: 0,
               steps: 0,
               max_depth }
    }

    /// Number of `E-*` rule applications performed so far.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Evaluates `expr` under `env`.
    ///
    /// This is the rule dispatcher: it selects the rule for the outermost
    /// construct of `expr`, and the rule evaluates its premises by calling
    /// back into `eval`.
    ///
    /// # Parameters
    /// - `env`: Environment to evaluate under.
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of `expr` and the derivation justifying it.
    ///
    /// # Errors
    /// Any runtime error raised by a rule, or `RecursionLimit` when the
    /// premises nest deeper than the context allows.
    ///
    /// # Example
    /// ```
    /// use evalml::interpreter::{
    ///     evaluator::core::Context,
    ///     parser::statement::parse_source,
    ///     value::{core::Value, env::Env},
    /// };
    ///
    /// let expr = parse_source("x * 2").unwrap();
    /// let env = Env::new().extend("x", Value::Integer(21));
    ///
    /// let (value, derivation) = Context::new().eval(&env, &expr).unwrap();
    /// assert_eq!(value, Value::Integer(42));
    /// assert_eq!(derivation.premises.len(), 3);
    /// ```
    pub fn eval(&mut self, env: &Env, expr: &Expr) -> EvalResult<Derived> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::RecursionLimit { depth: self.max_depth });
        }
        self.depth += 1;
        self.steps += 1;
        trace!("{:width$}{env} |- {expr}", "", width = self.depth.saturating_sub(1) * 2);

        let result = match expr {
            Expr::Integer(n) => Ok(Self::eval_literal(env, expr, Value::from(*n), Rule::EInt)),
            Expr::Bool(b) => Ok(Self::eval_literal(env, expr, Value::from(*b), Rule::EBool)),
            Expr::Variable(name) => self.eval_variable(env, expr, name),
            Expr::BinaryOp { op, left, right } => self.eval_binary_op(env, expr, *op, left, right),
            Expr::If { condition,
                       then_branch,
                       else_branch, } => {
                self.eval_if(env, expr, condition, then_branch, else_branch)
            },
            Expr::Let { name, value, body } => self.eval_let(env, expr, name, value, body),
            Expr::LetRec { name,
                           param,
                           function_body,
                           body, } => {
                self.eval_let_rec(env, expr, name, param, function_body, body)
            },
            Expr::Fun { param, body } => Ok(Self::eval_fun(env, expr, param, body)),
            Expr::App { function, argument } => self.eval_app(env, expr, function, argument),
        };

        self.depth -= 1;
        result
    }

    /// `E-Int` and `E-Bool`: a literal evaluates to itself, with no premises.
    fn eval_literal(env: &Env, expr: &Expr, value: Value, rule: Rule) -> Derived {
        let derivation = Derivation::eval_to(env.clone(), expr.clone(), value.clone(), rule, vec![]);
        (value, derivation)
    }
}
