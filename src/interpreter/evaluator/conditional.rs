use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        derivation::{Derivation, Rule},
        evaluator::core::{Context, Derived, EvalResult},
        value::env::Env,
    },
};

impl Context {
    /// Evaluates `if condition then then_branch else else_branch`.
    ///
    /// The condition is evaluated first. `true` selects `E-IfT` and the
    /// `then` branch, `false` selects `E-IfF` and the `else` branch; the
    /// branch not taken is never evaluated. The premises are the condition's
    /// derivation followed by the chosen branch's.
    ///
    /// # Errors
    /// `ExpectedBoolean` when the condition is not a boolean.
    pub fn eval_if(&mut self,
                   env: &Env,
                   expr: &Expr,
                   condition: &Expr,
                   then_branch: &Expr,
                   else_branch: &Expr)
                   -> EvalResult<Derived> {
        let (flag, condition_derivation) = self.eval(env, condition)?;
        let (rule, branch) = match flag.as_bool() {
            Some(true) => (Rule::EIfT, then_branch),
            Some(false) => (Rule::EIfF, else_branch),
            None => return Err(RuntimeError::ExpectedBoolean { value: flag.to_string() }),
        };

        let (value, branch_derivation) = self.eval(env, branch)?;
        let derivation = Derivation::eval_to(env.clone(),
                                             expr.clone(),
                                             value.clone(),
                                             rule,
                                             vec![condition_derivation, branch_derivation]);
        Ok((value, derivation))
    }
}
