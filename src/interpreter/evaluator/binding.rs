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
    /// Looks a variable up, one binding at a time.
    ///
    /// - `E-Var1`: the most recent binding has the name; its value is the
    ///   result and there are no premises.
    /// - `E-Var2`: otherwise, the same variable is evaluated under the
    ///   environment without its most recent binding, and that derivation
    ///   is the single premise.
    ///
    /// # Errors
    /// `UnboundVariable` once the environment is exhausted.
    pub fn eval_variable(&mut self, env: &Env, expr: &Expr, name: &str) -> EvalResult<Derived> {
        match env.last() {
            None => Err(RuntimeError::UnboundVariable { name: name.to_string() }),
            Some((bound, value)) if bound == name => {
                let value = value.clone();
                let derivation =
                    Derivation::eval_to(env.clone(), expr.clone(), value.clone(), Rule::EVar1, vec![]);
                Ok((value, derivation))
            },
            Some(_) => {
                let (value, premise) = self.eval(&env.without_last(), expr)?;
                let derivation = Derivation::eval_to(env.clone(),
                                                     expr.clone(),
                                                     value.clone(),
                                                     Rule::EVar2,
                                                     vec![premise]);
                Ok((value, derivation))
            },
        }
    }

    /// `E-Let`: evaluates the bound expression, then the body under the
    /// environment extended with `name = value`.
    pub fn eval_let(&mut self,
                    env: &Env,
                    expr: &Expr,
                    name: &str,
                    bound: &Expr,
                    body: &Expr)
                    -> EvalResult<Derived> {
        let (bound_value, bound_derivation) = self.eval(env, bound)?;
        let (value, body_derivation) = self.eval(&env.extend(name, bound_value), body)?;

        let derivation = Derivation::eval_to(env.clone(),
                                             expr.clone(),
                                             value.clone(),
                                             Rule::ELet,
                                             vec![bound_derivation, body_derivation]);
        Ok((value, derivation))
    }
}
