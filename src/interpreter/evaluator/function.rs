use std::rc::Rc;

use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        derivation::{Derivation, Rule},
        evaluator::core::{Context, Derived, EvalResult},
        value::{core::Value, env::Env},
    },
};

impl Context {
    /// `E-Fun`: a function expression evaluates, without premises, to a
    /// closure capturing the current environment.
    pub fn eval_fun(env: &Env, expr: &Expr, param: &str, body: &Rc<Expr>) -> Derived {
        let closure = Value::Closure { env:   env.clone(),
                                       param: param.to_string(),
                                       body:  Rc::clone(body), };
        let derivation = Derivation::eval_to(env.clone(), expr.clone(), closure.clone(), Rule::EFun, vec![]);
        (closure, derivation)
    }

    /// `E-LetRec`: binds `name` to a recursive closure over the current
    /// environment and evaluates `body` under the extended environment.
    ///
    /// The closure does not contain its own binding; `E-AppRec` re-binds
    /// `name` every time the closure is applied.
    pub fn eval_let_rec(&mut self,
                        env: &Env,
                        expr: &Expr,
                        name: &str,
                        param: &str,
                        function_body: &Rc<Expr>,
                        body: &Expr)
                        -> EvalResult<Derived> {
        let closure = Value::RecClosure { env:   env.clone(),
                                          name:  name.to_string(),
                                          param: param.to_string(),
                                          body:  Rc::clone(function_body), };
        let (value, body_derivation) = self.eval(&env.extend(name, closure), body)?;

        let derivation =
            Derivation::eval_to(env.clone(), expr.clone(), value.clone(), Rule::ELetRec, vec![body_derivation]);
        Ok((value, derivation))
    }

    /// Evaluates an application `function argument`.
    ///
    /// The function position is evaluated first, then the argument, both
    /// under the caller's environment. The kind of closure selects the rule:
    ///
    /// - `E-App`: for `(env')[fun x -> e]`, `e` is evaluated under
    ///   `env', x = argument`.
    /// - `E-AppRec`: for `(env')[rec f = fun x -> e]`, `e` is evaluated under
    ///   `env', f = (env')[rec f = fun x -> e], x = argument`.
    ///
    /// The premises are the function's derivation, the argument's, and the
    /// body's.
    ///
    /// # Errors
    /// `NotAClosure` when the function position evaluates to an integer or a
    /// boolean.
    pub fn eval_app(&mut self,
                    env: &Env,
                    expr: &Expr,
                    function: &Expr,
                    argument: &Expr)
                    -> EvalResult<Derived> {
        let (closure, function_derivation) = self.eval(env, function)?;

        let (rule, call_env, argument_derivation, body) = match &closure {
            Value::Closure { env: captured,
                             param,
                             body, } => {
                let (argument, argument_derivation) = self.eval(env, argument)?;
                let call_env = captured.extend(param.as_str(), argument);
                (Rule::EApp, call_env, argument_derivation, Rc::clone(body))
            },
            Value::RecClosure { env: captured,
                                name,
                                param,
                                body, } => {
                let (argument, argument_derivation) = self.eval(env, argument)?;
                trace!("applying recursive closure {name} to {argument}");
                let call_env = captured.extend(name.as_str(), closure.clone())
                                       .extend(param.as_str(), argument);
                (Rule::EAppRec, call_env, argument_derivation, Rc::clone(body))
            },
            other => return Err(RuntimeError::NotAClosure { value: other.to_string() }),
        };

        let (value, body_derivation) = self.eval(&call_env, &body)?;
        let derivation = Derivation::eval_to(env.clone(),
                                             expr.clone(),
                                             value.clone(),
                                             rule,
                                             vec![function_derivation,
                                                  argument_derivation,
                                                  body_derivation]);
        Ok((value, derivation))
    }
}
