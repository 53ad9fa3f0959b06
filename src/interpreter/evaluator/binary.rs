use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        derivation::{Derivation, Judgment, Rule},
        evaluator::core::{Context, Derived, EvalResult},
        value::{core::Value, env::Env},
    },
};

impl Context {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left first, and must be integers. The
    /// derivation has three premises: the two operand derivations and the
    /// primitive judgment (`B-Plus`, `B-Minus`, `B-Times` or `B-Lt`) that
    /// computes the result.
    ///
    /// # Errors
    /// - `ExpectedInteger` if an operand is not an integer.
    /// - `Overflow` if the arithmetic leaves the `i64` range.
    pub fn eval_binary_op(&mut self,
                          env: &Env,
                          expr: &Expr,
                          op: BinaryOperator,
                          left: &Expr,
                          right: &Expr)
                          -> EvalResult<Derived> {
        let (left_value, left_derivation) = self.eval(env, left)?;
        let (right_value, right_derivation) = self.eval(env, right)?;

        let left = expect_integer(&left_value)?;
        let right = expect_integer(&right_value)?;
        let result = Self::eval_primitive(op, left, right)?;

        let primitive = Derivation { judgment: Judgment::Primitive { op,
                                                                     left,
                                                                     right,
                                                                     result: result.clone() },
                                     rule:     Rule::primitive_for(op),
                                     premises: vec![], };
        let derivation = Derivation::eval_to(env.clone(),
                                             expr.clone(),
                                             result.clone(),
                                             Rule::for_operator(op),
                                             vec![left_derivation, right_derivation, primitive]);
        Ok((result, derivation))
    }

    /// Computes `left op right` on integers.
    ///
    /// # Example
    /// ```
    /// use evalml::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_primitive(BinaryOperator::Sub, 1, 2).unwrap(),
    ///            Value::Integer(-1));
    /// assert_eq!(Context::eval_primitive(BinaryOperator::Less, 1, 2).unwrap(),
    ///            Value::Bool(true));
    /// assert!(Context::eval_primitive(BinaryOperator::Mul, i64::MAX, 2).is_err());
    /// ```
    ///
    /// # Errors
    /// `Overflow` if the result does not fit an `i64`.
    pub fn eval_primitive(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
        let checked = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Less => return Ok(Value::from(left < right)),
        };

        checked.map(Value::from)
               .ok_or_else(|| RuntimeError::Overflow { left,
                                                       op: op.symbol().to_string(),
                                                       right })
    }
}

fn expect_integer(value: &Value) -> EvalResult<i64> {
    value.as_integer()
         .ok_or_else(|| RuntimeError::ExpectedInteger { value: value.to_string() })
}
