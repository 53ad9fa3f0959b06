use std::{fmt, rc::Rc};

use crate::{ast::Expr, interpreter::value::env::Env};

/// Represents a runtime value in the interpreter.
///
/// Every value has a canonical text form given by its `Display`
/// implementation; [`crate::interpreter::value::codec::decode_value`] parses
/// that text back into an equal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A function together with the environment it was defined in.
    /// Rendered `(env)[fun param -> body]`.
    Closure {
        /// The captured environment.
        env:   Env,
        /// The parameter name.
        param: String,
        /// The function body.
        body:  Rc<Expr>,
    },
    /// A recursive function together with the environment it was defined
    /// in. Rendered `(env)[rec name = fun param -> body]`.
    RecClosure {
        /// The captured environment, which does not contain `name` itself.
        env:   Env,
        /// The function's own name, bound again on every application.
        name:  String,
        /// The parameter name.
        param: String,
        /// The function body.
        body:  Rc<Expr>,
    },
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the integer, or `None` for any other value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean, or `None` for any other value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Closure { env, param, body } => write!(f, "({env})[fun {param} -> {body}]"),
            Self::RecClosure { env,
                               name,
                               param,
                               body, } => {
                write!(f, "({env})[rec {name} = fun {param} -> {body}]")
            },
        }
    }
}
