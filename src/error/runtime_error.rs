#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The environment has no binding for the variable.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// The function position of an application did not evaluate to a
    /// closure or recursive closure.
    NotAClosure {
        /// Text of the value that was applied.
        value: String,
    },
    /// An arithmetic or comparison operand was not an integer.
    ExpectedInteger {
        /// Text of the offending value.
        value: String,
    },
    /// The condition of an `if` was not a boolean.
    ExpectedBoolean {
        /// Text of the offending value.
        value: String,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Left operand.
        left:  i64,
        /// Operator symbol.
        op:    String,
        /// Right operand.
        right: i64,
    },
    /// Rule applications nested deeper than the evaluation allows.
    RecursionLimit {
        /// The nesting bound that was hit.
        depth: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "Runtime error: Unbound variable '{name}'."),
            Self::NotAClosure { value } => {
                write!(f, "Runtime error: Cannot apply '{value}', it is not a function.")
            },
            Self::ExpectedInteger { value } => {
                write!(f, "Runtime error: Expected integer, found '{value}'.")
            },
            Self::ExpectedBoolean { value } => {
                write!(f, "Runtime error: Expected boolean, found '{value}'.")
            },
            Self::Overflow { left, op, right } => write!(f,
                                                         "Runtime error: Integer overflow while computing {left} {op} {right}."),
            Self::RecursionLimit { depth } => {
                write!(f, "Runtime error: Evaluation nested deeper than {depth} rule applications.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
