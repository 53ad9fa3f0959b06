use std::fmt::{self, Write};

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::value::{core::Value, env::Env},
};

/// Number of spaces each premise is indented past its conclusion.
pub const INDENT: usize = 4;

/// The inference rules of the evaluation relation.
///
/// `E-*` rules conclude evaluation judgments; `B-*` rules conclude the
/// primitive arithmetic and comparison judgments that sit under `E-Plus`,
/// `E-Minus`, `E-Times` and `E-Lt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    EInt,
    EBool,
    EVar1,
    EVar2,
    EPlus,
    EMinus,
    ETimes,
    ELt,
    EIfT,
    EIfF,
    ELet,
    EFun,
    EApp,
    ELetRec,
    EAppRec,
    BPlus,
    BMinus,
    BTimes,
    BLt,
}

impl Rule {
    /// The `E-*` rule for a binary operator.
    #[must_use]
    pub const fn for_operator(op: BinaryOperator) -> Self {
        match op {
            BinaryOperator::Add => Self::EPlus,
            BinaryOperator::Sub => Self::EMinus,
            BinaryOperator::Mul => Self::ETimes,
            BinaryOperator::Less => Self::ELt,
        }
    }

    /// The `B-*` rule for a binary operator.
    #[must_use]
    pub const fn primitive_for(op: BinaryOperator) -> Self {
        match op {
            BinaryOperator::Add => Self::BPlus,
            BinaryOperator::Sub => Self::BMinus,
            BinaryOperator::Mul => Self::BTimes,
            BinaryOperator::Less => Self::BLt,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EInt => "E-Int",
            Self::EBool => "E-Bool",
            Self::EVar1 => "E-Var1",
            Self::EVar2 => "E-Var2",
            Self::EPlus => "E-Plus",
            Self::EMinus => "E-Minus",
            Self::ETimes => "E-Times",
            Self::ELt => "E-Lt",
            Self::EIfT => "E-IfT",
            Self::EIfF => "E-IfF",
            Self::ELet => "E-Let",
            Self::EFun => "E-Fun",
            Self::EApp => "E-App",
            Self::ELetRec => "E-LetRec",
            Self::EAppRec => "E-AppRec",
            Self::BPlus => "B-Plus",
            Self::BMinus => "B-Minus",
            Self::BTimes => "B-Times",
            Self::BLt => "B-Lt",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A statement justified by one rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Judgment {
    /// `env |- expr evalto value`
    EvalTo {
        /// The environment the expression is evaluated under.
        env:   Env,
        /// The expression.
        expr:  Expr,
        /// Its value.
        value: Value,
    },
    /// `left plus right is result` (or `minus`, `times`, `less than`).
    Primitive {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand.
        left:   i64,
        /// Right operand.
        right:  i64,
        /// The result: an integer, or a boolean for `<`.
        result: Value,
    },
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvalTo { env, expr, value } if env.is_empty() => {
                write!(f, "|- {expr} evalto {value}")
            },
            Self::EvalTo { env, expr, value } => write!(f, "{env} |- {expr} evalto {value}"),
            Self::Primitive { op,
                              left,
                              right,
                              result, } => write!(f, "{left} {} {right} is {result}", op.verb()),
        }
    }
}

/// A proof tree: a judgment, the rule concluding it, and the derivations of
/// the rule's premises in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub judgment: Judgment,
    pub rule:     Rule,
    pub premises: Vec<Self>,
}

impl Derivation {
    /// A derivation of an evaluation judgment.
    #[must_use]
    pub fn eval_to(env: Env,
                   expr: Expr,
                   value: Value,
                   rule: Rule,
                   premises: Vec<Self>)
                   -> Self {
        Self { judgment: Judgment::EvalTo { env, expr, value },
               rule,
               premises }
    }

    /// The value this derivation concludes, for evaluation judgments.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match &self.judgment {
            Judgment::EvalTo { value, .. } => Some(value),
            Judgment::Primitive { .. } => None,
        }
    }

    /// Total number of rule applications in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.premises.iter().map(Self::size).sum::<usize>()
    }

    /// Renders the derivation with the given nesting depth.
    ///
    /// Leaves are written `<judgment> by <Rule> {};`. Rules with premises
    /// open a brace, write each premise one level deeper, and close with
    /// `};` at their own depth.
    ///
    /// # Errors
    /// Only those of the underlying writer.
    pub fn write_at(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        let pad = depth * INDENT;
        if self.premises.is_empty() {
            return writeln!(out, "{:pad$}{} by {} {{}};", "", self.judgment, self.rule);
        }

        writeln!(out, "{:pad$}{} by {} {{", "", self.judgment, self.rule)?;
        for premise in &self.premises {
            premise.write_at(out, depth + 1)?;
        }
        writeln!(out, "{:pad$}}};", "")
    }
}

/// Renders the full derivation text.
///
/// ```
/// use evalml::derive;
///
/// let evaluation = derive("|- 1 + 2").unwrap();
/// assert_eq!(evaluation.derivation.to_string(),
///            "|- 1 + 2 evalto 3 by E-Plus {\n\
///            \x20   |- 1 evalto 1 by E-Int {};\n\
///            \x20   |- 2 evalto 2 by E-Int {};\n\
///            \x20   1 plus 2 is 3 by B-Plus {};\n\
///            };\n");
/// ```
impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_at(f, 0)
    }
}
