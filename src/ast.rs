use std::{fmt, rc::Rc};

/// Binary operators of the language.
///
/// Application is not listed here: it has no operator symbol and is modelled
/// by [`Expr::App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `<`
    Less,
}

impl BinaryOperator {
    /// Binding strength of the operator. Larger binds tighter.
    ///
    /// `<` is the loosest, then `+`/`-` (equal), then `*`. Application binds
    /// tighter than all of them, see [`Expr::precedence`].
    ///
    /// # Example
    /// ```
    /// use evalml::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// assert!(BinaryOperator::Less.precedence() < BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Less => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul => 3,
        }
    }

    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Less => "<",
        }
    }

    /// The word used for the operator in primitive judgments such as
    /// `3 plus 4 is 7`.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Sub => "minus",
            Self::Mul => "times",
            Self::Less => "less than",
        }
    }
}

/// Precedence of `if`, `let`, `let rec` and `fun`: they extend as far right
/// as possible and must be parenthesised whenever they are an operand.
const OPEN_PRECEDENCE: u8 = 0;
/// Precedence of function application.
const APP_PRECEDENCE: u8 = 4;
/// Precedence of literals and variables.
const ATOM_PRECEDENCE: u8 = 5;

/// An abstract syntax tree node representing an expression in the language.
///
/// Function bodies are held behind [`Rc`] so that closures created during
/// evaluation can share them instead of copying the subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, e.g. `42`.
    Integer(i64),
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// Reference to a variable by name.
    Variable(String),
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `if condition then then_branch else else_branch`
    If {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition is `true`.
        then_branch: Box<Self>,
        /// Evaluated when the condition is `false`.
        else_branch: Box<Self>,
    },
    /// `let name = value in body`
    Let {
        /// The bound name.
        name:  String,
        /// The bound expression.
        value: Box<Self>,
        /// The expression evaluated with the binding in scope.
        body:  Box<Self>,
    },
    /// `let rec name = fun param -> function_body in body`
    LetRec {
        /// The name of the recursive function.
        name:          String,
        /// The function's parameter.
        param:         String,
        /// The function's body; may refer to `name`.
        function_body: Rc<Self>,
        /// The expression evaluated with the function in scope.
        body:          Box<Self>,
    },
    /// `fun param -> body`
    Fun {
        /// The parameter name.
        param: String,
        /// The function body.
        body:  Rc<Self>,
    },
    /// Function application by juxtaposition: `function argument`.
    App {
        /// The applied expression.
        function: Box<Self>,
        /// The argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Binding strength of the expression's outermost construct, on the same
    /// scale as [`BinaryOperator::precedence`].
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::If { .. } | Self::Let { .. } | Self::LetRec { .. } | Self::Fun { .. } => {
                OPEN_PRECEDENCE
            },
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::App { .. } => APP_PRECEDENCE,
            Self::Integer(_) | Self::Bool(_) | Self::Variable(_) => ATOM_PRECEDENCE,
        }
    }

    fn write_operand(&self, f: &mut fmt::Formatter<'_>, parenthesize: bool) -> fmt::Result {
        if parenthesize {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Renders the expression as canonical source text.
///
/// Parentheses are emitted only where the precedence table requires them, so
/// the text parses back into an identical tree:
///
/// ```
/// use evalml::interpreter::parser::statement::parse_source;
///
/// let expr = parse_source("((1 + 2)) * (3 * 4) - f (g x) y").unwrap();
/// assert_eq!(expr.to_string(), "(1 + 2) * (3 * 4) - f (g x) y");
/// assert_eq!(parse_source(&expr.to_string()).unwrap(), expr);
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::BinaryOp { op, left, right } => {
                let level = op.precedence();
                left.write_operand(f, left.precedence() < level)?;
                write!(f, " {} ", op.symbol())?;
                right.write_operand(f, right.precedence() <= level)
            },
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                write!(f, "if {condition} then {then_branch} else {else_branch}")
            },
            Self::Let { name, value, body } => write!(f, "let {name} = {value} in {body}"),
            Self::LetRec { name,
                           param,
                           function_body,
                           body, } => {
                write!(f, "let rec {name} = fun {param} -> {function_body} in {body}")
            },
            Self::Fun { param, body } => write!(f, "fun {param} -> {body}"),
            Self::App { function, argument } => {
                function.write_operand(f, function.precedence() < APP_PRECEDENCE)?;
                write!(f, " ")?;
                argument.write_operand(f, argument.precedence() <= APP_PRECEDENCE)
            },
        }
    }
}
