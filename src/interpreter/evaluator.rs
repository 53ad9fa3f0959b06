/// Core evaluation logic and context management.
///
/// Contains the rule dispatcher, the evaluation context and the literal
/// rules `E-Int` and `E-Bool`.
pub mod core;

/// Variable lookup and `let`.
///
/// Implements `E-Var1`, `E-Var2` and `E-Let`.
pub mod binding;

/// Binary operator evaluation.
///
/// Implements `E-Plus`, `E-Minus`, `E-Times` and `E-Lt` together with their
/// primitive premises `B-Plus`, `B-Minus`, `B-Times` and `B-Lt`.
pub mod binary;

/// Conditional evaluation: `E-IfT` and `E-IfF`.
pub mod conditional;

/// Functions.
///
/// Closure creation (`E-Fun`, `E-LetRec`) and application (`E-App`,
/// `E-AppRec`).
pub mod function;
