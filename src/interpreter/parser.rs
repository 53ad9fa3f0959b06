/// Entry points and the keyword-led constructs.
///
/// Holds `parse_expression` together with `if`, `let`, `let rec` and `fun`,
/// which may only start an expression position.
pub mod core;
/// Binary operator parsing.
///
/// One function per precedence level: comparison, additive and
/// multiplicative. All levels are left-associative.
pub mod binary;
/// Application and atoms.
///
/// Juxtaposition binds tighter than every operator; atoms are literals,
/// identifiers and parenthesised expressions.
pub mod application;
/// Whole-input parsing.
///
/// Parses a complete statement up to end of input and the body forms found
/// inside closure text.
pub mod statement;

pub(crate) mod utils;
