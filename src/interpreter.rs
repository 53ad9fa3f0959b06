/// The evaluator module applies the rules of the evaluation relation.
///
/// The evaluator walks the expression tree under an environment and, for
/// every sub-expression, produces both its value and the derivation that
/// justifies it. It is the core of the crate.
///
/// # Responsibilities
/// - Implements one rule per language construct.
/// - Threads environments through `let`, closures and application.
/// - Reports runtime errors such as unbound variables or applying a number.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, booleans, identifiers, keywords, operators and parentheses, each
/// paired with its byte position.
///
/// # Responsibilities
/// - Classifies keywords, literals and identifiers.
/// - Reports unknown characters together with their position.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// # Responsibilities
/// - Encodes the precedence table: `<` loosest, then `+`/`-`, then `*`, then
///   application.
/// - Reports syntax errors with the expected and actual token kinds.
pub mod parser;
/// The value module defines runtime values and environments.
///
/// Values are integers, booleans, closures and recursive closures. Each has
/// a canonical text form, and the codec reads that text back.
pub mod value;
/// Derivation trees.
///
/// Defines the rules, the judgments they conclude and the textual rendering
/// of a complete proof.
pub mod derivation;
