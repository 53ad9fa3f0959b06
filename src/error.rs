/// Parsing errors.
///
/// Defines the lexical and syntax errors that can occur while turning source
/// text into an expression tree.
pub mod parse_error;
/// Value decoding errors.
///
/// Raised when environment or closure text cannot be taken apart into its
/// bindings, captured environment, parameter and body.
pub mod decode_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unbound variables or applying a value that is not a function.
pub mod runtime_error;

pub use decode_error::DecodeError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error an evaluation request can fail with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression text could not be tokenized or parsed.
    Parse(ParseError),
    /// The environment text could not be decoded.
    Decode(DecodeError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Decode(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
