#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised while decoding environment or value text.
///
/// Values only ever take the shapes produced by their own `Display`
/// implementations, so these indicate a caller handed over text that was not
/// produced by this crate, or that was edited by hand.
pub enum DecodeError {
    /// A `(` or `[` was never closed, or a closer appeared without an opener.
    UnbalancedDelimiter {
        /// The text being scanned.
        text: String,
    },
    /// Closure text did not match `(ENV)[fun x -> e]` or
    /// `(ENV)[rec f = fun x -> e]`.
    MalformedClosure {
        /// The closure text.
        text:   String,
        /// Why the match failed.
        reason: String,
    },
    /// An environment entry was not of the form `ident = value`.
    MalformedBinding {
        /// The binding text.
        text: String,
    },
    /// Text that is neither an integer, a boolean nor a closure.
    InvalidValue {
        /// The value text.
        text: String,
    },
    /// Closures are nested inside captured environments too deeply.
    NestingTooDeep {
        /// The nesting bound that was exceeded.
        depth: usize,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedDelimiter { text } => {
                write!(f, "Decode error: Unbalanced delimiters in '{text}'.")
            },
            Self::MalformedClosure { text, reason } => {
                write!(f, "Decode error: Malformed closure '{text}': {reason}.")
            },
            Self::MalformedBinding { text } => write!(f,
                                                      "Decode error: Binding '{text}' is not of the form 'ident = value'."),
            Self::InvalidValue { text } => write!(f, "Decode error: '{text}' is not a value."),
            Self::NestingTooDeep { depth } => {
                write!(f, "Decode error: Closures nested more than {depth} levels deep.")
            },
        }
    }
}

impl std::error::Error for DecodeError {}
