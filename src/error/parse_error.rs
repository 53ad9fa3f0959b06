#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// The parser expected one token kind and found another.
    UnexpectedToken {
        /// Kind (or description) of what was expected.
        expected: String,
        /// Kind of the token actually found.
        found:    String,
        /// Byte offset of the token actually found.
        position: usize,
    },
    /// An integer literal does not fit a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// Parentheses or keyword-led constructs are nested too deeply.
    NestingTooDeep {
        /// Byte offset of the token where the bound was exceeded.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Lexing error at {position}: Unknown token: {character:?}."),
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Syntax error at {position}: Expected {expected}, got {found}.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Syntax error at {position}: Literal {literal} is too large.")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Syntax error at {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
