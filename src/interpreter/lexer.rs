use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The digits are kept as text; the parser converts them and reports
    /// literals that do not fit an `i64`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `fun`
    #[token("fun")]
    Fun,
    /// `let`
    #[token("let")]
    Let,
    /// `rec`
    #[token("rec")]
    Rec,
    /// `in`
    #[token("in")]
    In,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or parameter names such as `x` or `fact`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `->`
    #[token("->")]
    Arrow,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `<`
    #[token("<")]
    Less,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by the lexer itself; appended by
    /// [`Tokenizer`] once the source is exhausted.
    Eof,
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the upper-case kind name used in syntax error messages.
    ///
    /// # Example
    /// ```
    /// use evalml::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Arrow.kind_name(), "ARROW");
    /// assert_eq!(Token::Identifier("x".to_string()).kind_name(), "IDENT");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Bool(_) => "BOOL",
            Self::Fun => "FUN",
            Self::Let => "LET",
            Self::Rec => "REC",
            Self::In => "IN",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::Identifier(_) => "IDENT",
            Self::Arrow => "ARROW",
            Self::Equals => "EQ",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "ASTERISK",
            Self::Less => "LT",
            Self::LParen => "OPEN_PAREN",
            Self::RParen => "CLOSE_PAREN",
            Self::Eof | Self::Ignored => "EOF",
        }
    }

    /// Returns `true` for tokens that can start an atom: literals,
    /// identifiers and `(`.
    #[must_use]
    pub const fn starts_atom(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Bool(_) | Self::Identifier(_) | Self::LParen)
    }
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Lazy tokenizer over a source string.
///
/// Each call to [`Tokenizer::next_token`] yields one token paired with its
/// byte offset. Once the input is exhausted every further call returns
/// [`Token::Eof`] positioned at the end of the source.
pub struct Tokenizer<'s> {
    lexer: logos::Lexer<'s, Token>,
    len:   usize,
}

impl<'s> Tokenizer<'s> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { lexer: Token::lexer(source),
               len:   source.len(), }
    }

    /// Produces the next token and its byte position.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedCharacter`] with the offending
    /// character and its position when the input contains a character that
    /// starts no token.
    pub fn next_token(&mut self) -> Result<(Token, usize), ParseError> {
        match self.lexer.next() {
            Some(Ok(token)) => Ok((token, self.lexer.span().start)),
            Some(Err(())) => {
                let position = self.lexer.span().start;
                let character = self.lexer.slice().chars().next().unwrap_or('\0');
                Err(ParseError::UnexpectedCharacter { character, position })
            },
            None => Ok((Token::Eof, self.len)),
        }
    }
}

/// Tokenizes a whole source string eagerly.
///
/// The returned vector always ends with exactly one [`Token::Eof`].
///
/// # Errors
/// Propagates the first lexical error.
///
/// # Example
/// ```
/// use evalml::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("f -> 12").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|(t, _)| t.clone()).collect();
/// assert_eq!(kinds,
///            vec![Token::Identifier("f".to_string()),
///                 Token::Arrow,
///                 Token::Number("12".to_string()),
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();

    loop {
        let (token, position) = tokenizer.next_token()?;
        let done = token == Token::Eof;
        tokens.push((token, position));
        if done {
            return Ok(tokens);
        }
    }
}
