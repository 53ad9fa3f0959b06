use crate::{
    error::DecodeError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            core::MAX_NESTING,
            statement::{ClosureForm, parse_closure_form},
        },
        value::{core::Value, env::Env},
    },
};

/// Decodes environment text such as `x = 1, f = (y = 2)[fun z -> y + z]`.
///
/// Bindings are separated by commas at nesting depth zero; commas inside the
/// captured environment of a closure value belong to that closure. Each
/// binding is split on its first `=`. Blank text is the empty environment.
///
/// # Errors
/// - `MalformedBinding` for an entry without `=` or with an invalid name.
/// - `UnbalancedDelimiter` when parentheses or brackets do not match.
/// - Any error from decoding the bound values, including `NestingTooDeep`
///   for closures captured inside closures too many levels deep.
///
/// # Example
/// ```
/// use evalml::interpreter::value::codec::decode_env;
///
/// let env = decode_env("x = -4, f = (y = 2, z = 3)[fun w -> y + w]").unwrap();
/// assert_eq!(env.len(), 2);
/// assert_eq!(env.to_string(), "x = -4, f = (y = 2, z = 3)[fun w -> y + w]");
/// ```
pub fn decode_env(text: &str) -> Result<Env, DecodeError> {
    decode_env_at(text, 0)
}

fn decode_env_at(text: &str, depth: usize) -> Result<Env, DecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Env::new());
    }

    let mut env = Env::new();
    for binding in split_top_level(text)? {
        let (name, value) =
            binding.split_once('=')
                   .ok_or_else(|| DecodeError::MalformedBinding { text: binding.trim()
                                                                         .to_string(), })?;
        let name = name.trim();
        if !is_identifier(name) {
            return Err(DecodeError::MalformedBinding { text: binding.trim().to_string() });
        }
        env = env.extend(name, decode_value_at(value, depth)?);
    }
    Ok(env)
}

/// Decodes the canonical text of a value.
///
/// Accepts `true`, `false`, decimal integers (optionally negative) and
/// closure text.
///
/// # Errors
/// `InvalidValue` for anything else, or a closure decoding error.
///
/// # Example
/// ```
/// use evalml::interpreter::value::{codec::decode_value, core::Value};
///
/// assert_eq!(decode_value(" -12 ").unwrap(), Value::Integer(-12));
/// assert_eq!(decode_value("false").unwrap(), Value::Bool(false));
///
/// let closure = decode_value("()[rec f = fun n -> f (n - 1)]").unwrap();
/// assert_eq!(closure.to_string(), "()[rec f = fun n -> f (n - 1)]");
/// ```
pub fn decode_value(text: &str) -> Result<Value, DecodeError> {
    decode_value_at(text, 0)
}

fn decode_value_at(text: &str, depth: usize) -> Result<Value, DecodeError> {
    let text = text.trim();
    match text {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ if text.starts_with('(') => decode_closure_at(text, depth),
        _ => text.parse()
                 .map(Value::Integer)
                 .map_err(|_| DecodeError::InvalidValue { text: text.to_string() }),
    }
}

/// Decodes closure text `(ENV)[fun x -> e]` or `(ENV)[rec f = fun x -> e]`.
///
/// The captured environment is the balanced `(...)` span at the start, the
/// function part is the balanced `[...]` span right after it, and nothing may
/// follow.
///
/// # Errors
/// `UnbalancedDelimiter` or `MalformedClosure`, plus errors decoding the
/// captured environment.
pub fn decode_closure(text: &str) -> Result<Value, DecodeError> {
    decode_closure_at(text, 0)
}

/// `depth` counts the closures whose captured environment holds `text`.
fn decode_closure_at(text: &str, depth: usize) -> Result<Value, DecodeError> {
    if depth >= MAX_NESTING {
        return Err(DecodeError::NestingTooDeep { depth: MAX_NESTING });
    }
    let text = text.trim();
    let malformed = |reason: String| DecodeError::MalformedClosure { text: text.to_string(),
                                                                     reason };

    let (env_text, rest) = balanced_span(text, '(', ')')?;
    let rest = rest.trim_start();
    if !rest.starts_with('[') {
        return Err(malformed("expected '[' after the captured environment".to_string()));
    }
    let (form_text, tail) = balanced_span(rest, '[', ']')?;
    if !tail.trim().is_empty() {
        return Err(malformed(format!("unexpected trailing text '{}'", tail.trim())));
    }

    let env = decode_env_at(env_text, depth + 1)?;
    let form = parse_closure_form(form_text).map_err(|e| malformed(e.to_string()))?;

    Ok(match form {
        ClosureForm::Fun { param, body } => Value::Closure { env, param, body },
        ClosureForm::Rec { name, param, body } => Value::RecClosure { env,
                                                                      name,
                                                                      param,
                                                                      body },
    })
}

/// Splits `text`, which must start with `open`, at the matching `close`.
///
/// Only `open`/`close` are counted; other delimiters are ignored.
///
/// # Returns
/// The text strictly between the outer pair and the text after it.
///
/// # Errors
/// `UnbalancedDelimiter` if `text` does not start with `open` or the pair is
/// never closed.
///
/// # Example
/// ```
/// use evalml::interpreter::value::codec::balanced_span;
///
/// let (inner, rest) = balanced_span("(a (b) c)[d]", '(', ')').unwrap();
/// assert_eq!(inner, "a (b) c");
/// assert_eq!(rest, "[d]");
/// assert!(balanced_span("(a (b)", '(', ')').is_err());
/// ```
pub fn balanced_span(text: &str, open: char, close: char) -> Result<(&str, &str), DecodeError> {
    let unbalanced = || DecodeError::UnbalancedDelimiter { text: text.to_string() };
    if !text.starts_with(open) {
        return Err(unbalanced());
    }

    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Ok((&text[open.len_utf8()..i], &text[i + close.len_utf8()..]));
            }
        }
    }
    Err(unbalanced())
}

/// Splits on commas that are not nested in `(...)` or `[...]`.
fn split_top_level(text: &str) -> Result<Vec<&str>, DecodeError> {
    let unbalanced = || DecodeError::UnbalancedDelimiter { text: text.to_string() };
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            },
            _ => {},
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    parts.push(&text[start..]);
    Ok(parts)
}

/// Returns `true` when `name` lexes as exactly one identifier token.
fn is_identifier(name: &str) -> bool {
    matches!(tokenize(name).as_deref(),
             Ok([(Token::Identifier(_), _), (Token::Eof, _)]))
}
