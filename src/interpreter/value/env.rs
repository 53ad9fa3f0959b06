use std::{fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// An ordered sequence of `name = value` bindings.
///
/// `Env` is a persistent list: extending it allocates one node and shares the
/// rest, so closures capture their defining environment by reference count
/// rather than by copy. The newest binding is at the head.
///
/// # Example
/// ```
/// use evalml::interpreter::value::{core::Value, env::Env};
///
/// let env = Env::new().extend("x", Value::Integer(1))
///                     .extend("y", Value::Bool(true))
///                     .extend("x", Value::Integer(2));
///
/// assert_eq!(env.to_string(), "x = 1, y = true, x = 2");
/// assert_eq!(env.lookup("x"), Some(&Value::Integer(2)));
/// assert_eq!(env.without_last().lookup("x"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    head: Option<Rc<Binding>>,
}

#[derive(Debug, PartialEq, Eq)]
struct Binding {
    name:  String,
    value: Value,
    rest:  Env,
}

impl Env {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new environment with `name = value` appended. `self` is left
    /// untouched.
    #[must_use]
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Self {
        Self { head: Some(Rc::new(Binding { name: name.into(),
                                            value,
                                            rest: self.clone() })), }
    }

    /// Returns `true` when there are no bindings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The most recent binding, if any.
    #[must_use]
    pub fn last(&self) -> Option<(&str, &Value)> {
        self.head
            .as_deref()
            .map(|binding| (binding.name.as_str(), &binding.value))
    }

    /// The environment with its most recent binding removed. Empty stays
    /// empty.
    #[must_use]
    pub fn without_last(&self) -> Self {
        self.head
            .as_ref()
            .map_or_else(Self::new, |binding| binding.rest.clone())
    }

    /// Finds the most recent binding of `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            if binding.name == name {
                return Some(&binding.value);
            }
            current = binding.rest.head.as_deref();
        }
        None
    }

    /// Bindings from oldest to newest.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, &Value)> {
        let mut bindings = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            bindings.push((binding.name.as_str(), &binding.value));
            current = binding.rest.head.as_deref();
        }
        bindings.reverse();
        bindings
    }

    /// Number of bindings, shadowed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            len += 1;
            current = binding.rest.head.as_deref();
        }
        len
    }
}

/// Renders `x = 1, y = 2`, oldest binding first. The empty environment
/// renders as the empty string.
impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.bindings().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

impl Drop for Env {
    // Iterative: a long chain of uniquely owned bindings must not recurse
    // once per node.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut binding) => current = binding.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}
