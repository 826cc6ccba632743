use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The mutable store mapping variable names to runtime values.
///
/// One environment exists per program run, owned by the evaluation context.
/// It is created empty, mutated only by assignment and `stdin` reads, and is
/// a single flat scope: the language has no blocks, functions, or shadowing.
/// Names are opaque strings compared by exact textual equality, sigil
/// included.
///
/// # Example
/// ```
/// use tauscript::interpreter::{environment::Environment, value::Value};
///
/// let mut environment = Environment::new();
/// environment.define("#a", Value::Integer(5));
///
/// assert_eq!(environment.get("#a"), Some(&Value::Integer(5)));
/// assert_eq!(environment.get("#b"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { values: HashMap::new() }
    }

    /// Stores `value` under `name`, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}
