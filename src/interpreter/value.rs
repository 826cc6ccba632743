/// Represents a runtime value in the interpreter.
///
/// This enum models the three types a TauScript program can produce:
/// integers from literals and arithmetic, strings from literals and `stdin`,
/// and booleans from comparison operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A string value.
    Str(String),
    /// A boolean value, produced by comparison operators.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the name of the value's runtime type.
    ///
    /// Used in type mismatch messages.
    ///
    /// # Example
    /// ```
    /// use tauscript::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::Bool(true).type_name(), "boolean");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
