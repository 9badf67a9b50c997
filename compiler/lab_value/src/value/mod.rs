//! Runtime values of the Lab language.
//!
//! # Thread Safety
//!
//! Heap payloads use `Arc` internally, so values are `Send + Sync`. Cloning a
//! text or list value is a reference-count bump.

mod heap;

pub use heap::Heap;

use std::fmt;

use lab_measure::MeasuredValue;

/// Runtime value.
///
/// Immutable after construction. Heap-backed variants are built through the
/// factory methods (`Value::text`, `Value::list`, ...).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Magnitude with propagated uncertainty.
    Number(MeasuredValue),
    /// String literal content, delimiters already stripped.
    Text(Heap<String>),
    /// Unresolved symbolic name.
    Symbol(Heap<String>),
    /// Unresolved package reference, stored by name.
    PackageRef(Heap<String>),
    /// Ordered, possibly heterogeneous sequence.
    List(Heap<Vec<Value>>),
}

impl Value {
    // Factory methods

    #[inline]
    pub fn number(value: MeasuredValue) -> Self {
        Value::Number(value)
    }

    /// An exact number (both error channels zero).
    #[inline]
    pub fn scalar(magnitude: f64) -> Self {
        Value::Number(MeasuredValue::exact(magnitude))
    }

    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(Heap::new(s.into()))
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Heap::new(name.into()))
    }

    #[inline]
    pub fn package(name: impl Into<String>) -> Self {
        Value::PackageRef(Heap::new(name.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    // Accessors

    pub fn as_number(&self) -> Option<MeasuredValue> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Symbol(_) => "symbol",
            Value::PackageRef(_) => "package",
            Value::List(_) => "list",
        }
    }
}

impl From<MeasuredValue> for Value {
    fn from(value: MeasuredValue) -> Self {
        Value::Number(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "\"{}\"", &**s),
            Value::Symbol(name) => write!(f, "{}", &**name),
            Value::PackageRef(name) => write!(f, "@{}", &**name),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests;
