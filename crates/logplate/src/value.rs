//! Runtime value types for render arguments.
//!
//! The [`Value`] enum carries an argument from the log call site to the
//! renderer. Text rendering goes through [`Value::normalized`] first, which
//! applies the substitution rules for nulls and sequences; structured sinks
//! receive the raw variants so machine-consumable output keeps original
//! shapes instead of stringified forms.
//!
//! # Example
//!
//! ```
//! use logplate::Value;
//!
//! let v = Value::from(vec![1, 2, 3]);
//! assert!(v.is_seq());
//! assert_eq!(v.to_string(), "1, 2, 3");
//!
//! assert_eq!(Value::Null.to_string(), "(null)");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Text substituted for null arguments and null sequence elements.
pub(crate) const NULL_TEXT: &str = "(null)";

/// A render argument.
///
/// Conversions from the common primitive types are provided via `From`, so
/// call sites can pass `42`, `"text"`, `Some(x)` or `vec![..]` directly
/// through `impl Into<Value>` parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value. Renders as `(null)`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    Uint(u64),
    /// Floating point value.
    Float(f64),
    /// Text value. Never treated as a sequence of characters.
    Str(String),
    /// Sequence value. Renders as its elements joined with `", "`.
    Seq(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this is an integer value, signed or unsigned.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Uint(_))
    }

    /// Returns `true` if this is a `Float` value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if this is a `Str` value.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if this is a `Seq` value.
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the sequence elements, if present.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as `f64` for fixed-point formatting, if numeric.
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Uint(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Normalizes the value for text substitution.
    ///
    /// Applied to every argument before positional formatting, in this
    /// order: null becomes the literal `(null)` text; strings pass through
    /// unchanged (a string is never exploded into characters); sequences
    /// become their elements joined with `", "`, null elements included as
    /// `(null)`; everything else passes through untouched so alignment and
    /// format specifiers still see the numeric value.
    ///
    /// Pure and side-effect free; borrows whenever no rewrite is needed.
    pub fn normalized(&self) -> Cow<'_, Value> {
        match self {
            Value::Null | Value::Seq(_) => Cow::Owned(Value::Str(self.to_string())),
            _ => Cow::Borrowed(self),
        }
    }
}

/// Culture-invariant plain rendering. Numbers and booleans use Rust's
/// locale-independent formatting, so output never depends on the host
/// locale.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str(NULL_TEXT),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Seq(items) => {
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

/// Structured sinks receive raw shapes: `Null` maps to a JSON null, `Seq`
/// to an array, scalars to their JSON counterparts.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Uint(n) => serializer.serialize_u64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Uint(n as u64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize);
impl_from_uint!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalars() {
        assert_eq!(Value::Null.to_string(), "(null)");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Uint(7).to_string(), "7");
        assert_eq!(Value::Float(19.99).to_string(), "19.99");
        assert_eq!(Value::Str("abc".into()).to_string(), "abc");
    }

    #[test]
    fn display_seq_joins_elements() {
        let v = Value::Seq(vec![Value::Int(1), Value::Null, Value::Int(3)]);
        assert_eq!(v.to_string(), "1, (null), 3");
    }

    #[test]
    fn display_nested_seq() {
        let v = Value::Seq(vec![
            Value::Seq(vec![Value::Int(1), Value::Int(2)]),
            Value::Int(3),
        ]);
        assert_eq!(v.to_string(), "1, 2, 3");
    }

    #[test]
    fn normalized_null_becomes_text() {
        let n = Value::Null.normalized();
        assert_eq!(n.as_ref(), &Value::Str("(null)".into()));
        assert!(matches!(n, Cow::Owned(_)));
    }

    #[test]
    fn normalized_seq_becomes_joined_text() {
        let v = Value::from(vec!["a", "b"]);
        assert_eq!(v.normalized().as_ref(), &Value::Str("a, b".into()));
    }

    #[test]
    fn normalized_passthrough_borrows() {
        for v in [
            Value::Bool(false),
            Value::Int(1),
            Value::Float(0.5),
            Value::Str("s".into()),
        ] {
            assert!(matches!(v.normalized(), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(42u8), Value::Uint(42));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from('x'), Value::Str("x".into()));
        assert_eq!(Value::from("s"), Value::Str("s".into()));
        assert_eq!(Value::from(String::from("s")), Value::Str("s".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("v")), Value::Str("v".into()));
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::Seq(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn predicates_and_extractors() {
        assert!(Value::Null.is_null());
        assert!(Value::Int(1).is_integer());
        assert!(Value::Uint(1).is_integer());
        assert!(Value::Float(1.0).is_float());
        assert!(Value::Str("s".into()).is_str());
        assert!(Value::Seq(vec![]).is_seq());
        assert!(Value::Bool(true).is_bool());

        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Str("s".into()).as_str(), Some("s"));
        assert_eq!(Value::Int(1).as_str(), None);
        assert_eq!(
            Value::Seq(vec![Value::Int(1)]).as_seq(),
            Some(&[Value::Int(1)][..])
        );
    }
}
