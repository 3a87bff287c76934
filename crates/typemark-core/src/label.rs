//! Label types for typemark
//!
//! A [`Label`] is the symbolic value stored in a type table. Callers hand the
//! factory [`LabelInput`]s, which may be anything a loosely-typed caller could
//! pass; only textual inputs are valid labels.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;

use crate::{TypemarkError, TypemarkResult};

/// Symbolic label - a non-empty textual identifier
///
/// Cheap to clone; the text is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(Arc<str>);

impl Label {
    /// Parse a label, rejecting empty text
    pub fn parse(text: &str) -> TypemarkResult<Self> {
        if text.is_empty() {
            return Err(TypemarkError::InvalidLabelType {
                input: "\"\"".to_string(),
            });
        }
        Ok(Label(Arc::from(text)))
    }

    /// Build a label without checking that it is non-empty.
    ///
    /// Used for best-effort registration in relaxed mode.
    #[inline]
    pub fn new_unchecked(text: &str) -> Self {
        Label(Arc::from(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({:?})", &*self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value handed to the factory as a prospective label
#[derive(Clone, Debug, PartialEq)]
pub enum LabelInput {
    /// Textual input - the only valid kind
    Text(String),
    /// Wide enough for every `i64` and `u64`
    Integer(i128),
    Float(f64),
    Bool(bool),
    /// Explicit absence (`null`)
    Null,
    /// Arrays and objects, kept as their JSON rendering
    Structured(String),
}

impl LabelInput {
    /// Is this a textual input?
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, LabelInput::Text(_))
    }

    /// Name of the input kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            LabelInput::Text(_) => "string",
            LabelInput::Integer(_) | LabelInput::Float(_) => "number",
            LabelInput::Bool(_) => "boolean",
            LabelInput::Null => "null",
            LabelInput::Structured(_) => "object",
        }
    }

    /// Convert into a label, failing on anything that is not non-empty text
    pub fn into_label(self) -> TypemarkResult<Label> {
        match self {
            LabelInput::Text(text) => Label::parse(&text),
            other => Err(TypemarkError::InvalidLabelType {
                input: other.to_string(),
            }),
        }
    }

    /// Convert into a label by stringifying whatever was supplied
    pub fn into_label_lossy(self) -> Label {
        match self {
            LabelInput::Text(text) => Label::new_unchecked(&text),
            other => Label::new_unchecked(&other.to_string()),
        }
    }
}

impl fmt::Display for LabelInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelInput::Text(text) => f.write_str(text),
            LabelInput::Integer(n) => write!(f, "{}", n),
            LabelInput::Float(n) if n.is_nan() => f.write_str("NaN"),
            LabelInput::Float(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_negative() { "-Infinity" } else { "Infinity" })
            }
            LabelInput::Float(n) => write!(f, "{}", n),
            LabelInput::Bool(b) => write!(f, "{}", b),
            LabelInput::Null => f.write_str("null"),
            LabelInput::Structured(json) => f.write_str(json),
        }
    }
}

impl From<&str> for LabelInput {
    fn from(text: &str) -> Self {
        LabelInput::Text(text.to_string())
    }
}

impl From<String> for LabelInput {
    fn from(text: String) -> Self {
        LabelInput::Text(text)
    }
}

impl From<&String> for LabelInput {
    fn from(text: &String) -> Self {
        LabelInput::Text(text.clone())
    }
}

impl From<Label> for LabelInput {
    fn from(label: Label) -> Self {
        LabelInput::Text(label.as_str().to_string())
    }
}

impl From<&Label> for LabelInput {
    fn from(label: &Label) -> Self {
        LabelInput::Text(label.as_str().to_string())
    }
}

impl From<char> for LabelInput {
    fn from(c: char) -> Self {
        LabelInput::Text(c.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LabelInput {
                fn from(n: $ty) -> Self {
                    LabelInput::Integer(n as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for LabelInput {
    fn from(n: f32) -> Self {
        LabelInput::Float(n as f64)
    }
}

impl From<f64> for LabelInput {
    fn from(n: f64) -> Self {
        LabelInput::Float(n)
    }
}

impl From<bool> for LabelInput {
    fn from(b: bool) -> Self {
        LabelInput::Bool(b)
    }
}

impl<T: Into<LabelInput>> From<Option<T>> for LabelInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(LabelInput::Null, Into::into)
    }
}

impl From<Value> for LabelInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => LabelInput::Text(text),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => LabelInput::Integer(i as i128),
                (None, Some(u)) => LabelInput::Integer(u as i128),
                (None, None) => LabelInput::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::Bool(b) => LabelInput::Bool(b),
            Value::Null => LabelInput::Null,
            structured @ (Value::Array(_) | Value::Object(_)) => {
                LabelInput::Structured(structured.to_string())
            }
        }
    }
}

impl From<&Value> for LabelInput {
    fn from(value: &Value) -> Self {
        LabelInput::from(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_label_parse() {
        let label = Label::parse("ADD_TODO").unwrap();
        assert_eq!(label.as_str(), "ADD_TODO");
        assert_eq!(label, "ADD_TODO");
        assert_eq!(label.to_string(), "ADD_TODO");
    }

    #[test]
    fn test_label_rejects_empty() {
        let err = Label::parse("").unwrap_err();
        assert_eq!(err.kind(), "InvalidLabelType");
    }

    #[test]
    fn test_text_input_converts() {
        let label = LabelInput::from("test2").into_label().unwrap();
        assert_eq!(label, "test2");
    }

    #[test]
    fn test_structured_input_rejected() {
        let err = LabelInput::from(json!({})).into_label().unwrap_err();
        assert_eq!(
            err,
            TypemarkError::InvalidLabelType {
                input: "{}".to_string()
            }
        );
    }

    #[test]
    fn test_non_text_kinds() {
        assert_eq!(LabelInput::from(42).kind(), "number");
        assert_eq!(LabelInput::from(1.5).kind(), "number");
        assert_eq!(LabelInput::from(true).kind(), "boolean");
        assert_eq!(LabelInput::from(None::<&str>).kind(), "null");
        assert_eq!(LabelInput::from(json!([1, 2])).kind(), "object");
        assert_eq!(LabelInput::from(Some("a")).kind(), "string");
    }

    #[test]
    fn test_lossy_conversion() {
        assert_eq!(LabelInput::from(42).into_label_lossy(), "42");
        assert_eq!(LabelInput::from(false).into_label_lossy(), "false");
        assert_eq!(LabelInput::Null.into_label_lossy(), "null");
        assert_eq!(LabelInput::from(json!({"a": 1})).into_label_lossy(), "{\"a\":1}");
        assert!(LabelInput::from("").into_label_lossy().is_empty());
    }

    #[test]
    fn test_json_number_input() {
        assert_eq!(LabelInput::from(json!(7)), LabelInput::Integer(7));
        assert_eq!(LabelInput::from(json!(0.5)), LabelInput::Float(0.5));
    }

    #[test]
    fn test_wide_numbers_keep_their_text() {
        assert_eq!(LabelInput::from(u64::MAX).into_label_lossy(), "18446744073709551615");
        assert_eq!(
            LabelInput::from(json!(u64::MAX)).into_label_lossy(),
            "18446744073709551615"
        );
        assert_eq!(LabelInput::from(i64::MIN).into_label_lossy(), "-9223372036854775808");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(LabelInput::from(f64::INFINITY).into_label_lossy(), "Infinity");
        assert_eq!(LabelInput::from(f64::NEG_INFINITY).into_label_lossy(), "-Infinity");
        assert_eq!(LabelInput::from(f64::NAN).into_label_lossy(), "NaN");
        assert_eq!(LabelInput::from(2.0).into_label_lossy(), "2");
    }

    #[test]
    fn test_is_text() {
        assert!(LabelInput::from("A").is_text());
        assert!(!LabelInput::from(1).is_text());
        assert!(!LabelInput::Null.is_text());
    }

    proptest! {
        #[test]
        fn prop_non_empty_text_is_valid(text in ".{1,32}") {
            let label = LabelInput::from(text.as_str()).into_label().unwrap();
            prop_assert_eq!(label.as_str(), text.as_str());
        }

        #[test]
        fn prop_integers_are_invalid(n in any::<i64>()) {
            prop_assert!(LabelInput::from(n).into_label().is_err());
        }
    }
}
