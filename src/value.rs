//! Dynamically typed values and their canonical string form.
//!
//! The default comparator orders elements by their string form, the same way a
//! dynamically typed host would when no comparator is supplied. This module defines:
//! - [`Value`]: a dynamic element (undefined, null, booleans, numbers, strings, arrays,
//!   objects and symbols).
//! - [`CanonicalString`]: the conversion the default comparator relies on, implemented
//!   for [`Value`] and for the primitive Rust types.

use std::borrow::Cow;
use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SortError};

/// Largest integer a double represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A dynamically typed element.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Key/value pairs in insertion order.
    Object(Vec<(String, Value)>),
    /// A unique token with an optional description. Has no canonical string form.
    Symbol(String),
}

impl Value {
    /// Name of the value kind, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Symbol(_) => "symbol",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `false` for `undefined`, `null`, `false`, `0`, `NaN` and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Symbol(_) => true,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Builds the canonical string, failing on symbols (also when nested in arrays).
    fn write_canonical(&self, out: &mut String) -> Result<()> {
        match self {
            Value::Undefined => out.push_str("undefined"),
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&number_to_string(*n)),
            Value::String(s) => out.push_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    match item {
                        // Holes and nulls join as empty strings.
                        Value::Undefined | Value::Null => {}
                        other => other.write_canonical(out)?,
                    }
                }
            }
            Value::Object(_) => out.push_str("[object Object]"),
            Value::Symbol(_) => {
                return Err(SortError::NotStringable {
                    kind: self.kind(),
                });
            }
        }
        Ok(())
    }
}

/// Formats a double the way a dynamic host prints numbers.
///
/// Integral values print without a fraction, non-finite values print as `NaN`,
/// `Infinity` and `-Infinity`, negative zero prints as `0`, and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent notation with an explicit sign (`1e+21`).
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }

    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// Conversion to the string the default comparator compares.
///
/// Implement this for your own element types to sort them with the default comparator.
///
/// ```
/// use sortkit::value::CanonicalString;
/// use std::borrow::Cow;
///
/// struct Version(u32, u32);
///
/// impl CanonicalString for Version {
///     fn canonical_string(&self) -> sortkit::Result<Cow<'_, str>> {
///         Ok(Cow::Owned(format!("{}.{}", self.0, self.1)))
///     }
/// }
/// ```
pub trait CanonicalString {
    /// Returns the string form of the value, or an error if it has none.
    fn canonical_string(&self) -> Result<Cow<'_, str>>;

    /// Returns `true` for the undefined value, which sorts after every defined value.
    fn is_undefined(&self) -> bool {
        false
    }
}

impl CanonicalString for Value {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        match self {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            other => {
                let mut out = String::new();
                other.write_canonical(&mut out)?;
                Ok(Cow::Owned(out))
            }
        }
    }

    fn is_undefined(&self) -> bool {
        Value::is_undefined(self)
    }
}

impl CanonicalString for str {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl CanonicalString for String {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl CanonicalString for bool {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(if *self { "true" } else { "false" }))
    }
}

impl CanonicalString for f64 {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(number_to_string(*self)))
    }
}

impl CanonicalString for f32 {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(number_to_string(f64::from(*self))))
    }
}

macro_rules! canonical_string_for_integers {
    ($($t:ty),*) => {
        $(
            impl CanonicalString for $t {
                fn canonical_string(&self) -> Result<Cow<'_, str>> {
                    Ok(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

canonical_string_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// `None` plays the role of the undefined value.
impl<T: CanonicalString> CanonicalString for Option<T> {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        match self {
            Some(inner) => inner.canonical_string(),
            None => Ok(Cow::Borrowed("undefined")),
        }
    }

    fn is_undefined(&self) -> bool {
        match self {
            Some(inner) => inner.is_undefined(),
            None => true,
        }
    }
}

impl<T: CanonicalString + ?Sized> CanonicalString for &T {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        (**self).canonical_string()
    }

    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
}

impl<T: CanonicalString + ?Sized> CanonicalString for Box<T> {
    fn canonical_string(&self) -> Result<Cow<'_, str>> {
        (**self).canonical_string()
    }

    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
}

/// Explicit string conversion. Unlike [`CanonicalString`] this never fails:
/// symbols render as `Symbol(description)`, also when nested in an array, where a
/// dynamic host's string conversion would throw instead. Use
/// [`CanonicalString::canonical_string`] to reject nested symbols.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(description) => write!(f, "Symbol({description})"),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !matches!(item, Value::Undefined | Value::Null) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            other => {
                let mut out = String::new();
                match other.write_canonical(&mut out) {
                    Ok(()) => f.write_str(&out),
                    Err(_) => Err(fmt::Error),
                }
            }
        }
    }
}

// JSON encoding drops what has no JSON form: undefined and symbols become `null`
// inside arrays and are omitted as object members, non-finite numbers become `null`.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if !n.is_finite() {
                    serializer.serialize_unit()
                } else if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in entries {
                    if matches!(value, Value::Undefined | Value::Symbol(_)) {
                        continue;
                    }
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}
