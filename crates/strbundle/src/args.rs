//! Placeholder values for template interpolation
//!
//! `Args` maps placeholder names to [`Value`]s. Every value renders through
//! its `Display` form, so numbers and booleans come out in their usual
//! textual shape (`42`, `2.5`, `true`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single value substituted into a template placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer too large for `Int`
    UInt(u64),
    /// Floating point number
    ///
    /// Finite values use Rust's `Display` and never switch to exponent
    /// notation, so `1e21` renders as `1000000000000000000000`. Negative zero
    /// renders as `0`; non-finite values render as `Infinity`, `-Infinity`
    /// and `NaN`.
    Float(f64),
    /// Single character
    Char(char),
    /// Text
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => fmt_float(*x, f),
            Self::Char(c) => write!(f, "{c}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        f.write_str("NaN")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
    } else if x == 0.0 {
        // covers -0.0
        f.write_str("0")
    } else {
        // Display already drops the fractional part of integral values
        write!(f, "{x}")
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::UInt(u64::from(value))
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        i64::try_from(value)
            .map(Self::Int)
            .or_else(|_| u64::try_from(value).map(Self::UInt))
            .unwrap_or_else(|_| Self::Str(value.to_string()))
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::UInt)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

/// Named values passed to a template when rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args {
    values: HashMap<String, Value>,
}

impl Args {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, returning the updated set
    #[must_use]
    pub fn set<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(name, value);
        self
    }

    /// Add or replace a value in place
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.values.insert(name.into(), value.into())
    }

    /// Look up the value bound to a placeholder name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a value is bound to `name`
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bound values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Build an [`Args`] set from `name => value` pairs
///
/// ```rust
/// let args = strbundle::args! { "firstName" => "John", "age" => 42 };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::Args::new();
        $(
            args.insert($name, $value);
        )+
        args
    }};
}
