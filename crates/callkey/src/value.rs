//! Dynamic argument values
//!
//! `Value` is what a caller passes; `KeyAtom` is the frozen, hashable form
//! stored inside a `CallKey`. Only immutable variants freeze. Numbers that
//! are equal in value freeze to the same atom: `true`, `1` and `1.0` match.

/// A single argument value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    None,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Immutable sequence
    Tuple(Vec<Value>),
    /// Mutable sequence (never hashable)
    List(Vec<Value>),
    /// Mutable mapping (never hashable)
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Build a tuple from anything convertible to values
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Build a list from anything convertible to values
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Whether this value (including anything nested in it) can form a key
    pub fn is_hashable(&self) -> bool {
        self.freeze().is_ok()
    }

    /// Freeze into a hashable atom, or report the kind that blocked it
    pub(crate) fn freeze(&self) -> std::result::Result<KeyAtom, &'static str> {
        Ok(match self {
            Value::None => KeyAtom::None,
            Value::Bool(b) => KeyAtom::Int(i64::from(*b)),
            Value::Int(i) => KeyAtom::Int(*i),
            Value::Float(f) => float_atom(*f),
            Value::Str(s) => KeyAtom::Str(s.clone()),
            Value::Bytes(b) => KeyAtom::Bytes(b.clone()),
            Value::Tuple(items) => KeyAtom::Tuple(
                items
                    .iter()
                    .map(Value::freeze)
                    .collect::<std::result::Result<_, _>>()?,
            ),
            Value::List(_) | Value::Map(_) => return Err(self.kind()),
        })
    }
}

/// Whole floats inside the i64 range become `Int`; the rest key on their bits
///
/// `-0.0` lands on `Int(0)` and all NaNs share one bit pattern.
fn float_atom(f: f64) -> KeyAtom {
    // 2^63 is exact as f64; anything below it and >= -2^63 fits in i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        KeyAtom::Float(f64::NAN.to_bits())
    } else if f.fract() == 0.0 && f >= -LIMIT && f < LIMIT {
        KeyAtom::Int(f as i64)
    } else {
        KeyAtom::Float(f.to_bits())
    }
}

/// Frozen argument value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum KeyAtom {
    None,
    Int(i64),
    Float(u64),
    Str(String),
    Bytes(Vec<u8>),
    Tuple(Vec<KeyAtom>),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
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

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}
