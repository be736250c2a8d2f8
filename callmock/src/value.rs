use std::collections::BTreeMap;
use std::fmt;

use crate::{Opaque, ValueError};

/// A dynamically typed argument or return value.
///
/// Equality is deep and structural: containers compare element by element,
/// references compare what they point to, and values of different kinds are
/// never equal. Numbers carry the width they were built from, so `1i32` and
/// `1i64` differ. Byte sequences compare by content, where a nil sequence only
/// equals another nil sequence (an empty sequence is not nil).
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64, IntWidth),
    Uint(u64, IntWidth),
    Float(f64, FloatWidth),
    Char(char),
    Str(String),
    Bytes(Option<Vec<u8>>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Ref(Box<Value>),
    Opaque(Opaque),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    Bits8,
    Bits16,
    Bits32,
    Bits64,
    Size,
}

impl IntWidth {
    fn suffix(self) -> &'static str {
        match self {
            IntWidth::Bits8 => "8",
            IntWidth::Bits16 => "16",
            IntWidth::Bits32 => "32",
            IntWidth::Bits64 => "64",
            IntWidth::Size => "size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    Bits32,
    Bits64,
}

impl Value {
    pub fn nil() -> Self {
        Value::Nil
    }

    /// A byte sequence that is absent, as opposed to present but empty.
    pub fn nil_bytes() -> Self {
        Value::Bytes(None)
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Some(bytes.into()))
    }

    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn reference(value: impl Into<Value>) -> Self {
        Value::Ref(Box::new(value.into()))
    }

    pub fn opaque<T: PartialEq + fmt::Debug + Send + Sync + 'static>(value: T) -> Self {
        Value::Opaque(Opaque::new(value))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(..) => "int",
            Value::Uint(..) => "uint",
            Value::Float(..) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Ref(_) => "reference",
            Value::Opaque(_) => "opaque",
        }
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Opaque(opaque) => opaque.downcast_ref(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a, a_width), Value::Int(b, b_width)) => a_width == b_width && a == b,
            (Value::Uint(a, a_width), Value::Uint(b, b_width)) => a_width == b_width && a == b,
            (Value::Float(a, a_width), Value::Float(b, b_width)) => a_width == b_width && a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => match (a, b) {
                (Some(a), Some(b)) => a.as_slice() == b.as_slice(),
                (a, b) => a.is_none() && b.is_none(),
            },
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            // i32 and f64 are the unsuffixed literal types.
            Value::Int(n, IntWidth::Bits32) => write!(f, "{n}"),
            Value::Int(n, width) => write!(f, "{n}i{}", width.suffix()),
            Value::Uint(n, width) => write!(f, "{n}u{}", width.suffix()),
            Value::Float(n, FloatWidth::Bits64) => write!(f, "{n:?}"),
            Value::Float(n, FloatWidth::Bits32) => write!(f, "{:?}f32", *n as f32),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Bytes(None) => f.write_str("nil bytes"),
            Value::Bytes(Some(bytes)) => {
                f.write_str("0x")?;
                bytes.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Ref(value) => write!(f, "&{value}"),
            Value::Opaque(opaque) => write!(f, "{opaque:?}"),
        }
    }
}

macro_rules! from_int {
    ($variant:ident, $wide:ty, $($ty:ty => $width:ident),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $wide, IntWidth::$width)
                }
            }
        )*
    };
}

from_int!(Int, i64, i8 => Bits8, i16 => Bits16, i32 => Bits32, i64 => Bits64, isize => Size);
from_int!(Uint, u64, u8 => Bits8, u16 => Bits16, u32 => Bits32, u64 => Bits64, usize => Size);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into(), FloatWidth::Bits32)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value, FloatWidth::Bits64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(Some(value))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(Some(value.to_vec()))
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(value: [u8; N]) -> Self {
        Value::Bytes(Some(value.to_vec()))
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(value: &[u8; N]) -> Self {
        Value::Bytes(Some(value.to_vec()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl From<Opaque> for Value {
    fn from(value: Opaque) -> Self {
        Value::Opaque(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

pub trait FromValue: Sized {
    /// Whether `Option<Self>` reads a nil byte sequence as `None`.
    const NIL_BYTES_ARE_NONE: bool = false;

    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

macro_rules! from_value_int {
    ($variant:ident, $($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::$variant(n, _) => <$ty>::try_from(n).map_err(|_| ValueError::OutOfRange {
                            value: n.to_string(),
                            target: stringify!($ty),
                        }),
                        other => Err(ValueError::mismatch(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

from_value_int!(Int, i8, i16, i32, i64, isize);
from_value_int!(Uint, u8, u16, u32, u64, usize);

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ValueError::mismatch("bool", &other)),
        }
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Char(c) => Ok(c),
            other => Err(ValueError::mismatch("char", &other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(n, _) => Ok(n),
            other => Err(ValueError::mismatch("f64", &other)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(n, _) => Ok(n as f32),
            other => Err(ValueError::mismatch("f32", &other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(ValueError::mismatch("string", &other)),
        }
    }
}

impl FromValue for Vec<u8> {
    const NIL_BYTES_ARE_NONE: bool = true;

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(Some(bytes)) => Ok(bytes),
            other => Err(ValueError::mismatch("bytes", &other)),
        }
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::List(items) => Ok(items),
            other => Err(ValueError::mismatch("list", &other)),
        }
    }
}

impl FromValue for BTreeMap<String, Value> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Map(entries) => Ok(entries),
            other => Err(ValueError::mismatch("map", &other)),
        }
    }
}

impl FromValue for Opaque {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Opaque(opaque) => Ok(opaque),
            other => Err(ValueError::mismatch("opaque", &other)),
        }
    }
}

/// `Nil` becomes `None`, and so does a nil byte sequence when `T` holds bytes.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Nil => Ok(None),
            Value::Bytes(None) if T::NIL_BYTES_ARE_NONE => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Value::Nil | Value::Bytes(None) => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n, _) => serializer.serialize_i64(*n),
            Value::Uint(n, _) => serializer.serialize_u64(*n),
            Value::Float(n, _) => serializer.serialize_f64(*n),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bytes(Some(bytes)) => serializer.serialize_bytes(bytes),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Ref(value) => serde::Serialize::serialize(value.as_ref(), serializer),
            Value::Opaque(opaque) => serializer.collect_str(&format_args!("{opaque:?}")),
        }
    }
}
