//! Structured Value Model
//!
//! A language-neutral tree of runtime values, built from anything that can
//! be rendered and laid out by the value formatter.

use std::cmp::Ordering;
use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    /// `None`, or a unit struct / unit enum variant.
    Named(String),
    /// `Some(v)`, a newtype or tuple struct, or a tuple variant.
    TupleStruct { name: String, fields: Vec<Value> },
    Struct { name: String, fields: Vec<(String, Value)> },
    Seq(Vec<Value>),
    Tuple(Vec<Value>),
    /// Entries in key order.
    Map(Vec<(Value, Value)>),
    /// Preformatted text for values with no structural form.
    Opaque(String),
}

impl Value {
    pub fn none() -> Self {
        Value::Named("None".to_string())
    }

    pub fn some(inner: Value) -> Self {
        Value::TupleStruct {
            name: "Some".to_string(),
            fields: vec![inner],
        }
    }

    /// True for values that contain other values.
    pub fn is_composite(&self) -> bool {
        match self {
            Value::TupleStruct { fields, .. } => !fields.is_empty(),
            Value::Struct { .. } | Value::Seq(_) | Value::Tuple(_) | Value::Map(_) => true,
            _ => false,
        }
    }

    /// Total order used to sort map keys.
    ///
    /// Numbers compare numerically across signedness, strings and chars
    /// lexically; anything else falls back to its flat text.
    pub fn key_order(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (UInt(a), UInt(b)) => a.cmp(b),
            (Int(a), UInt(b)) => cmp_signed_unsigned(*a, *b),
            (UInt(a), Int(b)) => cmp_signed_unsigned(*b, *a).reverse(),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Char(a), Char(b)) => a.cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

fn cmp_signed_unsigned(a: i128, b: u128) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u128).cmp(&b)
    }
}

/// Flat, single-line rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bytes(bytes) => {
                f.write_str("b\"")?;
                for b in bytes {
                    for c in std::ascii::escape_default(*b) {
                        f.write_char(c as char)?;
                    }
                }
                f.write_char('"')
            }
            Value::Named(name) => f.write_str(name),
            Value::TupleStruct { name, fields } => {
                f.write_str(name)?;
                write_list(f, "(", ")", fields.iter().map(|v| v as &dyn fmt::Display))
            }
            Value::Struct { name, fields } => {
                if fields.is_empty() {
                    return write!(f, "{} {{}}", name);
                }
                write!(f, "{} {{ ", name)?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str(" }")
            }
            Value::Seq(items) => write_list(f, "[", "]", items.iter().map(|v| v as &dyn fmt::Display)),
            Value::Tuple(items) => {
                write_list(f, "(", "", items.iter().map(|v| v as &dyn fmt::Display))?;
                // A one-element tuple keeps its trailing comma.
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            Value::Map(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_char('}')
            }
            Value::Opaque(text) => f.write_str(text),
        }
    }
}

fn write_list<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    close: &str,
    items: impl Iterator<Item = &'a dyn fmt::Display>,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(close)
}
