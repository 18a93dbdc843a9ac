//! Value Serializer
//!
//! A `serde::Serializer` that captures any `Serialize` type as a
//! [`Value`] tree for the value formatter.

use crate::domain::value::Value;
use serde::ser::{self, Serialize};
use std::fmt;

/// Newtype-struct name marking preformatted text (see [`Opaque`]).
const OPAQUE_TOKEN: &str = "$dprobe::private::Opaque";

/// Capture `value` as a [`Value`]. Serialization failures become an opaque
/// marker instead of an error.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Value {
    match value.serialize(ValueSerializer) {
        Ok(v) => v,
        Err(err) => Value::Opaque(format!("<unrenderable: {}>", err)),
    }
}

/// Renders a value that has no `Serialize` impl through its `Debug` text.
///
/// ```
/// #[derive(Debug)]
/// struct Handle(u32);
///
/// let h = Handle(7);
/// let line = dprobe::d_line!(dprobe::opaque(&h));
/// assert!(line.to_string().contains("Handle(7)"));
/// ```
#[derive(Clone, Copy)]
pub struct Opaque<T>(pub T);

pub fn opaque<T: fmt::Debug>(value: T) -> Opaque<T> {
    Opaque(value)
}

impl<T: fmt::Debug> Serialize for Opaque<T> {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(OPAQUE_TOKEN, &format!("{:?}", self.0))
    }
}

#[derive(Debug)]
pub struct SerializeError(String);

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SerializeError {}

impl ser::Error for SerializeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        SerializeError(msg.to_string())
    }
}

pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = SerializeError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = SeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = StructBuilder;
    type SerializeStructVariant = StructBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, SerializeError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, SerializeError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, SerializeError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, SerializeError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, SerializeError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, SerializeError> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, SerializeError> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, SerializeError> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, SerializeError> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, SerializeError> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, SerializeError> {
        Ok(Value::UInt(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, SerializeError> {
        // Widening to f64 would print the binary expansion (0.1 -> 0.10000000149011612).
        Ok(Value::Opaque(format!("{:?}", v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, SerializeError> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, SerializeError> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value, SerializeError> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, SerializeError> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, SerializeError> {
        Ok(Value::none())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, SerializeError> {
        Ok(Value::some(value.serialize(ValueSerializer)?))
    }

    fn serialize_unit(self) -> Result<Value, SerializeError> {
        Ok(Value::Unit)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, SerializeError> {
        Ok(Value::Named(name.to_string()))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, SerializeError> {
        Ok(Value::Named(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<Value, SerializeError> {
        let inner = value.serialize(ValueSerializer)?;
        if name == OPAQUE_TOKEN {
            return Ok(match inner {
                Value::Str(text) => Value::Opaque(text),
                other => other,
            });
        }
        Ok(Value::TupleStruct {
            name: name.to_string(),
            fields: vec![inner],
        })
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, SerializeError> {
        Ok(Value::TupleStruct {
            name: variant.to_string(),
            fields: vec![value.serialize(ValueSerializer)?],
        })
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, SerializeError> {
        Ok(SeqBuilder::new(SeqKind::Seq, len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, SerializeError> {
        Ok(SeqBuilder::new(SeqKind::Tuple, len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, SerializeError> {
        Ok(SeqBuilder::new(SeqKind::Named(name), len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, SerializeError> {
        Ok(SeqBuilder::new(SeqKind::Named(variant), len))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, SerializeError> {
        Ok(MapBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<StructBuilder, SerializeError> {
        Ok(StructBuilder {
            name,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<StructBuilder, SerializeError> {
        Ok(StructBuilder {
            name: variant,
            fields: Vec::with_capacity(len),
        })
    }
}

enum SeqKind {
    Seq,
    Tuple,
    Named(&'static str),
}

pub struct SeqBuilder {
    kind: SeqKind,
    items: Vec<Value>,
}

impl SeqBuilder {
    fn new(kind: SeqKind, len: usize) -> Self {
        Self {
            kind,
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        match self.kind {
            SeqKind::Seq => Value::Seq(self.items),
            SeqKind::Tuple => Value::Tuple(self.items),
            SeqKind::Named(name) => Value::TupleStruct {
                name: name.to_string(),
                fields: self.items,
            },
        }
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

pub struct MapBuilder {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), SerializeError> {
        self.pending_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| SerializeError("map value serialized before its key".to_string()))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(mut self) -> Result<Value, SerializeError> {
        // HashMap iteration order is arbitrary; output is always key-ordered.
        self.entries.sort_by(|a, b| a.0.key_order(&b.0));
        Ok(Value::Map(self.entries))
    }
}

pub struct StructBuilder {
    name: &'static str,
    fields: Vec<(String, Value)>,
}

impl StructBuilder {
    fn push<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), SerializeError> {
        self.fields.push((key.to_string(), value.serialize(ValueSerializer)?));
        Ok(())
    }
}

impl ser::SerializeStruct for StructBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializeError> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(Value::Struct {
            name: self.name.to_string(),
            fields: self.fields,
        })
    }
}

impl ser::SerializeStructVariant for StructBuilder {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializeError> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(Value::Struct {
            name: self.name.to_string(),
            fields: self.fields,
        })
    }
}
