//! # Binary format
//!
//! A record is its fields' encodings concatenated in schema order.
//! There is no header, no field tag and no embedded schema: the reader must
//! hold the same [`Schema`] the writer used.
//!
//! ```text
//! struct Record {
//!     field_0:    Field,
//!     field_1:    Field,
//!     ...
//! }
//!
//! // FieldType::Primitive
//! struct string {
//!     len:        varint,         // zig-zag, as a long
//!     body:       [u8; len],      // UTF-8
//! }
//! struct int      { body: varint }            // zig-zag, at most 5 bytes
//! struct long     { body: varint }            // zig-zag, at most 10 bytes
//! struct boolean  { body: u8 }                // 0x00 or 0x01
//! struct float    { body: [u8; 4] }           // little-endian
//! struct double   { body: [u8; 8] }           // little-endian
//!
//! // FieldType::Nullable
//! struct Nullable {
//!     union_index:    varint,     // zig-zag; 0 => null, 1 => present
//!     body:           <primitive>,            // only when present
//! }
//! ```
//!
//! A varint stores 7 bits per byte, least significant group first; the high
//! bit of each byte says whether another byte follows.
//!
//! # JSON format
//!
//! See [`json`]. One object per record, keys in schema order, nullable fields
//! as a bare value or `null`.

pub mod json;
mod reader;
mod varint;
mod writer;

pub use reader::*;
pub use writer::*;

use crate::error::EncodeError;
use crate::schema::Field;
use crate::types::{Value, Values};
use num_derive::FromPrimitive;

/// The union index written before a nullable field's body.
///
/// The index does not follow the branch order written in the schema text:
/// `["int", "null"]` and `["null", "int"]` share one wire form.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, Debug)]
pub enum UnionBranch {
    Null = 0,
    Present = 1,
}

static NULL: Value = Value::Null;

/// Looks up and type-checks the value an encoder should write for `field`.
///
/// An absent nullable field is written as null.
pub(crate) fn field_value<'v>(field: &Field, values: &'v Values) -> Result<&'v Value, EncodeError> {
    let value = match values.get(&field.name) {
        Some(value) => value,
        None if field.field_type.is_nullable() => &NULL,
        None => {
            return Err(EncodeError::MissingField {
                field: field.name.clone(),
            })
        }
    };
    if !value.conforms_to(field.field_type) {
        return Err(type_mismatch(field, value));
    }
    Ok(value)
}

pub(crate) fn type_mismatch(field: &Field, value: &Value) -> EncodeError {
    EncodeError::TypeMismatch {
        field: field.name.clone(),
        expected: field.field_type,
        found: value.kind(),
    }
}
