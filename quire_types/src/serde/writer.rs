use crate::error::EncodeError;
use crate::schema::{Field, FieldType, Schema};
use crate::serde::{self, varint, UnionBranch};
use crate::types::{Value, Values};
use derive_more::{Deref, From};
use std::io::Write;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

/// Encodes one record into its binary form.
pub fn encode(schema: &Schema, values: &Values) -> Result<Vec<u8>, EncodeError> {
    let mut buf = vec![];
    for field in schema.fields() {
        let value = serde::field_value(field, values)?;
        encode_field(&mut buf, field, value)?;
    }
    log::trace!(
        "Encoded a {} record into {} bytes.",
        schema.name(),
        buf.len()
    );
    Ok(buf)
}

fn encode_field(buf: &mut Vec<u8>, field: &Field, value: &Value) -> Result<(), EncodeError> {
    match field.field_type {
        FieldType::Primitive(_) => encode_primitive(buf, field, value),
        FieldType::Nullable(_) => match value {
            Value::Null => {
                varint::write_long(buf, UnionBranch::Null as i64);
                Ok(())
            }
            _ => {
                varint::write_long(buf, UnionBranch::Present as i64);
                encode_primitive(buf, field, value)
            }
        },
    }
}

fn encode_primitive(buf: &mut Vec<u8>, field: &Field, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::String(s) => {
            let len = i64::try_from(s.len()).map_err(|_| EncodeError::LengthOverflow {
                field: field.name.clone(),
                len: s.len(),
            })?;
            varint::write_long(buf, len);
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Int(i) => varint::write_long(buf, *i as i64),
        Value::Long(l) => varint::write_long(buf, *l),
        Value::Boolean(b) => buf.push(*b as u8),
        Value::Float(f) => buf.extend_from_slice(&f.to_le_bytes()),
        Value::Double(d) => buf.extend_from_slice(&d.to_le_bytes()),
        Value::Null => return Err(serde::type_mismatch(field, value)),
    }
    Ok(())
}

/// Writes consecutive records to `W`.
///
/// Each record is encoded in full before any of it reaches `W`, so a record
/// that fails to encode leaves `W` untouched.
#[derive(From)]
pub struct DatumWriter<W: Write> {
    w: W,
}

impl<W: Write> DatumWriter<W> {
    pub fn write_record(&mut self, schema: &Schema, values: &Values) -> Result<WriteLen, EncodeError> {
        let buf = encode(schema, values)?;
        self.w.write_all(&buf)?;
        Ok(WriteLen(buf.len()))
    }

    pub fn flush(&mut self) -> Result<(), EncodeError> {
        self.w.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}
