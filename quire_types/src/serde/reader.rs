use crate::error::DecodeError;
use crate::schema::{Field, FieldType, PrimitiveKind, Schema};
use crate::serde::varint::{self, VarintAccumulator, VarintStep};
use crate::serde::UnionBranch;
use crate::types::{Value, Values};
use num_traits::FromPrimitive;
use std::io::{BufRead, BufReader, ErrorKind, Read};

#[derive(PartialEq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

/// Decodes exactly one record from `bytes`.
///
/// Every schema field is present in the result; a null nullable field is [`Value::Null`].
/// Bytes left over after the record are an error.
pub fn decode(schema: &Schema, bytes: &[u8]) -> Result<Values, DecodeError> {
    let mut rest = bytes;
    let (offset, values) = {
        let mut r = DatumReader::new(&mut rest);
        let values = r.read_values(schema)?;
        (r.offset(), values)
    };
    if !rest.is_empty() {
        return Err(DecodeError::TrailingBytes {
            offset,
            remaining: rest.len(),
        });
    }
    log::trace!("Decoded a {} record from {offset} bytes.", schema.name());
    Ok(values)
}

/// Reads consecutive records, tracking the byte offset for diagnostics.
pub struct DatumReader<R> {
    r: R,
    offset: usize,
}

impl<R> From<R> for DatumReader<BufReader<R>>
where
    R: Read,
{
    fn from(r: R) -> Self {
        Self::new(BufReader::new(r))
    }
}

impl<R: BufRead> DatumReader<R> {
    pub fn new(r: R) -> Self {
        Self { r, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reads the next record, or [`ReadResult::EOF`] if the input ends exactly at a record boundary.
    pub fn read_record(&mut self, schema: &Schema) -> Result<ReadResult<Values>, DecodeError> {
        let remaining = self.r.fill_buf()?.len();
        if remaining == 0 {
            return Ok(ReadResult::EOF);
        }
        if schema.fields().is_empty() {
            // Zero-field records occupy no bytes; anything left cannot belong to one.
            return Err(DecodeError::TrailingBytes {
                offset: self.offset,
                remaining,
            });
        }

        let start = self.offset;
        let values = self.read_values(schema)?;
        Ok(ReadResult::Some(self.offset - start, values))
    }

    pub fn into_records(self, schema: &Schema) -> RecordIterator<'_, R> {
        RecordIterator {
            reader: self,
            schema,
            failed: false,
        }
    }

    fn read_values(&mut self, schema: &Schema) -> Result<Values, DecodeError> {
        let mut values = Values::new();
        for field in schema.fields() {
            let value = self.read_field(field)?;
            values.insert(field.name.clone(), value);
        }
        Ok(values)
    }

    fn read_field(&mut self, field: &Field) -> Result<Value, DecodeError> {
        match field.field_type {
            FieldType::Primitive(prim) => self.read_primitive(field, prim),
            FieldType::Nullable(prim) => {
                let offset = self.offset;
                let index = self.read_long(field)?;
                match UnionBranch::from_i64(index) {
                    Some(UnionBranch::Null) => Ok(Value::Null),
                    Some(UnionBranch::Present) => self.read_primitive(field, prim),
                    None => Err(DecodeError::InvalidUnionIndex {
                        field: field.name.clone(),
                        offset,
                        index,
                    }),
                }
            }
        }
    }

    fn read_primitive(&mut self, field: &Field, prim: PrimitiveKind) -> Result<Value, DecodeError> {
        let value = match prim {
            PrimitiveKind::String => Value::String(self.read_string(field)?),
            PrimitiveKind::Int => Value::Int(self.read_int(field)?),
            PrimitiveKind::Long => Value::Long(self.read_long(field)?),
            PrimitiveKind::Boolean => {
                let offset = self.offset;
                let [byte] = self.read_array::<1>(field)?;
                match byte {
                    0 => Value::Boolean(false),
                    1 => Value::Boolean(true),
                    _ => {
                        return Err(DecodeError::InvalidBoolean {
                            field: field.name.clone(),
                            offset,
                            byte,
                        })
                    }
                }
            }
            PrimitiveKind::Float => Value::Float(f32::from_le_bytes(self.read_array(field)?)),
            PrimitiveKind::Double => Value::Double(f64::from_le_bytes(self.read_array(field)?)),
        };
        Ok(value)
    }

    fn read_string(&mut self, field: &Field) -> Result<String, DecodeError> {
        let len_offset = self.offset;
        let len = self.read_long(field)?;
        let len = u64::try_from(len).map_err(|_| DecodeError::NegativeLength {
            field: field.name.clone(),
            offset: len_offset,
            len,
        })?;

        // No up-front allocation of an untrusted length.
        let body_offset = self.offset;
        let mut body = vec![];
        let r_len = (&mut self.r).take(len).read_to_end(&mut body)?;
        self.offset += r_len;
        if (r_len as u64) < len {
            return Err(self.truncated(field));
        }

        String::from_utf8(body).map_err(|_| DecodeError::InvalidUtf8 {
            field: field.name.clone(),
            offset: body_offset,
        })
    }

    fn read_int(&mut self, field: &Field) -> Result<i32, DecodeError> {
        let offset = self.offset;
        let z = self.read_varint(field, varint::MAX_INT_VARINT_LEN)?;
        i32::try_from(varint::zigzag_decode(z)).map_err(|_| DecodeError::InvalidVarint {
            field: field.name.clone(),
            offset,
        })
    }

    fn read_long(&mut self, field: &Field) -> Result<i64, DecodeError> {
        let z = self.read_varint(field, varint::MAX_LONG_VARINT_LEN)?;
        Ok(varint::zigzag_decode(z))
    }

    fn read_varint(&mut self, field: &Field, max_len: usize) -> Result<u64, DecodeError> {
        let offset = self.offset;
        let mut acc = VarintAccumulator::new(max_len);
        loop {
            let [byte] = self.read_array::<1>(field)?;
            match acc.push(byte) {
                Ok(VarintStep::More) => continue,
                Ok(VarintStep::Done(z)) => return Ok(z),
                Err(_) => {
                    return Err(DecodeError::InvalidVarint {
                        field: field.name.clone(),
                        offset,
                    })
                }
            }
        }
    }

    fn read_array<const LEN: usize>(&mut self, field: &Field) -> Result<[u8; LEN], DecodeError> {
        let mut buf = [0u8; LEN];
        let mut filled = 0;
        while filled < LEN {
            match self.r.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.offset += filled;
                    return Err(self.truncated(field));
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecodeError::Io(e)),
            }
        }
        self.offset += LEN;
        Ok(buf)
    }

    fn truncated(&self, field: &Field) -> DecodeError {
        DecodeError::Truncated {
            field: field.name.clone(),
            offset: self.offset,
        }
    }
}

/// Yields records until a clean end of input. Stops after the first error.
pub struct RecordIterator<'s, R> {
    reader: DatumReader<R>,
    schema: &'s Schema,
    failed: bool,
}

impl<'s, R: BufRead> Iterator for RecordIterator<'s, R> {
    type Item = Result<Values, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.reader.read_record(self.schema) {
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
            Ok(ReadResult::EOF) => None,
            Ok(ReadResult::Some(_r_len, values)) => Some(Ok(values)),
        }
    }
}
