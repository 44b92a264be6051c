use crate::reflect::Member;
use itertools::Itertools;
use quire_types::error::{DecodeError, EncodeError, FieldError};
use quire_types::schema::{Field, Schema, SchemaShared};
use quire_types::serde::{self, json, json::JsonConfig};
use quire_types::types::{Value, Values};
use serde_json::Value as Json;
use std::fmt;


/// A record held as a schema-bound field-name -> value map.
///
/// Every schema field has a conforming value, and no other names are present.
/// A record is created complete, by [`GenericRecordBuilder::build`],
/// [`GenericRecord::from_values`] or one of the decoders, and never changes after.
#[derive(PartialEq, Clone, Debug)]
pub struct GenericRecord {
    schema: SchemaShared,
    values: Values,
}

/// Collects field values; [`GenericRecordBuilder::build`] checks completeness.
///
/// Each [`GenericRecordBuilder::set`] is checked against the schema immediately.
#[derive(Clone, Debug)]
pub struct GenericRecordBuilder {
    schema: SchemaShared,
    values: Values,
}

impl GenericRecord {
    pub fn builder<S: Into<SchemaShared>>(schema: S) -> GenericRecordBuilder {
        GenericRecordBuilder {
            schema: schema.into(),
            values: Values::new(),
        }
    }

    /// Validates `values` the same way the builder would, then fills unset fields.
    pub fn from_values<S: Into<SchemaShared>>(schema: S, values: Values) -> Result<Self, FieldError> {
        let mut builder = Self::builder(schema);
        for (name, value) in values {
            builder = builder.set(&name, value)?;
        }
        builder.build()
    }

    pub fn schema(&self) -> &SchemaShared {
        &self.schema
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The value of `name`, converted to a Rust type.
    pub fn get_as<M: Member>(&self, name: &str) -> Result<M, FieldError> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| unknown_field(&self.schema, name))?;
        M::from_value(value.clone()).ok_or_else(|| FieldError::IncompatibleValue {
            field: String::from(name),
            expected: M::FIELD_TYPE,
            found: value.kind(),
        })
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn into_values(self) -> Values {
        self.values
    }

    /* Binary. */

    pub fn to_binary(&self) -> Result<Vec<u8>, EncodeError> {
        serde::encode(&self.schema, &self.values)
    }

    pub fn from_binary<S: Into<SchemaShared>>(schema: S, bytes: &[u8]) -> Result<Self, DecodeError> {
        let schema = schema.into();
        let values = serde::decode(&schema, bytes)?;
        Ok(Self { schema, values })
    }

    /* JSON. */

    pub fn to_json(&self) -> Result<String, EncodeError> {
        json::encode(&self.schema, &self.values)
    }

    pub fn to_json_with(&self, config: &JsonConfig) -> Result<String, EncodeError> {
        json::encode_with(&self.schema, &self.values, config)
    }

    pub fn from_json<S: Into<SchemaShared>>(schema: S, text: &str) -> Result<Self, DecodeError> {
        let schema = schema.into();
        let values = json::decode(&schema, text)?;
        Ok(Self { schema, values })
    }
}

/// `{"name": "joe", "favorite_number": 42}`, fields in schema order.
///
/// Unlike [`GenericRecord::to_json`], this never fails: non-finite floats print as `NaN` / `inf`.
/// Every schema field has a value; records are only ever created complete.
impl fmt::Display for GenericRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.schema.fields().iter().format_with(", ", |field, f| {
            let value = &self.values[field.name.as_str()];
            f(&format_args!("{}: {}", quote(&field.name), DisplayValue(value)))
        });
        write!(f, "{{{fields}}}")
    }
}

struct DisplayValue<'a>(&'a Value);

impl<'a> fmt::Display for DisplayValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => write!(f, "{}", quote(s)),
            Value::Int(i) => write!(f, "{i}"),
            Value::Long(l) => write!(f, "{l}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Double(x) => write!(f, "{x:?}"),
            Value::Null => write!(f, "null"),
        }
    }
}

/// A JSON string literal, escaped.
fn quote(s: &str) -> Json {
    Json::from(s)
}

impl GenericRecordBuilder {
    /// Fails fast on a name the schema does not declare, or on a non-conforming value.
    /// Setting a field again replaces the earlier value.
    pub fn set<V: Into<Value>>(mut self, name: &str, value: V) -> Result<Self, FieldError> {
        let value = value.into();
        let field = self
            .schema
            .field(name)
            .ok_or_else(|| unknown_field(&self.schema, name))?;
        check_conforms(field, &value)?;
        self.values.insert(String::from(name), value);
        Ok(self)
    }

    /// Unset fields take their schema default, else null if nullable.
    pub fn build(mut self) -> Result<GenericRecord, FieldError> {
        for field in self.schema.fields() {
            if self.values.contains_key(&field.name) {
                continue;
            }
            let value = match (field.default.as_ref(), field.field_type.is_nullable()) {
                (Some(default), _) => default.clone(),
                (None, true) => Value::Null,
                (None, false) => {
                    return Err(FieldError::MissingField {
                        field: field.name.clone(),
                    })
                }
            };
            self.values.insert(field.name.clone(), value);
        }
        Ok(GenericRecord {
            schema: self.schema,
            values: self.values,
        })
    }
}

fn check_conforms(field: &Field, value: &Value) -> Result<(), FieldError> {
    if value.conforms_to(field.field_type) {
        Ok(())
    } else {
        Err(FieldError::IncompatibleValue {
            field: field.name.clone(),
            expected: field.field_type,
            found: value.kind(),
        })
    }
}

fn unknown_field(schema: &Schema, name: &str) -> FieldError {
    FieldError::UnknownField {
        record: schema.full_name(),
        field: String::from(name),
    }
}
