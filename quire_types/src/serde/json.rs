//! One JSON object per record.
//!
//! Keys follow schema field order on output and are matched by exact name on
//! input. A nullable field is written as `null` or as its bare value; the
//! tagged `{"int": 42}` union form is neither written nor accepted.
//! Keys the schema does not declare are ignored on input.

use crate::error::{DecodeError, EncodeError};
use crate::schema::{FieldType, PrimitiveKind, Schema};
use crate::serde;
use crate::types::{Value, Values};
use serde_json::{Map, Number, Value as Json};


#[derive(Clone, Copy, Default, Debug)]
pub struct JsonConfig {
    /// Indented multi-line output instead of a single line.
    pub pretty: bool,
}

pub fn encode(schema: &Schema, values: &Values) -> Result<String, EncodeError> {
    encode_with(schema, values, &JsonConfig::default())
}

pub fn encode_with(
    schema: &Schema,
    values: &Values,
    config: &JsonConfig,
) -> Result<String, EncodeError> {
    let json = to_json(schema, values)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}

/// The record as a JSON object, before rendering to text.
pub fn to_json(schema: &Schema, values: &Values) -> Result<Json, EncodeError> {
    let mut obj = Map::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let value = serde::field_value(field, values)?;
        let json = value_to_json(value).ok_or_else(|| EncodeError::NonFiniteFloat {
            field: field.name.clone(),
        })?;
        obj.insert(field.name.clone(), json);
    }
    Ok(Json::Object(obj))
}

pub fn decode(schema: &Schema, text: &str) -> Result<Values, DecodeError> {
    let json: Json =
        serde_json::from_str(text).map_err(|e| DecodeError::MalformedJson(e.to_string()))?;
    from_json(schema, &json)
}

pub fn from_json(schema: &Schema, json: &Json) -> Result<Values, DecodeError> {
    let obj = json.as_object().ok_or(DecodeError::NotAnObject)?;

    let mut values = Values::new();
    for field in schema.fields() {
        let value = match obj.get(&field.name) {
            Some(json) => value_from_json(field.field_type, json).ok_or_else(|| {
                DecodeError::JsonTypeMismatch {
                    field: field.name.clone(),
                    expected: field.field_type,
                    found: describe(json),
                }
            })?,
            None => match (field.default.as_ref(), field.field_type) {
                (Some(default), _) => default.clone(),
                (None, FieldType::Nullable(_)) => Value::Null,
                (None, FieldType::Primitive(_)) => {
                    return Err(DecodeError::MissingField {
                        field: field.name.clone(),
                    })
                }
            },
        };
        values.insert(field.name.clone(), value);
    }

    for key in obj.keys().filter(|key| schema.field(key).is_none()) {
        log::debug!("Ignoring JSON key {key:?} not declared by {}.", schema.full_name());
    }

    Ok(values)
}

/// `None` for non-finite floats, which JSON cannot represent.
pub(crate) fn value_to_json(value: &Value) -> Option<Json> {
    let json = match value {
        Value::String(s) => Json::from(s.as_str()),
        Value::Int(i) => Json::from(*i),
        Value::Long(l) => Json::from(*l),
        Value::Boolean(b) => Json::from(*b),
        Value::Float(f) => Json::Number(Number::from_f64(*f as f64)?),
        Value::Double(d) => Json::Number(Number::from_f64(*d)?),
        Value::Null => Json::Null,
    };
    Some(json)
}

/// `None` if `json` cannot hold a value of `field_type`.
///
/// Integers must be JSON integers within range. Floats accept any JSON number
/// that stays finite at the target width.
pub(crate) fn value_from_json(field_type: FieldType, json: &Json) -> Option<Value> {
    if json.is_null() {
        return field_type.is_nullable().then_some(Value::Null);
    }
    match field_type.kind() {
        PrimitiveKind::String => json.as_str().map(Value::from),
        PrimitiveKind::Int => json
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .map(Value::Int),
        PrimitiveKind::Long => json.as_i64().map(Value::Long),
        PrimitiveKind::Boolean => json.as_bool().map(Value::Boolean),
        PrimitiveKind::Float => json
            .as_f64()
            .map(|f| f as f32)
            .filter(|f| f.is_finite())
            .map(Value::Float),
        PrimitiveKind::Double => json.as_f64().map(Value::Double),
    }
}

fn describe(json: &Json) -> String {
    match json {
        Json::Array(_) => String::from("an array"),
        Json::Object(_) => String::from("an object"),
        scalar => scalar.to_string(),
    }
}
