use crate::error::SchemaError;
use crate::schema::{Field, FieldType, PrimitiveKind, Schema};
use crate::serde::json;
use serde_json::{Map, Value as Json};

const RECORD_TYPE: &str = "record";
const NULL_TOKEN: &str = "null";

/// Parses a record schema from its JSON text.
///
/// Parsing is structural only: the result says nothing about any data yet.
pub fn parse(text: &str) -> Result<Schema, SchemaError> {
    let root: Json =
        serde_json::from_str(text).map_err(|e| SchemaError::Malformed(e.to_string()))?;
    let schema = parse_record(&root)?;
    log::debug!(
        "Parsed schema {} with {} field(s).",
        schema.full_name(),
        schema.fields().len()
    );
    Ok(schema)
}

fn parse_record(root: &Json) -> Result<Schema, SchemaError> {
    let context = "record schema";
    let obj = as_object(root, context)?;

    /* type */
    if let Some(typ) = obj.get("type") {
        match typ {
            Json::String(s) if s == RECORD_TYPE => {}
            Json::String(s) => return Err(SchemaError::NotARecord(s.clone())),
            _ => return Err(SchemaError::NotARecord(typ.to_string())),
        }
    }

    /* name, namespace, doc */
    let name = required_str(obj, context, "name")?;
    let namespace = optional_str(obj, context, "namespace")?;
    let doc = optional_str(obj, context, "doc")?;

    /* fields */
    let fields = match obj.get("fields") {
        None => {
            return Err(SchemaError::MissingKey {
                context: context.into(),
                key: "fields",
            })
        }
        Some(Json::Array(fields)) => fields,
        Some(_) => {
            return Err(SchemaError::WrongKeyType {
                context: context.into(),
                key: "fields",
                expected: "an array",
            })
        }
    };
    let fields = fields
        .iter()
        .enumerate()
        .map(|(i, field)| parse_field(i, field))
        .collect::<Result<Vec<_>, _>>()?;

    Schema::new(namespace, name, doc, fields)
}

fn parse_field(i: usize, field: &Json) -> Result<Field, SchemaError> {
    let context = format!("field #{i}");
    let obj = as_object(field, &context)?;

    let name = required_str(obj, &context, "name")?;
    let doc = optional_str(obj, &context, "doc")?;
    let field_type = match obj.get("type") {
        None => {
            return Err(SchemaError::MissingKey {
                context,
                key: "type",
            })
        }
        Some(typ) => parse_field_type(&name, typ)?,
    };

    let mut parsed = Field::new(name, field_type);
    parsed.doc = doc;

    if let Some(default) = obj.get("default") {
        let default_val = json::value_from_json(field_type, default).ok_or_else(|| {
            SchemaError::IncompatibleDefault {
                field: parsed.name.clone(),
                expected: field_type,
                found: default.to_string(),
            }
        })?;
        parsed.default = Some(default_val);
    }

    Ok(parsed)
}

/// `"int"`, `{"type": "int"}`, `["int", "null"]` or `["null", "int"]`.
fn parse_field_type(field: &str, typ: &Json) -> Result<FieldType, SchemaError> {
    let unsupported = || SchemaError::UnsupportedType {
        field: field.into(),
        found: typ.to_string(),
    };

    match typ {
        Json::String(token) => primitive(token)
            .map(FieldType::Primitive)
            .ok_or_else(unsupported),
        Json::Object(obj) => match obj.get("type") {
            Some(Json::String(token)) => primitive(token)
                .map(FieldType::Primitive)
                .ok_or_else(unsupported),
            _ => Err(unsupported()),
        },
        Json::Array(branches) => match &branches[..] {
            [Json::String(a), Json::String(b)] => {
                let prim = match (a.as_str(), b.as_str()) {
                    (NULL_TOKEN, other) | (other, NULL_TOKEN) => primitive(other),
                    _ => None,
                };
                prim.map(FieldType::Nullable).ok_or_else(unsupported)
            }
            _ => Err(unsupported()),
        },
        _ => Err(unsupported()),
    }
}

fn primitive(token: &str) -> Option<PrimitiveKind> {
    PrimitiveKind::from_token(token)
}

fn as_object<'a>(json: &'a Json, context: &str) -> Result<&'a Map<String, Json>, SchemaError> {
    json.as_object().ok_or_else(|| SchemaError::NotAnObject {
        context: context.into(),
    })
}

fn required_str(
    obj: &Map<String, Json>,
    context: &str,
    key: &'static str,
) -> Result<String, SchemaError> {
    optional_str(obj, context, key)?.ok_or_else(|| SchemaError::MissingKey {
        context: context.into(),
        key,
    })
}

fn optional_str(
    obj: &Map<String, Json>,
    context: &str,
    key: &'static str,
) -> Result<Option<String>, SchemaError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Json::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::WrongKeyType {
            context: context.into(),
            key,
            expected: "a string",
        }),
    }
}
