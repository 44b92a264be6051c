use anyhow::Result;
use quire_types::schema::{self, SchemaShared};
use quire_types::types::Values;
use std::sync::Arc;

pub const USER_SCHEMA: &str = r#"{
    "name": "User",
    "fields": [
        {"name": "name", "type": "string"},
        {"name": "favorite_number", "type": "int"},
        {"name": "favorite_color", "type": "string"}
    ]
}"#;

pub const ALL_KINDS_SCHEMA: &str = r#"{
    "namespace": "quire.tests",
    "type": "record",
    "name": "AllKinds",
    "doc": "One field of every kind, plain and nullable.",
    "fields": [
        {"name": "s", "type": "string"},
        {"name": "i", "type": "int"},
        {"name": "l", "type": "long"},
        {"name": "b", "type": "boolean"},
        {"name": "f", "type": "float"},
        {"name": "d", "type": "double"},
        {"name": "ns", "type": ["null", "string"]},
        {"name": "ni", "type": ["int", "null"]},
        {"name": "nl", "type": ["null", "long"]},
        {"name": "nb", "type": ["boolean", "null"]},
        {"name": "nf", "type": ["null", "float"]},
        {"name": "nd", "type": ["double", "null"], "default": 0.5}
    ]
}"#;

pub fn user_schema() -> Result<SchemaShared> {
    Ok(Arc::new(schema::parse(USER_SCHEMA)?))
}

pub fn all_kinds_schema() -> Result<SchemaShared> {
    Ok(Arc::new(schema::parse(ALL_KINDS_SCHEMA)?))
}

pub fn joe() -> Values {
    Values::new()
        .with("name", "joe")
        .with("favorite_number", 42)
        .with("favorite_color", "blue")
}
