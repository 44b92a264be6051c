use super::helpers::{joe, user_schema};
use anyhow::Result;
use quire_records::GenericRecord;
use quire_types::error::{DecodeError, FieldError};
use quire_types::schema;
use quire_types::serde::{self, json};

pub fn truncated_binary() -> Result<()> {
    let schema = user_schema()?;
    let bytes = serde::encode(&schema, &joe())?;

    for cut in 0..bytes.len() {
        assert!(matches!(
            serde::decode(&schema, &bytes[..cut]),
            Err(DecodeError::Truncated { .. })
        ));
        assert!(GenericRecord::from_binary(schema.clone(), &bytes[..cut]).is_err());
    }

    Ok(())
}

pub fn missing_required_field() -> Result<()> {
    let schema = user_schema()?;

    let res = GenericRecord::builder(schema.clone())
        .set("name", "joe")?
        .set("favorite_color", "blue")?
        .build();
    match res {
        Err(FieldError::MissingField { field }) => assert_eq!(field, "favorite_number"),
        other => panic!("{other:?}"),
    }

    match json::decode(&schema, r#"{"name": "joe", "favorite_color": "blue"}"#) {
        Err(DecodeError::MissingField { field }) => assert_eq!(field, "favorite_number"),
        other => panic!("{other:?}"),
    }

    Ok(())
}

/// Bytes written with one schema and read with another are never silently accepted.
pub fn schema_mismatch_on_read() -> Result<()> {
    let schema = user_schema()?;
    let bytes = serde::encode(&schema, &joe())?;

    let shorter = schema::parse(
        r#"{"name": "User", "fields": [
            {"name": "name", "type": "string"},
            {"name": "favorite_number", "type": "int"}
        ]}"#,
    )?;
    assert!(matches!(
        serde::decode(&shorter, &bytes),
        Err(DecodeError::TrailingBytes { .. })
    ));

    let boolean_first = schema::parse(
        r#"{"name": "User", "fields": [{"name": "flag", "type": "boolean"}]}"#,
    )?;
    assert!(matches!(
        serde::decode(&boolean_first, &bytes),
        Err(DecodeError::InvalidBoolean { .. })
    ));

    Ok(())
}
