use super::helpers::{joe, user_schema};
use anyhow::Result;
use quire_records::GenericRecord;
use quire_types::serde::{self, json};

pub fn json_then_binary() -> Result<()> {
    let schema = user_schema()?;

    let text = json::encode(&schema, &joe())?;
    assert_eq!(
        text,
        r#"{"name":"joe","favorite_number":42,"favorite_color":"blue"}"#
    );
    assert_eq!(json::decode(&schema, &text)?, joe());

    let bytes = serde::encode(&schema, &joe())?;
    assert_eq!(serde::decode(&schema, &bytes)?, joe());

    Ok(())
}

pub fn builder_matches_values() -> Result<()> {
    let schema = user_schema()?;

    let record = GenericRecord::builder(schema.clone())
        .set("name", "joe")?
        .set("favorite_number", 42)?
        .set("favorite_color", "blue")?
        .build()?;
    assert_eq!(record.values(), &joe());
    assert_eq!(record.to_binary()?, serde::encode(&schema, &joe())?);

    let from_json = GenericRecord::from_json(schema.clone(), &record.to_json()?)?;
    let from_binary = GenericRecord::from_binary(schema, &record.to_binary()?)?;
    assert_eq!(from_json, record);
    assert_eq!(from_binary, record);

    Ok(())
}
