use anyhow::Result;
use quire_records::GenericRecord;
use quire_types::schema;
use quire_types::types::Value;
use std::sync::Arc;

pub fn nullable_int_both_codecs() -> Result<()> {
    // Branch order in the schema text does not change anything below.
    for union in [r#"["int", "null"]"#, r#"["null", "int"]"#] {
        let text = format!(r#"{{"name": "Maybe", "fields": [{{"name": "n", "type": {union}}}]}}"#);
        let schema = Arc::new(schema::parse(&text)?);

        for value in [Value::Null, Value::Int(0), Value::Int(-12345)] {
            let record = GenericRecord::builder(schema.clone())
                .set("n", value.clone())?
                .build()?;

            let bytes = record.to_binary()?;
            let exp_disc = match value {
                Value::Null => 0x00,
                _ => 0x02,
            };
            assert_eq!(bytes[0], exp_disc);
            let from_binary = GenericRecord::from_binary(schema.clone(), &bytes)?;
            assert_eq!(from_binary.get("n"), Some(&value));

            let json = record.to_json()?;
            let from_json = GenericRecord::from_json(schema.clone(), &json)?;
            assert_eq!(from_json.get("n"), Some(&value));
        }

        let json = GenericRecord::builder(schema.clone()).build()?.to_json()?;
        assert_eq!(json, r#"{"n":null}"#);
    }

    Ok(())
}
