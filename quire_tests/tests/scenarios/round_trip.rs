use super::helpers::all_kinds_schema;
use anyhow::Result;
use itertools::Itertools;
use quire_types::schema;
use quire_types::serde::{self, json};
use quire_types::types::{Value, Values};

fn present() -> Vec<(&'static str, Value)> {
    vec![
        ("ns", Value::from("ünïcode ✓")),
        ("ni", Value::Int(-64)),
        ("nl", Value::Long(1 << 62)),
        ("nb", Value::Boolean(true)),
        ("nf", Value::Float(6.5)),
        ("nd", Value::Double(-0.1)),
    ]
}

fn required() -> Values {
    Values::new()
        .with("s", "")
        .with("i", i32::MAX)
        .with("l", -1i64)
        .with("b", false)
        .with("f", f32::MIN_POSITIVE)
        .with("d", f64::MAX)
}

pub fn every_kind_both_codecs() -> Result<()> {
    let schema = all_kinds_schema()?;
    let present = present();

    for nulls in present.iter().map(|(name, _)| *name).powerset() {
        let mut values = required();
        for (name, value) in present.iter() {
            let value = match nulls.contains(name) {
                true => Value::Null,
                false => value.clone(),
            };
            values.insert(String::from(*name), value);
        }

        let bytes = serde::encode(&schema, &values)?;
        assert_eq!(serde::decode(&schema, &bytes)?, values, "nulls {nulls:?}");

        let text = json::encode(&schema, &values)?;
        assert_eq!(json::decode(&schema, &text)?, values, "nulls {nulls:?}");
    }

    Ok(())
}

pub fn schema_text() -> Result<()> {
    let schema = all_kinds_schema()?;

    for pretty in [false, true] {
        let text = schema.to_json(pretty);
        assert_eq!(schema::parse(&text)?, *schema);
    }
    assert_eq!(schema.full_name(), "quire.tests.AllKinds");
    assert_eq!(
        schema.field("nd").and_then(|field| field.default.clone()),
        Some(Value::Double(0.5))
    );

    Ok(())
}
