use super::helpers::all_kinds_schema;
use anyhow::Result;
use quire_records::GenericRecord;
use quire_types::types::Value;
use rand::seq::SliceRandom;

pub fn builder_order_never_reaches_output() -> Result<()> {
    let schema = all_kinds_schema()?;
    let mut pairs: Vec<(&str, Value)> = vec![
        ("s", Value::from("s")),
        ("i", Value::Int(1)),
        ("l", Value::Long(2)),
        ("b", Value::Boolean(true)),
        ("f", Value::Float(3.0)),
        ("d", Value::Double(4.0)),
        ("ns", Value::Null),
        ("ni", Value::Int(5)),
        ("nl", Value::Null),
        ("nb", Value::Boolean(false)),
        ("nf", Value::Float(-6.0)),
        ("nd", Value::Null),
    ];

    let mut exp: Option<(Vec<u8>, String)> = None;
    let mut rand_rng = rand::thread_rng();
    for _ in 0..20 {
        pairs.shuffle(&mut rand_rng);
        let mut builder = GenericRecord::builder(schema.clone());
        for (name, value) in pairs.iter() {
            builder = builder.set(name, value.clone())?;
        }
        let record = builder.build()?;

        let act = (record.to_binary()?, record.to_json()?);
        match exp.as_ref() {
            None => exp = Some(act),
            Some(exp) => assert_eq!(&act, exp),
        }
    }

    Ok(())
}
