use anyhow::Result;
use quire_records::specific::{SchemaCell, SpecificRecord};
use quire_records::{Error, GenericRecord};
use quire_types::error::{DecodeError, SchemaError};
use quire_types::schema::SchemaShared;

static USER: SchemaCell = SchemaCell::new(
    r#"{
        "namespace": "example.avro",
        "type": "record",
        "name": "User",
        "fields": [
            {"name": "name", "type": "string"},
            {"name": "favorite_number", "type": ["int", "null"]},
            {"name": "favorite_color", "type": ["string", "null"], "default": "green"}
        ]
    }"#,
);

#[derive(PartialEq, Debug)]
struct User {
    name: String,
    favorite_number: Option<i32>,
    favorite_color: Option<String>,
}

impl SpecificRecord for User {
    fn schema() -> Result<SchemaShared, SchemaError> {
        USER.get()
    }

    fn to_record(&self) -> Result<GenericRecord, Error> {
        let record = GenericRecord::builder(Self::schema()?)
            .set("name", self.name.as_str())?
            .set("favorite_number", self.favorite_number)?
            .set("favorite_color", self.favorite_color.clone())?
            .build()?;
        Ok(record)
    }

    fn from_record(record: GenericRecord) -> Result<Self, Error> {
        Ok(Self {
            name: record.get_as("name")?,
            favorite_number: record.get_as("favorite_number")?,
            favorite_color: record.get_as("favorite_color")?,
        })
    }
}

pub fn user_from_both_codecs() -> Result<()> {
    let users = [
        r#"{"name": "Alyssa", "favorite_number": 256, "favorite_color": null}"#,
        r#"{"name": "Ben", "favorite_number": 7, "favorite_color": "red"}"#,
        r#"{"name": "Charlie", "favorite_number": null}"#,
    ]
    .into_iter()
    .map(User::read_json)
    .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(users[0].favorite_color, None);
    assert_eq!(users[1].favorite_number, Some(7));
    // An absent key takes the schema default.
    assert_eq!(users[2].favorite_color.as_deref(), Some("green"));

    for user in users.iter() {
        let bytes = user.write_binary()?;
        assert_eq!(&User::read_binary(&bytes)?, user);
        let text = user.write_json()?;
        assert_eq!(&User::read_json(&text)?, user);
    }

    assert!(matches!(
        User::read_json(r#"{"name": 5}"#),
        Err(Error::Decode(DecodeError::JsonTypeMismatch { .. }))
    ));

    Ok(())
}
