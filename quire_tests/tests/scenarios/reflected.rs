use anyhow::Result;
use quire_records::reflect;
use quire_records::{reflect_record, BindError, GenericRecord};
use std::sync::Arc;

#[derive(PartialEq, Default, Debug)]
struct DifferentUser {
    name: String,
    favorite_number: i32,
    favorite_color: String,
}

reflect_record!(DifferentUser {
    name: "DifferentUser",
    members: {
        name: String,
        favorite_number: i32 => "favoriteNumber",
        favorite_color: String => "favoriteColor",
    },
});

/// Same struct with a nickname member the schema never mentions.
#[derive(PartialEq, Default, Debug)]
struct NicknamedUser {
    name: String,
    favorite_number: i32,
    favorite_color: String,
    nickname: Option<String>,
}

reflect_record!(NicknamedUser {
    name: "NicknamedUser",
    members: {
        name: String,
        favorite_number: i32 => "favoriteNumber",
        favorite_color: String => "favoriteColor",
        nickname: Option<String>,
    },
});

fn joe() -> DifferentUser {
    DifferentUser {
        name: String::from("joe"),
        favorite_number: 42,
        favorite_color: String::from("blue"),
    }
}

pub fn different_user() -> Result<()> {
    let schema = reflect::derive_schema::<DifferentUser>()?;

    let bytes = reflect::write(&schema, &joe())?;
    let act = reflect::bind::<DifferentUser>(&schema, &bytes)?;
    assert_eq!(act, joe());

    // The derived schema prints and re-parses to itself.
    let reparsed = quire_types::schema::parse(&schema.to_json(false))?;
    assert_eq!(reparsed, schema);

    Ok(())
}

pub fn generic_writer_reflect_reader() -> Result<()> {
    let schema = Arc::new(reflect::derive_schema::<DifferentUser>()?);

    let record = GenericRecord::builder(schema.clone())
        .set("name", "joe")?
        .set("favoriteNumber", 42)?
        .set("favoriteColor", "blue")?
        .build()?;
    let bytes = record.to_binary()?;

    let nicknamed = reflect::bind::<NicknamedUser>(&schema, &bytes)?;
    assert_eq!(nicknamed.name, "joe");
    assert_eq!(nicknamed.favorite_number, 42);
    assert_eq!(nicknamed.favorite_color, "blue");
    assert_eq!(nicknamed.nickname, None);

    // The reverse: a schema field with no member.
    let wider = Arc::new(reflect::derive_schema::<NicknamedUser>()?);
    let bytes = reflect::write(&wider, &nicknamed)?;
    assert!(matches!(
        reflect::bind::<DifferentUser>(&wider, &bytes),
        Err(BindError::NoSuchMember { field, .. }) if field == "nickname"
    ));

    let back = reflect::to_record(schema, &joe())?;
    assert_eq!(back, record);

    Ok(())
}
