//! Rust types that carry their own schema.

use crate::{Error, GenericRecord};
use quire_types::error::SchemaError;
use quire_types::schema::{self, SchemaShared};
use std::sync::{Arc, OnceLock};


pub trait SpecificRecord: Sized {
    fn schema() -> Result<SchemaShared, SchemaError>;

    fn to_record(&self) -> Result<GenericRecord, Error>;

    fn from_record(record: GenericRecord) -> Result<Self, Error>;

    fn write_binary(&self) -> Result<Vec<u8>, Error> {
        let bytes = self.to_record()?.to_binary()?;
        Ok(bytes)
    }

    fn write_json(&self) -> Result<String, Error> {
        let text = self.to_record()?.to_json()?;
        Ok(text)
    }

    fn read_binary(bytes: &[u8]) -> Result<Self, Error> {
        let record = GenericRecord::from_binary(Self::schema()?, bytes)?;
        Self::from_record(record)
    }

    fn read_json(text: &str) -> Result<Self, Error> {
        let record = GenericRecord::from_json(Self::schema()?, text)?;
        Self::from_record(record)
    }
}

/// Schema text parsed on first use, then shared.
///
/// ```
/// use quire_records::specific::SchemaCell;
///
/// static USER: SchemaCell = SchemaCell::new(
///     r#"{"name": "User", "fields": [{"name": "name", "type": "string"}]}"#,
/// );
/// assert_eq!(USER.get().unwrap().name(), "User");
/// ```
pub struct SchemaCell {
    text: &'static str,
    cell: OnceLock<SchemaShared>,
}

impl SchemaCell {
    pub const fn new(text: &'static str) -> Self {
        Self {
            text,
            cell: OnceLock::new(),
        }
    }

    /// A parse failure is not cached; every call retries and fails the same way.
    pub fn get(&self) -> Result<SchemaShared, SchemaError> {
        if let Some(schema) = self.cell.get() {
            return Ok(Arc::clone(schema));
        }
        let parsed = Arc::new(schema::parse(self.text)?);
        Ok(Arc::clone(self.cell.get_or_init(|| parsed)))
    }
}
