use quire_types::error::{DecodeError, EncodeError, FieldError, SchemaError};
use quire_types::schema::FieldType;
use quire_types::types::ValueKind;
use thiserror::Error;

/// Mismatch between a schema and a reflected type's member table.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("{record} has no member named {field:?}")]
    NoSuchMember { record: &'static str, field: String },

    #[error("member {field:?} is {member_type} and cannot take a field of type {field_type}")]
    IncompatibleMember {
        field: String,
        member_type: FieldType,
        field_type: FieldType,
    },

    #[error("member {field:?} rejected a {found} value")]
    RejectedValue { field: String, found: ValueKind },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Any failure from this crate or from [`quire_types`].
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Bind(#[from] BindError),
}
