use crate::schema::FieldType;
use crate::types::ValueKind;
use std::io;
use thiserror::Error;

/// Malformed or unsupported schema text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema is not well-formed JSON: {0}")]
    Malformed(String),

    #[error("{context} must be a JSON object")]
    NotAnObject { context: String },

    #[error("{context} is missing required key {key:?}")]
    MissingKey { context: String, key: &'static str },

    #[error("{context}: key {key:?} must be {expected}")]
    WrongKeyType {
        context: String,
        key: &'static str,
        expected: &'static str,
    },

    #[error("record schema has \"type\" {0:?}; only \"record\" is supported")]
    NotARecord(String),

    #[error("field {field:?} has unsupported type {found}")]
    UnsupportedType { field: String, found: String },

    #[error("duplicate field name {0:?}")]
    DuplicateField(String),

    #[error("invalid name {0:?}")]
    InvalidName(String),

    #[error("field {field:?}: default {found} does not conform to {expected}")]
    IncompatibleDefault {
        field: String,
        expected: FieldType,
        found: String,
    },
}

/// Value / schema mismatch found while encoding.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("required field {field:?} has no value")]
    MissingField { field: String },

    #[error("field {field:?} expects {expected} but holds {found}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: ValueKind,
    },

    #[error("field {field:?} holds a non-finite float, which JSON cannot represent")]
    NonFiniteFloat { field: String },

    #[error("field {field:?}: string of {len} bytes is too long to encode")]
    LengthOverflow { field: String, len: usize },

    #[error("writer failed: {0}")]
    Io(#[from] io::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed input, or input that does not conform to the schema, found while decoding.
///
/// Binary variants carry the byte offset at which the offending item began.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("field {field:?}: input truncated at offset {offset}")]
    Truncated { field: String, offset: usize },

    #[error("field {field:?}: invalid variable-length integer at offset {offset}")]
    InvalidVarint { field: String, offset: usize },

    #[error("field {field:?}: union index {index} out of range at offset {offset}")]
    InvalidUnionIndex {
        field: String,
        offset: usize,
        index: i64,
    },

    #[error("field {field:?}: invalid boolean byte {byte:#04x} at offset {offset}")]
    InvalidBoolean {
        field: String,
        offset: usize,
        byte: u8,
    },

    #[error("field {field:?}: negative length {len} at offset {offset}")]
    NegativeLength {
        field: String,
        offset: usize,
        len: i64,
    },

    #[error("field {field:?}: string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { field: String, offset: usize },

    #[error("{remaining} unread byte(s) after the record, starting at offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("JSON is not well-formed: {0}")]
    MalformedJson(String),

    #[error("JSON document is not an object")]
    NotAnObject,

    #[error("required field {field:?} is absent")]
    MissingField { field: String },

    #[error("field {field:?} expects {expected} but JSON holds {found}")]
    JsonTypeMismatch {
        field: String,
        expected: FieldType,
        found: String,
    },

    #[error("reader failed: {0}")]
    Io(#[from] io::Error),
}

/// Unknown field name or non-conforming / missing value on a generic record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("record {record:?} has no field {field:?}")]
    UnknownField { record: String, field: String },

    #[error("field {field:?} expects {expected} but was given {found}")]
    IncompatibleValue {
        field: String,
        expected: FieldType,
        found: ValueKind,
    },

    #[error("required field {field:?} was never set")]
    MissingField { field: String },
}
