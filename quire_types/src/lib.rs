//! Schema model, value model and the binary / JSON codecs.
//!
//! A [`schema::Schema`] is parsed once, shared as [`schema::SchemaShared`], and
//! then drives every encode and decode call. Codecs are plain functions over
//! `(&Schema, &Values)`; nothing here holds process-wide state.

pub mod error;
pub mod schema;
pub mod serde;
pub mod types;
