//! Record shapes over [`quire_types`] schemas.
//!
//! - [`GenericRecord`]: a schema-bound field-name -> value map, built through
//!   [`GenericRecordBuilder`].
//! - [`specific::SpecificRecord`]: a Rust type that carries its own schema.
//! - [`reflect::Reflect`]: any `Default` struct described by a compile-time
//!   member table, bound to a schema by exact field-name matching.

mod error;
pub mod generic;
pub mod reflect;
pub mod specific;

pub use error::*;
pub use generic::{GenericRecord, GenericRecordBuilder};
