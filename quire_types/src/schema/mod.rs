//! # Schema text
//!
//! A schema is a JSON object describing one record:
//!
//! ```text
//! {
//!     "type":         "record",           // optional
//!     "namespace":    "example.avro",     // optional
//!     "name":         "User",
//!     "doc":          "...",              // optional
//!     "fields": [
//!         { "name": "name",               "type": "string" },
//!         { "name": "favorite_number",    "type": ["int", "null"] },
//!         { "name": "favorite_color",     "type": {"type": "string"}, "default": "blue" },
//!     ]
//! }
//! ```
//!
//! A field `type` is a primitive token (`string`, `int`, `long`, `boolean`,
//! `float`, `double`), the same wrapped as `{"type": token}`, or a two-element
//! list of one token and `"null"` in either order.
//!
//! Field order is significant: it is the binary wire order.

mod model;
mod parser;
mod printer;

pub use model::*;
pub use parser::parse;
