mod value;
mod values;

pub use value::*;
pub use values::*;
