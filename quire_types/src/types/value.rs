use crate::schema::{FieldType, PrimitiveKind};
use derive_more::{Display, From};

/// A single field value.
#[derive(From, PartialEq, Clone, Debug)]
pub enum Value {
    String(String),
    Int(i32),
    Long(i64),
    Boolean(bool),
    Float(f32),
    Double(f64),
    #[from(ignore)]
    Null,
}

/// The variant of a [`Value`], without its payload. Used in diagnostics.
#[derive(Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ValueKind {
    #[display(fmt = "string")]
    String,
    #[display(fmt = "int")]
    Int,
    #[display(fmt = "long")]
    Long,
    #[display(fmt = "boolean")]
    Boolean,
    #[display(fmt = "float")]
    Float,
    #[display(fmt = "double")]
    Double,
    #[display(fmt = "null")]
    Null,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::Null => ValueKind::Null,
        }
    }

    /// `None` for [`Value::Null`].
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        let prim = match self {
            Self::String(_) => PrimitiveKind::String,
            Self::Int(_) => PrimitiveKind::Int,
            Self::Long(_) => PrimitiveKind::Long,
            Self::Boolean(_) => PrimitiveKind::Boolean,
            Self::Float(_) => PrimitiveKind::Float,
            Self::Double(_) => PrimitiveKind::Double,
            Self::Null => return None,
        };
        Some(prim)
    }

    /// Strict conformance: no numeric promotion, and `Null` only fits a nullable type.
    pub fn conforms_to(&self, field_type: FieldType) -> bool {
        match self.primitive_kind() {
            None => field_type.is_nullable(),
            Some(prim) => prim == field_type.kind(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(String::from(s))
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Self::Null,
            Some(t) => t.into(),
        }
    }
}
