use quire_types::schema::{FieldType, PrimitiveKind};
use quire_types::types::Value;

/// A Rust type that can sit in a reflected struct member.
pub trait Member: Sized {
    const FIELD_TYPE: FieldType;

    fn to_value(&self) -> Value;

    /// `None` if `value` is not of this member's type.
    fn from_value(value: Value) -> Option<Self>;
}

/// A non-optional [`Member`]. Only these may be wrapped in `Option`.
pub trait PrimitiveMember: Member {}

macro_rules! primitive_member {
    ($ty:ty, $kind:ident, $variant:ident) => {
        impl Member for $ty {
            const FIELD_TYPE: FieldType = FieldType::Primitive(PrimitiveKind::$kind);

            fn to_value(&self) -> Value {
                Value::$variant(self.to_owned())
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl PrimitiveMember for $ty {}
    };
}

primitive_member!(String, String, String);
primitive_member!(i32, Int, Int);
primitive_member!(i64, Long, Long);
primitive_member!(bool, Boolean, Boolean);
primitive_member!(f32, Float, Float);
primitive_member!(f64, Double, Double);

impl<T: PrimitiveMember> Member for Option<T> {
    const FIELD_TYPE: FieldType = FieldType::Nullable(T::FIELD_TYPE.kind());

    fn to_value(&self) -> Value {
        match self {
            None => Value::Null,
            Some(t) => t.to_value(),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            value => T::from_value(value).map(Some),
        }
    }
}

/// Whether a value typed `source` can always be stored where `receiver` is declared.
///
/// Same primitive kind, and a nullable source only into a nullable receiver.
pub fn fits(source: FieldType, receiver: FieldType) -> bool {
    source.kind() == receiver.kind() && (receiver.is_nullable() || !source.is_nullable())
}
