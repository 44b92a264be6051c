//! Binding between a schema and a plain Rust struct.
//!
//! There is no runtime introspection. A struct opts in with [`reflect_record!`],
//! which generates a member table at compile time: one [`MemberDescriptor`] per
//! member, holding the schema field name, the member's [`FieldType`] and a
//! getter / setter pair.
//!
//! Schema fields are matched to members by exact, case-sensitive name. There is
//! no camelCase / snake_case normalization; a member whose Rust name differs
//! from its schema field names the field explicitly in the table.
//!
//! ```
//! use quire_records::reflect_record;
//!
//! #[derive(Default)]
//! struct DifferentUser {
//!     name: String,
//!     favorite_number: i32,
//!     favorite_color: Option<String>,
//! }
//!
//! reflect_record!(DifferentUser {
//!     name: "DifferentUser",
//!     namespace: "test",
//!     members: {
//!         name: String,
//!         favorite_number: i32 => "favoriteNumber",
//!         favorite_color: Option<String> => "favoriteColor",
//!     },
//! });
//! ```

use crate::{BindError, GenericRecord};
use quire_types::error::SchemaError;
use quire_types::schema::{Field, FieldType, Schema, SchemaShared};
use quire_types::serde;
use quire_types::types::{Value, Values};

mod member;

pub use member::*;

/// One row of a reflected struct's member table.
pub struct MemberDescriptor<T> {
    name: &'static str,
    field_type: FieldType,
    get: Box<dyn Fn(&T) -> Value + Send + Sync>,
    set: Box<dyn Fn(&mut T, Value) -> bool + Send + Sync>,
}

impl<T: 'static> MemberDescriptor<T> {
    pub fn new<M: Member + 'static>(
        name: &'static str,
        get: fn(&T) -> &M,
        get_mut: fn(&mut T) -> &mut M,
    ) -> Self {
        Self {
            name,
            field_type: M::FIELD_TYPE,
            get: Box::new(move |t: &T| get(t).to_value()),
            set: Box::new(move |t: &mut T, value: Value| match M::from_value(value) {
                None => false,
                Some(m) => {
                    *get_mut(t) = m;
                    true
                }
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn get(&self, t: &T) -> Value {
        (self.get)(t)
    }

    /// `false`, leaving `t` unchanged, if `value` is not of the member's type.
    pub fn set(&self, t: &mut T, value: Value) -> bool {
        (self.set)(t, value)
    }
}

/// A struct with a compile-time member table. Implement with [`reflect_record!`].
pub trait Reflect: Default + 'static {
    const NAME: &'static str;
    const NAMESPACE: Option<&'static str>;

    fn members() -> Vec<MemberDescriptor<Self>>;
}

#[macro_export]
macro_rules! reflect_record {
    (
        $ty:ty {
            name: $name:literal,
            $( namespace: $ns:literal, )?
            members: {
                $( $member:ident : $mty:ty $( => $field:literal )? ),* $(,)?
            } $(,)?
        }
    ) => {
        impl $crate::reflect::Reflect for $ty {
            const NAME: &'static str = $name;
            const NAMESPACE: Option<&'static str> = $crate::__reflect_namespace!($($ns)?);

            fn members() -> Vec<$crate::reflect::MemberDescriptor<Self>> {
                vec![$(
                    $crate::reflect::MemberDescriptor::<Self>::new::<$mty>(
                        $crate::__reflect_field_name!($member $(, $field)?),
                        |rec| &rec.$member,
                        |rec| &mut rec.$member,
                    ),
                )*]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_field_name {
    ($member:ident) => {
        stringify!($member)
    };
    ($member:ident, $field:literal) => {
        $field
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_namespace {
    () => {
        None
    };
    ($ns:literal) => {
        Some($ns)
    };
}

/// The schema equivalent to `T`'s member table, fields in table order.
pub fn derive_schema<T: Reflect>() -> Result<Schema, SchemaError> {
    let fields = T::members()
        .iter()
        .map(|member| Field::new(member.name, member.field_type))
        .collect::<Vec<_>>();
    Schema::new(
        T::NAMESPACE.map(String::from),
        String::from(T::NAME),
        None,
        fields,
    )
}

/// Decodes `bytes` with `schema`, then populates a fresh `T`.
pub fn bind<T: Reflect>(schema: &Schema, bytes: &[u8]) -> Result<T, BindError> {
    let values = serde::decode(schema, bytes)?;
    from_values(schema, values)
}

/// Encodes `t` with `schema`. Every schema field must have a matching member.
pub fn write<T: Reflect>(schema: &Schema, t: &T) -> Result<Vec<u8>, BindError> {
    let values = to_values(schema, t)?;
    Ok(serde::encode(schema, &values)?)
}

pub fn from_record<T: Reflect>(record: &GenericRecord) -> Result<T, BindError> {
    from_values(record.schema(), record.values().clone())
}

pub fn to_record<T: Reflect>(schema: SchemaShared, t: &T) -> Result<GenericRecord, BindError> {
    let values = to_values(&schema, t)?;
    Ok(GenericRecord::from_values(schema, values)?)
}

/// Members without a schema field keep their `Default` value.
pub fn from_values<T: Reflect>(schema: &Schema, mut values: Values) -> Result<T, BindError> {
    let members = T::members();
    let mut t = T::default();
    for field in schema.fields() {
        let member = find_member(&members, field)?;
        if !fits(field.field_type, member.field_type) {
            return Err(incompatible(field, member));
        }
        let value = values.remove(&field.name).unwrap_or(Value::Null);
        let found = value.kind();
        if !member.set(&mut t, value) {
            return Err(BindError::RejectedValue {
                field: field.name.clone(),
                found,
            });
        }
    }

    for member in members.iter() {
        if schema.field(member.name).is_none() {
            log::trace!(
                "{}.{} has no field in {}; left at its default.",
                T::NAME,
                member.name,
                schema.full_name()
            );
        }
    }

    Ok(t)
}

pub fn to_values<T: Reflect>(schema: &Schema, t: &T) -> Result<Values, BindError> {
    let members = T::members();
    let mut values = Values::new();
    for field in schema.fields() {
        let member = find_member(&members, field)?;
        if !fits(member.field_type, field.field_type) {
            return Err(incompatible(field, member));
        }
        values.insert(field.name.clone(), member.get(t));
    }
    Ok(values)
}

fn find_member<'m, T: Reflect>(
    members: &'m [MemberDescriptor<T>],
    field: &Field,
) -> Result<&'m MemberDescriptor<T>, BindError> {
    members
        .iter()
        .find(|member| member.name == field.name)
        .ok_or_else(|| BindError::NoSuchMember {
            record: T::NAME,
            field: field.name.clone(),
        })
}

fn incompatible<T>(field: &Field, member: &MemberDescriptor<T>) -> BindError {
    BindError::IncompatibleMember {
        field: field.name.clone(),
        member_type: member.field_type,
        field_type: field.field_type,
    }
}
