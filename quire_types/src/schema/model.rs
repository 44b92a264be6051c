use crate::error::SchemaError;
use crate::types::Value;
use derive_more::Display;
use itertools::Itertools;
use std::fmt;
use std::sync::Arc;

/// The primitive kinds a field may hold.
#[derive(Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum PrimitiveKind {
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
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 6] = [
        Self::String,
        Self::Int,
        Self::Long,
        Self::Boolean,
        Self::Float,
        Self::Double,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Long => "long",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prim| prim.token() == token)
    }
}

/// A field's declared type: one primitive, or the union of `null` and one primitive.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum FieldType {
    Primitive(PrimitiveKind),
    Nullable(PrimitiveKind),
}

impl FieldType {
    pub const fn kind(self) -> PrimitiveKind {
        match self {
            Self::Primitive(prim) | Self::Nullable(prim) => prim,
        }
    }

    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(prim) => write!(f, "{prim}"),
            Self::Nullable(prim) => write!(f, "[{prim}, null]"),
        }
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub default: Option<Value>,
    pub doc: Option<String>,
}

impl Field {
    pub fn new<S: Into<String>>(name: S, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
            doc: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_doc<S: Into<String>>(mut self, doc: S) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A record schema. Immutable once constructed.
///
/// The only constructor is [`Schema::new`], which checks names, field-name
/// uniqueness and default conformance, so every `Schema` in existence is valid.
#[derive(PartialEq, Clone, Debug)]
pub struct Schema {
    namespace: Option<String>,
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
}

pub type SchemaShared = Arc<Schema>;

impl Schema {
    pub fn new(
        namespace: Option<String>,
        name: String,
        doc: Option<String>,
        fields: Vec<Field>,
    ) -> Result<Self, SchemaError> {
        if let Some(namespace) = namespace.as_ref() {
            if !namespace.split('.').all(is_valid_name) {
                return Err(SchemaError::InvalidName(namespace.clone()));
            }
        }
        if !is_valid_name(&name) {
            return Err(SchemaError::InvalidName(name));
        }

        for field in fields.iter() {
            if !is_valid_name(&field.name) {
                return Err(SchemaError::InvalidName(field.name.clone()));
            }
            if let Some(default) = field.default.as_ref() {
                if !default.conforms_to(field.field_type) {
                    return Err(SchemaError::IncompatibleDefault {
                        field: field.name.clone(),
                        expected: field.field_type,
                        found: default.kind().to_string(),
                    });
                }
            }
        }
        if let Some(dup) = fields.iter().map(|field| &field.name).duplicates().next() {
            return Err(SchemaError::DuplicateField(dup.clone()));
        }

        Ok(Self {
            namespace,
            name,
            doc,
            fields,
        })
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `namespace.name`, or just `name` without a namespace.
    pub fn full_name(&self) -> String {
        match self.namespace.as_ref() {
            None => self.name.clone(),
            Some(ns) => format!("{ns}.{}", self.name),
        }
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Fields in declaration order, which is also wire order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
