use crate::schema::{FieldType, Schema};
use crate::serde::json;
use serde_json::{Map, Value as Json};
use std::fmt;

/* Canonical text. */
impl Schema {
    /// The schema as a JSON document, in the form [`super::parse`] accepts.
    pub fn to_json_value(&self) -> Json {
        let mut obj = Map::new();
        obj.insert("type".into(), Json::from("record"));
        if let Some(ns) = self.namespace() {
            obj.insert("namespace".into(), Json::from(ns));
        }
        obj.insert("name".into(), Json::from(self.name()));
        if let Some(doc) = self.doc() {
            obj.insert("doc".into(), Json::from(doc));
        }

        let fields = self
            .fields()
            .iter()
            .map(|field| {
                let mut fobj = Map::new();
                fobj.insert("name".into(), Json::from(field.name.as_str()));
                fobj.insert("type".into(), field_type_json(field.field_type));
                if let Some(doc) = field.doc.as_ref() {
                    fobj.insert("doc".into(), Json::from(doc.as_str()));
                }
                // A non-finite float default has no JSON form; it is left out.
                if let Some(default) = field.default.as_ref().and_then(json::value_to_json) {
                    fobj.insert("default".into(), default);
                }
                Json::Object(fobj)
            })
            .collect::<Vec<_>>();
        obj.insert("fields".into(), Json::Array(fields));

        Json::Object(obj)
    }

    pub fn to_json(&self, pretty: bool) -> String {
        let json = self.to_json_value();
        if pretty {
            format!("{json:#}")
        } else {
            format!("{json}")
        }
    }
}

fn field_type_json(field_type: FieldType) -> Json {
    match field_type {
        FieldType::Primitive(prim) => Json::from(prim.token()),
        FieldType::Nullable(prim) => Json::from(vec![prim.token(), "null"]),
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json(f.alternate()))
    }
}
