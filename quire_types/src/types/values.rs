use crate::types::Value;
use derive_more::{Deref, DerefMut, From, Into};
use std::collections::{hash_map, HashMap};

/// Field name -> [`Value`].
///
/// Equality is map equality, so two `Values` built in different insertion
/// orders compare equal. Encoders walk the schema, never this map, so
/// insertion order never reaches the wire either.
#[derive(From, Into, Deref, DerefMut, PartialEq, Clone, Default, Debug)]
pub struct Values(HashMap<String, Value>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<HashMap<_, _>>();
        Self(map)
    }
}

impl IntoIterator for Values {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
