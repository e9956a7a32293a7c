use crate::{CHILDREN_KEY, PropValue, VNode};
use smallvec::SmallVec;
use smartstring::alias::String as SmartString;

/// Insertion-ordered prop map.
///
/// Prop bags are small, so entries live inline in a `SmallVec` and lookups
/// are linear scans. Iteration always follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Props {
    entries: SmallVec<[(SmartString, PropValue); 8]>,
}

impl Props {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Builder form of [`Props::insert`]
    pub fn with(mut self, key: impl Into<SmartString>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<SmartString>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let index = self.entries.iter().position(|(k, _)| k.as_str() == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Child nodes stored under the reserved children key, empty if absent
    pub fn children(&self) -> &[VNode] {
        self.get(CHILDREN_KEY)
            .and_then(PropValue::as_children)
            .unwrap_or(&[])
    }

    /// Copy of this map with the reserved children entry stripped
    pub fn without_children(&self) -> Props {
        self.iter()
            .filter(|(k, _)| *k != CHILDREN_KEY)
            .map(|(k, v)| (k, v.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<SmartString>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

impl IntoIterator for Props {
    type Item = (SmartString, PropValue);
    type IntoIter = smallvec::IntoIter<[(SmartString, PropValue); 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
