use super::Value;
use crate::{Error, Result};

use indexmap::IndexMap;

/// An ordered `name → value` mapping used as a model's initial attribute set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes {
    values: IndexMap<String, Value>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Sets `name`, returning the previous value if there was one. A replaced
    /// key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    /// Merges `other` over `self`. On a key collision the value from `other`
    /// wins.
    pub fn merge(&mut self, other: Attributes) {
        self.values.extend(other.values);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Removes `name` and converts it to `T`.
    ///
    /// Fails if the attribute is missing or holds a value of another type.
    pub fn take<T>(&mut self, name: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self.remove(name) {
            Some(value) => T::try_from(value).map_err(|err| {
                err.context(Error::from_args(format_args!("attribute `{name}`")))
            }),
            None => Err(Error::missing_attribute(name)),
        }
    }

    /// Removes `name` and converts it to `T`, treating a missing attribute or
    /// null as `None`.
    pub fn take_optional<T>(&mut self, name: &str) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self.remove(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::try_from(value).map(Some).map_err(|err| {
                err.context(Error::from_args(format_args!("attribute `{name}`")))
            }),
        }
    }

    /// Asserts every attribute has been consumed by a constructor.
    pub fn finish(self) -> Result<()> {
        if self.values.is_empty() {
            Ok(())
        } else {
            Err(Error::unknown_attribute(self.values.into_keys()))
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.values.extend(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
