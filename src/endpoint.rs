//! Resolved endpoint maps: the only values handed back to callers.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// One addressable operation: HTTP verb plus concrete URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub method: String,
    pub action: String,
}

impl EndpointDescriptor {
    pub fn new(method: impl Into<String>, action: impl Into<String>) -> Self {
        EndpointDescriptor {
            method: method.into(),
            action: action.into(),
        }
    }
}

/// Value under an endpoint name: a single endpoint or a layered namespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointEntry {
    Endpoint(EndpointDescriptor),
    Layer(EndpointMap),
}

impl EndpointEntry {
    pub fn as_endpoint(&self) -> Option<&EndpointDescriptor> {
        match self {
            EndpointEntry::Endpoint(endpoint) => Some(endpoint),
            EndpointEntry::Layer(_) => None,
        }
    }

    pub fn as_layer(&self) -> Option<&EndpointMap> {
        match self {
            EndpointEntry::Layer(layer) => Some(layer),
            EndpointEntry::Endpoint(_) => None,
        }
    }
}

/// Name -> endpoint map. Keys are unique; serialization is ordered by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointMap(BTreeMap<String, EndpointEntry>);

impl EndpointMap {
    pub fn new() -> Self {
        EndpointMap(BTreeMap::new())
    }

    /// Insert or overwrite by name.
    pub fn insert(&mut self, name: impl Into<String>, entry: EndpointEntry) {
        self.0.insert(name.into(), entry);
    }

    pub fn insert_endpoint(&mut self, name: impl Into<String>, endpoint: EndpointDescriptor) {
        self.insert(name, EndpointEntry::Endpoint(endpoint));
    }

    pub fn get(&self, name: &str) -> Option<&EndpointEntry> {
        self.0.get(name)
    }

    pub fn endpoint(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.get(name).and_then(EndpointEntry::as_endpoint)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, EndpointEntry> {
        self.0.iter()
    }

    /// Overlay `other` onto this map: existing names are overwritten, new names added.
    pub fn merge(&mut self, other: EndpointMap) {
        self.0.extend(other.0);
    }

    /// Same as [`merge`](Self::merge) but by value.
    pub fn merged(mut self, other: EndpointMap) -> EndpointMap {
        self.merge(other);
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl IntoIterator for EndpointMap {
    type Item = (String, EndpointEntry);
    type IntoIter = btree_map::IntoIter<String, EndpointEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, EndpointEntry)> for EndpointMap {
    fn from_iter<I: IntoIterator<Item = (String, EndpointEntry)>>(iter: I) -> Self {
        EndpointMap(iter.into_iter().collect())
    }
}
