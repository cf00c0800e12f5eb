// Shared wire types
//
// Pieces that recur across resource kinds: name/href references, the
// `{"entry": [{"@key", "$"}]}` parameter map, keyword lists and bounding
// boxes. Fields use `#[serde(default)]` liberally because GeoServer omits
// anything unset.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::envelope::one_or_many;

// ── References ──────────────────────────────────────────────────────

/// `{"name": "...", "href": "..."}` as found in listings and back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ResourceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: None,
        }
    }
}

/// Back-reference from a feature type / coverage to its store.
///
/// `name` is workspace-qualified (`ws:store`) in server responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRef {
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

// ── Entries ─────────────────────────────────────────────────────────

/// One `{"@key": k, "$": v}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "@key")]
    pub key: String,
    #[serde(rename = "$", default)]
    pub value: String,
}

/// Connection parameters, kept in insertion order.
///
/// Inserting an existing key replaces its value in place: the last write
/// for a key wins, and no collision is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParameters(IndexMap<String, String>);

impl ConnectionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectionParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[derive(Serialize)]
struct EntryRef<'a> {
    #[serde(rename = "@key")]
    key: &'a str,
    #[serde(rename = "$")]
    value: &'a str,
}

#[derive(Serialize)]
struct EntriesOut<'a> {
    entry: Vec<EntryRef<'a>>,
}

#[derive(Deserialize)]
struct EntriesIn {
    #[serde(default, deserialize_with = "one_or_many")]
    entry: Vec<Entry>,
}

impl Serialize for ConnectionParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EntriesOut {
            entry: self.iter().map(|(key, value)| EntryRef { key, value }).collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConnectionParameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = EntriesIn::deserialize(deserializer)?;
        Ok(wire.entry.into_iter().map(|e| (e.key, e.value)).collect())
    }
}

// ── Keywords ────────────────────────────────────────────────────────

/// `{"string": ["a", "b"]}`, or `{"string": "a"}` for a single keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keywords {
    #[serde(rename = "string", default, deserialize_with = "one_or_many")]
    pub values: Vec<String>,
}

impl<S: Into<String>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Spatial ─────────────────────────────────────────────────────────

/// A CRS reference. Plain codes come back as strings; projected CRSs as
/// `{"@class": "projected", "$": "EPSG:3857"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Crs {
    Code(String),
    Tagged {
        #[serde(rename = "@class")]
        class: String,
        #[serde(rename = "$")]
        value: String,
    },
}

impl Crs {
    pub fn code(&self) -> &str {
        match self {
            Self::Code(code) => code,
            Self::Tagged { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub minx: f64,
    pub maxx: f64,
    pub miny: f64,
    pub maxy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
}

impl BoundingBox {
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64, crs: impl Into<String>) -> Self {
        Self {
            minx,
            maxx,
            miny,
            maxy,
            crs: Some(Crs::Code(crs.into())),
        }
    }
}
