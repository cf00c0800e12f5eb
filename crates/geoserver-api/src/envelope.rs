// JSON envelope handling
//
// GeoServer wraps every object in a single-key envelope
// (`{"dataStore": {...}}`) and every listing in two
// (`{"dataStores": {"dataStore": [...]}}`). Two quirks are handled here:
//
// - an empty listing comes back as `{"dataStores": ""}`;
// - a one-element list is often serialized as the bare element.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Error;

/// Wrap `value` as `{key: value}`.
pub(crate) fn wrap<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<Value, Error> {
    let mut map = Map::new();
    map.insert(key.to_owned(), serde_json::to_value(value)?);
    Ok(Value::Object(map))
}

/// Decode `{key: {...}}` into `T`.
pub(crate) fn decode_item<T: DeserializeOwned>(body: &str, key: &str) -> Result<T, Error> {
    let mut outer: Map<String, Value> = serde_json::from_str(body)?;
    let inner = outer.remove(key).ok_or_else(|| missing_field(key))?;
    Ok(serde_json::from_value(inner)?)
}

/// Decode `{plural: {singular: [...]}}` into a list.
///
/// If the regular shape fails to decode, the body is retried as the
/// empty-listing shape `{plural: ""}`. Only when that also fails is the
/// original decode error returned.
pub(crate) fn decode_collection<T: DeserializeOwned>(
    body: &str,
    plural: &str,
    singular: &str,
) -> Result<Vec<T>, Error> {
    match decode_wrapped_collection(body, plural, singular) {
        Ok(items) => Ok(items),
        Err(err) => match decode_empty_collection(body, plural) {
            Ok(marker) => {
                debug!(
                    collection = plural,
                    marker = %marker,
                    "server reported an empty collection"
                );
                Ok(Vec::new())
            }
            Err(_) => Err(Error::Decode(err)),
        },
    }
}

fn decode_wrapped_collection<T: DeserializeOwned>(
    body: &str,
    plural: &str,
    singular: &str,
) -> Result<Vec<T>, serde_json::Error> {
    let mut outer: Map<String, Value> = serde_json::from_str(body)?;
    let wrapper = outer.remove(plural).ok_or_else(|| missing_field(plural))?;
    let mut wrapper: Map<String, Value> = serde_json::from_value(wrapper)?;
    // `{"dataStores": {}}` also means "none".
    match wrapper.remove(singular) {
        Some(items) => serde_json::from_value::<OneOrMany<T>>(items).map(OneOrMany::into_vec),
        None => Ok(Vec::new()),
    }
}

/// Fallback shape: the collection field is a bare string.
fn decode_empty_collection(body: &str, plural: &str) -> Result<String, serde_json::Error> {
    let mut outer: Map<String, Value> = serde_json::from_str(body)?;
    let marker = outer.remove(plural).ok_or_else(|| missing_field(plural))?;
    serde_json::from_value(marker)
}

fn missing_field(key: &str) -> serde_json::Error {
    serde_json::Error::custom(format_args!("missing field `{key}`"))
}

// ── One-or-many lists ───────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// `deserialize_with` helper accepting either `[a, b]` or a bare `a`.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    OneOrMany::deserialize(deserializer).map(OneOrMany::into_vec)
}
