// Data store and coverage store wire types
//
// Stores reference their workspace by name only. Data stores carry a
// connection-parameter map whose keys are specific to the store type;
// coverage stores carry a single `url`.

use serde::{Deserialize, Serialize};

use super::common::{ConnectionParameters, ResourceRef};

/// A vector source (`{"dataStore": {...}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStore {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Store type tag, e.g. `"PostGIS"`, `"Shapefile"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceRef>,
    #[serde(default)]
    pub connection_parameters: ConnectionParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_on_conn_failure: Option<bool>,
    #[serde(rename = "_default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Link to the feature type listing, only present in responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_types: Option<String>,
}

impl DataStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            store_type: None,
            enabled: None,
            workspace: None,
            connection_parameters: ConnectionParameters::new(),
            disable_on_conn_failure: None,
            default: None,
            feature_types: None,
        }
    }
}

/// A raster source (`{"coverageStore": {...}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageStore {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Format tag, e.g. `"GeoTIFF"`, `"ImageMosaic"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceRef>,
    /// Location of the raster, usually `file:...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_on_conn_failure: Option<bool>,
    #[serde(rename = "_default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverages: Option<String>,
}

impl CoverageStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            store_type: None,
            enabled: None,
            workspace: None,
            url: None,
            disable_on_conn_failure: None,
            default: None,
            coverages: None,
        }
    }
}
