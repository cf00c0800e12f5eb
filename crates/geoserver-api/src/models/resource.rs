// Published resources: feature types and coverages
//
// Both share the same descriptive fields (`ResourceInfo`), flattened into
// their own envelope. Creation options are tagged variants applied one at
// a time, so a later option for the same field overrides an earlier one.

use serde::{Deserialize, Serialize};

use super::common::{BoundingBox, Keywords, ResourceRef, StoreRef};

/// How declared and native CRS are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionPolicy {
    ForceDeclared,
    ReprojectToDeclared,
    KeepNative,
    #[serde(rename = "NONE")]
    Unset,
}

/// Fields common to feature types and coverages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
    /// Declared CRS code, e.g. `EPSG:4326`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat_lon_bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_policy: Option<ProjectionPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreRef>,
}

/// One settable field of a feature type or coverage.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceOption {
    Title(String),
    Abstract(String),
    NativeName(String),
    Srs(String),
    ProjectionPolicy(ProjectionPolicy),
    Keywords(Vec<String>),
    /// Native bounding box.
    BoundingBox(BoundingBox),
    Enabled(bool),
}

impl ResourceInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, option: ResourceOption) {
        match option {
            ResourceOption::Title(title) => self.title = Some(title),
            ResourceOption::Abstract(text) => self.abstract_text = Some(text),
            ResourceOption::NativeName(name) => self.native_name = Some(name),
            ResourceOption::Srs(srs) => self.srs = Some(srs),
            ResourceOption::ProjectionPolicy(policy) => self.projection_policy = Some(policy),
            ResourceOption::Keywords(words) => self.keywords = Some(words.into_iter().collect()),
            ResourceOption::BoundingBox(bbox) => self.native_bounding_box = Some(bbox),
            ResourceOption::Enabled(enabled) => self.enabled = Some(enabled),
        }
    }

    fn with_options(
        name: impl Into<String>,
        options: impl IntoIterator<Item = ResourceOption>,
    ) -> Self {
        let mut info = Self::new(name);
        for option in options {
            info.apply(option);
        }
        info
    }
}

/// A published vector layer (`{"featureType": {...}}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureType {
    #[serde(flatten)]
    pub info: ResourceInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_features: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_decimals: Option<u32>,
}

impl FeatureType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: ResourceInfo::new(name),
            ..Self::default()
        }
    }

    pub fn with_options(
        name: impl Into<String>,
        options: impl IntoIterator<Item = ResourceOption>,
    ) -> Self {
        Self {
            info: ResourceInfo::with_options(name, options),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }
}

/// A published raster layer (`{"coverage": {...}}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    #[serde(flatten)]
    pub info: ResourceInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_coverage_name: Option<String>,
}

impl Coverage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: ResourceInfo::new(name),
            ..Self::default()
        }
    }

    pub fn with_options(
        name: impl Into<String>,
        options: impl IntoIterator<Item = ResourceOption>,
    ) -> Self {
        Self {
            info: ResourceInfo::with_options(name, options),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }
}
