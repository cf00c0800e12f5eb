// Resource kinds and operations
//
// Every request is tagged with the kind of resource it targets and the
// operation it performs. Both feed the status classifier and the JSON
// envelope keys, which GeoServer spells differently from the URL segments.

use std::fmt;

use reqwest::StatusCode;

/// Kind of server resource a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Workspace,
    DataStore,
    CoverageStore,
    FeatureType,
    Coverage,
    LayerGroup,
    Style,
    Logging,
    Fonts,
    About,
    Seed,
    Wms,
}

impl ResourceKind {
    /// Lower-case label used in error messages (`"datastore DS not found"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::DataStore => "datastore",
            Self::CoverageStore => "coveragestore",
            Self::FeatureType => "featuretype",
            Self::Coverage => "coverage",
            Self::LayerGroup => "layergroup",
            Self::Style => "style",
            Self::Logging => "logging",
            Self::Fonts => "fonts",
            Self::About => "about",
            Self::Seed => "tile layer",
            Self::Wms => "wms",
        }
    }

    /// Key wrapping a single object: `{"dataStore": {...}}`.
    pub(crate) fn item_key(self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::DataStore => "dataStore",
            Self::CoverageStore => "coverageStore",
            Self::FeatureType => "featureType",
            Self::Coverage => "coverage",
            Self::LayerGroup => "layerGroup",
            Self::Style => "style",
            Self::Logging => "logging",
            Self::Fonts => "fonts",
            Self::About => "about",
            Self::Seed => "seedRequest",
            Self::Wms => "wms",
        }
    }

    /// Key wrapping a listing: `{"dataStores": {"dataStore": [...]}}`.
    pub(crate) fn collection_key(self) -> &'static str {
        match self {
            Self::Workspace => "workspaces",
            Self::DataStore => "dataStores",
            Self::CoverageStore => "coverageStores",
            Self::FeatureType => "featureTypes",
            Self::Coverage => "coverages",
            Self::LayerGroup => "layerGroups",
            Self::Style => "styles",
            Self::Logging => "logging",
            Self::Fonts => "fonts",
            Self::About => "about",
            Self::Seed => "seedRequests",
            Self::Wms => "wms",
        }
    }

    /// URL segment of the collection: `/workspaces/{ws}/datastores`.
    pub(crate) fn path_segment(self) -> &'static str {
        match self {
            Self::Workspace => "workspaces",
            Self::DataStore => "datastores",
            Self::CoverageStore => "coveragestores",
            Self::FeatureType => "featuretypes",
            Self::Coverage => "coverages",
            Self::LayerGroup => "layergroups",
            Self::Style => "styles",
            Self::Logging => "logging",
            Self::Fonts => "fonts",
            Self::About => "about",
            Self::Seed => "seed",
            Self::Wms => "wms",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operation a request performs, which decides the accepted statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    List,
    Update,
    Delete,
    Reset,
}

impl Operation {
    /// Whether the operation addresses a single named item (as opposed to
    /// a collection).
    pub(crate) fn is_item(self) -> bool {
        !matches!(self, Self::Create | Self::List)
    }

    /// Statuses counted as success. Writes accept 200 and 201,
    /// reads and deletes only 200.
    pub(crate) fn accepts(self, status: StatusCode) -> bool {
        match self {
            Self::Create | Self::Update | Self::Reset => {
                status == StatusCode::OK || status == StatusCode::CREATED
            }
            Self::Get | Self::List | Self::Delete => status == StatusCode::OK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_accept_created() {
        assert!(Operation::Create.accepts(StatusCode::CREATED));
        assert!(Operation::Update.accepts(StatusCode::CREATED));
        assert!(!Operation::Delete.accepts(StatusCode::CREATED));
        assert!(!Operation::Get.accepts(StatusCode::NO_CONTENT));
    }

    #[test]
    fn collection_operations_are_not_item_scoped() {
        assert!(!Operation::Create.is_item());
        assert!(!Operation::List.is_item());
        assert!(Operation::Reset.is_item());
    }

    #[test]
    fn envelope_keys_use_camel_case() {
        assert_eq!(ResourceKind::DataStore.item_key(), "dataStore");
        assert_eq!(ResourceKind::DataStore.collection_key(), "dataStores");
        assert_eq!(ResourceKind::DataStore.path_segment(), "datastores");
        assert_eq!(ResourceKind::DataStore.to_string(), "datastore");
    }
}
