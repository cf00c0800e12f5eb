// Resource handles
//
// One handle per resource kind, each wrapping a `Requester` bound to a
// collection path. Scopes (`WorkspaceScope`, `DataStoreScope`, ...) are
// the navigation steps between them; creating one never sends a request.

pub mod coverage_stores;
pub mod coverages;
pub mod datastores;
pub mod feature_types;
pub mod gwc;
pub mod layer_groups;
pub mod styles;
pub mod system;
pub mod wms;
pub mod workspaces;

pub use coverage_stores::{CoverageStoreScope, CoverageStores};
pub use coverages::Coverages;
pub use datastores::{DataStoreScope, DataStores};
pub use feature_types::FeatureTypes;
pub use gwc::GeoWebCache;
pub use layer_groups::LayerGroups;
pub use styles::Styles;
pub use system::{About, Fonts, Logging};
pub use wms::Wms;
pub use workspaces::{WorkspaceScope, Workspaces};

/// What a store delete also removes from the data directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Purge {
    /// Keep everything on disk.
    #[default]
    None,
    /// Remove auxiliary files (indexes, properties) only.
    Metadata,
    /// Remove the data files as well.
    All,
}

impl Purge {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Metadata => "metadata",
            Self::All => "all",
        }
    }
}

/// `recurse` plus an optional `purge` flag, as delete query pairs.
pub(crate) fn delete_query(recurse: bool, purge: Option<Purge>) -> Vec<(&'static str, String)> {
    let mut query = vec![("recurse", recurse.to_string())];
    if let Some(purge) = purge {
        query.push(("purge", purge.as_str().to_owned()));
    }
    query
}
