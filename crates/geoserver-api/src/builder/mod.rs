// Store and group builders
//
// A builder is returned by `create(...)` on a collection handle. It holds
// the general options; the terminal format method adds the format's
// connection parameters, validates everything locally and sends a single
// create request. Builders are consumed by the terminal call.

mod coverage_store;
mod datastore;
mod layer_group;

pub use coverage_store::CoverageStoreBuilder;
pub use datastore::{
    CsvStrategy, DataStoreBuilder, GeoPackageOption, PostGisConnection, PostGisOption,
    ShapefileOption, SslMode, WfsOption,
};
pub use layer_group::LayerGroupBuilder;

/// Options shared by every store format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOption {
    Description(String),
    /// Disable the store automatically when its source stops responding.
    DisableConnectionOnFailure(bool),
    Enabled(bool),
}

/// General options after folding. Later options override earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StoreSettings {
    pub description: Option<String>,
    pub disable_on_conn_failure: Option<bool>,
    pub enabled: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            description: None,
            disable_on_conn_failure: None,
            enabled: true,
        }
    }
}

impl StoreSettings {
    pub(crate) fn from_options(options: impl IntoIterator<Item = StoreOption>) -> Self {
        let mut settings = Self::default();
        for option in options {
            match option {
                StoreOption::Description(text) => settings.description = Some(text),
                StoreOption::DisableConnectionOnFailure(flag) => {
                    settings.disable_on_conn_failure = Some(flag);
                }
                StoreOption::Enabled(flag) => settings.enabled = flag,
            }
        }
        settings
    }
}

/// `file:` URL for a server-side path. Paths that already carry a scheme
/// are passed through.
pub(crate) fn file_url(path: &str) -> String {
    let path = path.trim();
    if path.contains("://") || path.starts_with("file:") {
        path.to_owned()
    } else {
        format!("file:{path}")
    }
}
