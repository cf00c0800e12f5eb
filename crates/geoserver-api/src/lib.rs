// geoserver-api: Async Rust client for the GeoServer REST admin API
//
// Navigation goes root -> workspace -> store:
//
//     let gs = GeoServer::new(url, credentials)?;
//     gs.workspace("PLAYGROUND").data_stores().select("roads").publish("roads", []).await?;
//
// Every leaf operation is one HTTP round trip. Non-2xx replies come back
// as classified `Error`s; transport failures pass through unclassified.

pub mod auth;
pub mod builder;
pub mod client;
pub mod config;
pub mod context;
mod envelope;
pub mod error;
pub mod kind;
pub mod models;
mod requester;
pub mod resources;
pub mod transport;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use auth::Credentials;
pub use builder::{
    CoverageStoreBuilder, CsvStrategy, DataStoreBuilder, GeoPackageOption, LayerGroupBuilder,
    PostGisConnection, PostGisOption, ShapefileOption, SslMode, StoreOption, WfsOption,
};
pub use client::GeoServer;
pub use config::ClientConfig;
pub use context::ConnectionContext;
pub use error::{Error, ErrorKind};
pub use kind::{Operation, ResourceKind};
pub use models::{
    BoundingBox, Capabilities, CapabilityLayer, Coverage, CoverageStore, DataStore, FeatureType,
    KillScope, LayerGroup, LayerGroupMode, LoggingConfig, MapImage, MapRequest, ModuleStatus,
    ProjectionPolicy, ResourceOption, ResourceRef, SeedRequest, SeedTask, SeedType, Style,
    TaskStatus, VersionResource, WmsVersion, Workspace,
};
pub use resources::styles::SLD_CONTENT_TYPE;
pub use resources::{
    About, CoverageStoreScope, CoverageStores, Coverages, DataStoreScope, DataStores,
    FeatureTypes, Fonts, GeoWebCache, LayerGroups, Logging, Purge, Styles, Wms, WorkspaceScope,
    Workspaces,
};
pub use transport::{TlsMode, TransportConfig};
