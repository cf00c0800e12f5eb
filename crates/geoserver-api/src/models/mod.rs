// Wire types for the GeoServer REST API
//
// DTO-shaped structs that mirror the JSON the server sends and accepts.
// Envelopes (`{"dataStore": {...}}`) are added and stripped by the
// requester, so these types only describe the inner object.

pub mod common;
pub mod gwc;
pub mod layer_group;
pub mod resource;
pub mod store;
pub mod style;
pub mod system;
pub mod wms;
pub mod workspace;

pub use common::{BoundingBox, ConnectionParameters, Crs, Entry, Keywords, ResourceRef, StoreRef};
pub use gwc::{KillScope, SeedRequest, SeedTask, SeedType, TaskStatus};
pub use layer_group::{LayerGroup, LayerGroupMode, Published, PublishedType, StyleSlot};
pub use resource::{Coverage, FeatureType, ProjectionPolicy, ResourceInfo, ResourceOption};
pub use store::{CoverageStore, DataStore};
pub use style::Style;
pub use system::{LoggingConfig, ModuleStatus, VersionResource};
pub use wms::{Capabilities, CapabilityLayer, MapImage, MapRequest, WmsVersion};
pub use workspace::Workspace;
