// Workspaces
//
// `/rest/workspaces`, plus the scope that every workspace-level handle
// hangs off.

use tracing::debug;

use super::{
    CoverageStores, DataStores, GeoWebCache, LayerGroups, Styles, Wms, delete_query,
};
use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::ResourceKind;
use crate::models::{ResourceRef, Workspace};
use crate::requester::Requester;
use crate::validate::validate_name;

/// Requester for workspaces.
#[derive(Debug, Clone)]
pub struct Workspaces {
    requester: Requester,
}

impl Workspaces {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        Self {
            requester: Requester::root(ctx, ResourceKind::Workspace),
        }
    }

    /// Enter workspace `name`. No request is sent and the workspace is
    /// not checked for existence.
    pub fn select(&self, name: &str) -> WorkspaceScope {
        WorkspaceScope::new(self.requester.context(), name)
    }

    /// Create a workspace; `default` also makes it the server default.
    pub async fn create(&self, name: &str, default: bool) -> Result<(), Error> {
        validate_name(name)?;
        debug!(name, default, "creating workspace");
        self.requester
            .create(name, &Workspace::new(name), &[("default", default.to_string())])
            .await
    }

    pub async fn get(&self, name: &str) -> Result<Workspace, Error> {
        self.requester.get(name).await
    }

    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.requester.get_all().await
    }

    /// Replace workspace `name` (renames when `workspace.name` differs).
    pub async fn update(&self, name: &str, workspace: &Workspace) -> Result<(), Error> {
        validate_name(&workspace.name)?;
        self.requester.update(name, workspace).await
    }

    /// Delete a workspace. Without `recurse` the server refuses
    /// non-empty workspaces.
    pub async fn delete(&self, name: &str, recurse: bool) -> Result<(), Error> {
        self.requester
            .delete(name, &delete_query(recurse, None))
            .await
    }
}

/// A selected workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceScope {
    ctx: ConnectionContext,
    name: String,
}

impl WorkspaceScope {
    pub(crate) fn new(ctx: &ConnectionContext, name: &str) -> Self {
        Self {
            ctx: ctx.with_workspace(name),
            name: name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &ConnectionContext {
        &self.ctx
    }

    pub fn data_stores(&self) -> DataStores {
        DataStores::new(self.ctx.clone(), &self.name)
    }

    pub fn coverage_stores(&self) -> CoverageStores {
        CoverageStores::new(self.ctx.clone(), &self.name)
    }

    /// Layer groups local to this workspace.
    pub fn layer_groups(&self) -> LayerGroups {
        LayerGroups::new(self.ctx.clone())
    }

    /// Styles local to this workspace.
    pub fn styles(&self) -> Styles {
        Styles::new(self.ctx.clone())
    }

    /// Tile cache; bare layer names are qualified with this workspace.
    pub fn geo_web_cache(&self) -> GeoWebCache {
        GeoWebCache::new(self.ctx.clone())
    }

    /// The workspace-scoped WMS endpoint (`/geoserver/{ws}/wms`).
    pub fn wms(&self) -> Wms {
        Wms::new(self.ctx.clone())
    }
}
