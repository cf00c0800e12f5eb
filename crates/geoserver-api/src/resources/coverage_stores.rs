// Coverage stores
//
// `/rest/workspaces/{ws}/coveragestores`. Same shape as data stores; the
// builder validates the raster file type instead of connection details.

use tracing::debug;

use super::{Coverages, Purge, delete_query};
use crate::builder::{CoverageStoreBuilder, StoreOption};
use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::ResourceKind;
use crate::models::{Coverage, CoverageStore, ResourceOption, ResourceRef};
use crate::requester::Requester;
use crate::validate::validate_name;

/// Requester for the coverage stores of one workspace.
#[derive(Debug, Clone)]
pub struct CoverageStores {
    requester: Requester,
    workspace: String,
}

impl CoverageStores {
    pub(crate) fn new(ctx: ConnectionContext, workspace: &str) -> Self {
        Self {
            requester: Requester::nested(
                ctx,
                ResourceKind::CoverageStore,
                &[(ResourceKind::Workspace, workspace)],
            ),
            workspace: workspace.to_owned(),
        }
    }

    pub fn select(&self, name: &str) -> CoverageStoreScope {
        CoverageStoreScope::new(self.clone(), name)
    }

    /// Start a new store. Pick the raster format on the returned builder.
    pub fn create(
        &self,
        name: &str,
        options: impl IntoIterator<Item = StoreOption>,
    ) -> CoverageStoreBuilder {
        CoverageStoreBuilder::new(self.requester.clone(), &self.workspace, name, options)
    }

    pub async fn create_from(&self, store: &CoverageStore) -> Result<(), Error> {
        validate_name(&store.name)?;
        self.requester.create(&store.name, store, &[]).await
    }

    pub async fn get(&self, name: &str) -> Result<CoverageStore, Error> {
        self.requester.get(name).await
    }

    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.requester.get_all().await
    }

    pub async fn update(&self, name: &str, store: &CoverageStore) -> Result<(), Error> {
        validate_name(&store.name)?;
        self.requester.update(name, store).await
    }

    pub async fn delete(&self, name: &str, recurse: bool) -> Result<(), Error> {
        self.requester
            .delete(name, &delete_query(recurse, None))
            .await
    }

    pub async fn delete_with_purge(
        &self,
        name: &str,
        recurse: bool,
        purge: Purge,
    ) -> Result<(), Error> {
        self.requester
            .delete(name, &delete_query(recurse, Some(purge)))
            .await
    }

    pub async fn reset(&self, name: &str) -> Result<(), Error> {
        self.requester.reset(name).await
    }
}

/// A selected coverage store.
#[derive(Debug, Clone)]
pub struct CoverageStoreScope {
    stores: CoverageStores,
    ctx: ConnectionContext,
    name: String,
}

impl CoverageStoreScope {
    fn new(stores: CoverageStores, name: &str) -> Self {
        let ctx = stores.requester.context().with_store(name);
        Self {
            stores,
            ctx,
            name: name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &ConnectionContext {
        &self.ctx
    }

    pub fn coverages(&self) -> Coverages {
        Coverages::new(self.ctx.clone(), &self.stores.workspace, &self.name)
    }

    pub async fn get(&self) -> Result<CoverageStore, Error> {
        self.stores.get(&self.name).await
    }

    /// Publish `name` from this store as a coverage, after checking the
    /// store exists.
    pub async fn publish(
        &self,
        name: &str,
        options: impl IntoIterator<Item = ResourceOption>,
    ) -> Result<(), Error> {
        validate_name(name)?;
        let coverage = Coverage::with_options(name, options);
        self.get().await?;
        debug!(store = %self.name, layer = name, "publishing coverage");
        self.coverages().create(&coverage).await
    }
}
