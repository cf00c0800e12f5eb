// Data stores
//
// `/rest/workspaces/{ws}/datastores`. Creation goes through
// `DataStoreBuilder`, which knows the connection parameters of each
// supported format.

use tracing::debug;

use super::{FeatureTypes, Purge, delete_query};
use crate::builder::{DataStoreBuilder, StoreOption};
use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::ResourceKind;
use crate::models::{DataStore, FeatureType, ResourceOption, ResourceRef};
use crate::requester::Requester;
use crate::validate::validate_name;

/// Requester for the data stores of one workspace.
#[derive(Debug, Clone)]
pub struct DataStores {
    requester: Requester,
    workspace: String,
}

impl DataStores {
    pub(crate) fn new(ctx: ConnectionContext, workspace: &str) -> Self {
        Self {
            requester: Requester::nested(
                ctx,
                ResourceKind::DataStore,
                &[(ResourceKind::Workspace, workspace)],
            ),
            workspace: workspace.to_owned(),
        }
    }

    /// Enter data store `name`. No request is sent.
    pub fn select(&self, name: &str) -> DataStoreScope {
        DataStoreScope::new(self.clone(), name)
    }

    /// Start a new store. Pick the format on the returned builder.
    pub fn create(
        &self,
        name: &str,
        options: impl IntoIterator<Item = StoreOption>,
    ) -> DataStoreBuilder {
        DataStoreBuilder::new(self.requester.clone(), &self.workspace, name, options)
    }

    /// Create a store from a fully populated payload.
    pub async fn create_from(&self, store: &DataStore) -> Result<(), Error> {
        validate_name(&store.name)?;
        self.requester.create(&store.name, store, &[]).await
    }

    pub async fn get(&self, name: &str) -> Result<DataStore, Error> {
        self.requester.get(name).await
    }

    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.requester.get_all().await
    }

    pub async fn update(&self, name: &str, store: &DataStore) -> Result<(), Error> {
        validate_name(&store.name)?;
        self.requester.update(name, store).await
    }

    pub async fn delete(&self, name: &str, recurse: bool) -> Result<(), Error> {
        self.requester
            .delete(name, &delete_query(recurse, None))
            .await
    }

    /// Delete and also remove files from the data directory.
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

    /// Drop cached connections and schema for the store.
    pub async fn reset(&self, name: &str) -> Result<(), Error> {
        self.requester.reset(name).await
    }
}

/// A selected data store.
#[derive(Debug, Clone)]
pub struct DataStoreScope {
    stores: DataStores,
    ctx: ConnectionContext,
    name: String,
}

impl DataStoreScope {
    fn new(stores: DataStores, name: &str) -> Self {
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

    pub fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::new(self.ctx.clone(), &self.stores.workspace, &self.name)
    }

    /// Fetch the selected store.
    pub async fn get(&self) -> Result<DataStore, Error> {
        self.stores.get(&self.name).await
    }

    /// Publish `name` from this store as a feature type.
    ///
    /// The store is fetched first, so a missing store fails with
    /// `datastore {name} not found` instead of a server 500.
    pub async fn publish(
        &self,
        name: &str,
        options: impl IntoIterator<Item = ResourceOption>,
    ) -> Result<(), Error> {
        validate_name(name)?;
        let feature_type = FeatureType::with_options(name, options);
        self.get().await?;
        debug!(store = %self.name, layer = name, "publishing feature type");
        self.feature_types().create(&feature_type).await
    }
}
