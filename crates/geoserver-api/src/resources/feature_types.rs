use super::delete_query;
use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::ResourceKind;
use crate::models::{FeatureType, ResourceRef};
use crate::requester::Requester;
use crate::validate::validate_name;

/// Requester for the feature types of one data store
/// (`/rest/workspaces/{ws}/datastores/{ds}/featuretypes`).
#[derive(Debug, Clone)]
pub struct FeatureTypes {
    requester: Requester,
}

impl FeatureTypes {
    pub(crate) fn new(ctx: ConnectionContext, workspace: &str, store: &str) -> Self {
        Self {
            requester: Requester::nested(
                ctx,
                ResourceKind::FeatureType,
                &[
                    (ResourceKind::Workspace, workspace),
                    (ResourceKind::DataStore, store),
                ],
            ),
        }
    }

    pub async fn create(&self, feature_type: &FeatureType) -> Result<(), Error> {
        validate_name(feature_type.name())?;
        self.requester
            .create(feature_type.name(), feature_type, &[])
            .await
    }

    pub async fn get(&self, name: &str) -> Result<FeatureType, Error> {
        self.requester.get(name).await
    }

    /// Published feature types of the store.
    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.requester.get_all().await
    }

    /// Native type names in the store that are not published yet.
    pub async fn available(&self) -> Result<Vec<String>, Error> {
        self.requester
            .list(&[("list", "available".to_owned())], "list", "string")
            .await
    }

    pub async fn update(&self, name: &str, feature_type: &FeatureType) -> Result<(), Error> {
        self.requester.update(name, feature_type).await
    }

    /// With `recurse`, the layer published from the type goes too.
    pub async fn delete(&self, name: &str, recurse: bool) -> Result<(), Error> {
        self.requester
            .delete(name, &delete_query(recurse, None))
            .await
    }

    /// Re-read the native schema and bounds.
    pub async fn reset(&self, name: &str) -> Result<(), Error> {
        self.requester.reset(name).await
    }
}
