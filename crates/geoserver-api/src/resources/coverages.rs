use super::delete_query;
use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::ResourceKind;
use crate::models::{Coverage, ResourceRef};
use crate::requester::Requester;
use crate::validate::validate_name;

/// Requester for the coverages of one coverage store.
#[derive(Debug, Clone)]
pub struct Coverages {
    requester: Requester,
}

impl Coverages {
    pub(crate) fn new(ctx: ConnectionContext, workspace: &str, store: &str) -> Self {
        Self {
            requester: Requester::nested(
                ctx,
                ResourceKind::Coverage,
                &[
                    (ResourceKind::Workspace, workspace),
                    (ResourceKind::CoverageStore, store),
                ],
            ),
        }
    }

    pub async fn create(&self, coverage: &Coverage) -> Result<(), Error> {
        validate_name(coverage.name())?;
        self.requester.create(coverage.name(), coverage, &[]).await
    }

    pub async fn get(&self, name: &str) -> Result<Coverage, Error> {
        self.requester.get(name).await
    }

    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.requester.get_all().await
    }

    /// Every coverage name the store's reader exposes, published or not.
    pub async fn available(&self) -> Result<Vec<String>, Error> {
        self.requester
            .list(&[("list", "all".to_owned())], "list", "string")
            .await
    }

    pub async fn update(&self, name: &str, coverage: &Coverage) -> Result<(), Error> {
        self.requester.update(name, coverage).await
    }

    pub async fn delete(&self, name: &str, recurse: bool) -> Result<(), Error> {
        self.requester
            .delete(name, &delete_query(recurse, None))
            .await
    }

    pub async fn reset(&self, name: &str) -> Result<(), Error> {
        self.requester.reset(name).await
    }
}
