// Layer groups
//
// Root-level (`/rest/layergroups`) or workspace-local
// (`/rest/workspaces/{ws}/layergroups`), depending on the context the
// handle was created from.

use tracing::debug;

use crate::builder::LayerGroupBuilder;
use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::ResourceKind;
use crate::models::{LayerGroup, ResourceRef};
use crate::requester::Requester;
use crate::resources::delete_query;

#[derive(Debug, Clone)]
pub struct LayerGroups {
    requester: Requester,
}

impl LayerGroups {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        let requester = match ctx.workspace().map(str::to_owned) {
            Some(ws) => Requester::nested(
                ctx,
                ResourceKind::LayerGroup,
                &[(ResourceKind::Workspace, &ws)],
            ),
            None => Requester::root(ctx, ResourceKind::LayerGroup),
        };
        Self { requester }
    }

    /// Workspace the groups live in, `None` at the root.
    pub fn workspace(&self) -> Option<&str> {
        self.requester.context().workspace()
    }

    /// Start assembling group `name`.
    pub fn builder(&self, name: &str) -> LayerGroupBuilder {
        LayerGroupBuilder::new(self.clone(), name)
    }

    /// Create a group. Name and publishable/style parity are checked
    /// before anything is sent.
    pub async fn create(&self, group: &LayerGroup) -> Result<(), Error> {
        group.validate()?;
        debug!(
            name = %group.name,
            members = group.published().len(),
            "creating layer group"
        );
        self.requester.create(&group.name, group, &[]).await
    }

    pub async fn get(&self, name: &str) -> Result<LayerGroup, Error> {
        self.requester.get(name).await
    }

    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.requester.get_all().await
    }

    pub async fn update(&self, name: &str, group: &LayerGroup) -> Result<(), Error> {
        group.validate()?;
        self.requester.update(name, group).await
    }

    /// Members are left in place unless `recurse` is set.
    pub async fn delete(&self, name: &str, recurse: bool) -> Result<(), Error> {
        self.requester.delete(name, &delete_query(recurse, None)).await
    }
}
