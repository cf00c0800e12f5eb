// Styles
//
// Style metadata is JSON, the style body is SLD. Creating or updating a
// style sends the SLD document directly; GeoServer derives the metadata.

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::{Operation, ResourceKind};
use crate::models::{ResourceRef, Style};
use crate::requester::Requester;
use crate::validate::{validate_name, validate_segment};

/// Content type of SLD 1.0 documents.
pub const SLD_CONTENT_TYPE: &str = "application/vnd.ogc.sld+xml";

#[derive(Debug, Clone)]
pub struct Styles {
    requester: Requester,
}

impl Styles {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        let requester = match ctx.workspace().map(str::to_owned) {
            Some(ws) => {
                Requester::nested(ctx, ResourceKind::Style, &[(ResourceKind::Workspace, &ws)])
            }
            None => Requester::root(ctx, ResourceKind::Style),
        };
        Self { requester }
    }

    /// Create style `name` from an SLD document.
    pub async fn create(&self, name: &str, sld: impl Into<String>) -> Result<(), Error> {
        validate_name(name)?;
        let sld = non_empty_sld(sld)?;
        debug!(name, "creating style");
        self.requester
            .create_raw(name, SLD_CONTENT_TYPE, sld, &[("name", name.to_owned())])
            .await
    }

    pub async fn get(&self, name: &str) -> Result<Style, Error> {
        self.requester.get(name).await
    }

    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.requester.get_all().await
    }

    /// Raw SLD body of style `name`.
    pub async fn sld(&self, name: &str) -> Result<String, Error> {
        validate_segment(name)?;
        let url = self.requester.item_url(&format!("{name}.sld"), &[])?;
        debug!("GET {url}");

        let request = self
            .requester
            .context()
            .http()
            .get(url)
            .header(ACCEPT, SLD_CONTENT_TYPE);
        self.requester
            .execute_text(Operation::Get, name, request)
            .await
    }

    /// Replace the SLD body of style `name`.
    pub async fn update(&self, name: &str, sld: impl Into<String>) -> Result<(), Error> {
        let sld = non_empty_sld(sld)?;
        self.requester
            .update_raw(name, SLD_CONTENT_TYPE, sld)
            .await
    }

    /// `purge` removes the SLD file as well; `recurse` detaches the style
    /// from layers that use it.
    pub async fn delete(&self, name: &str, purge: bool, recurse: bool) -> Result<(), Error> {
        self.requester
            .delete(
                name,
                &[("purge", purge.to_string()), ("recurse", recurse.to_string())],
            )
            .await
    }
}

fn non_empty_sld(sld: impl Into<String>) -> Result<String, Error> {
    let sld = sld.into();
    if sld.trim().is_empty() {
        return Err(Error::input("style body cannot be empty"));
    }
    Ok(sld)
}
