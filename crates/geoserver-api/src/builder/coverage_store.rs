use tracing::debug;

use super::{StoreOption, StoreSettings, file_url};
use crate::error::Error;
use crate::models::{CoverageStore, ResourceRef};
use crate::requester::Requester;
use crate::validate::{
    validate_arcgrid, validate_directory, validate_geotiff, validate_name, validate_world_image,
};

/// Pending coverage store creation. Consumed by the format method.
#[derive(Debug)]
pub struct CoverageStoreBuilder {
    requester: Requester,
    workspace: String,
    name: String,
    settings: StoreSettings,
}

impl CoverageStoreBuilder {
    pub(crate) fn new(
        requester: Requester,
        workspace: &str,
        name: &str,
        options: impl IntoIterator<Item = StoreOption>,
    ) -> Self {
        Self {
            requester,
            workspace: workspace.to_owned(),
            name: name.to_owned(),
            settings: StoreSettings::from_options(options),
        }
    }

    pub async fn geotiff(self, path: &str) -> Result<(), Error> {
        validate_geotiff(path)?;
        let store = self.store("GeoTIFF", path)?;
        self.send(store).await
    }

    /// ESRI ASCII grid.
    pub async fn arcgrid(self, path: &str) -> Result<(), Error> {
        validate_arcgrid(path)?;
        let store = self.store("ArcGrid", path)?;
        self.send(store).await
    }

    /// Plain image with a world file next to it.
    pub async fn world_image(self, path: &str) -> Result<(), Error> {
        validate_world_image(path)?;
        let store = self.store("WorldImage", path)?;
        self.send(store).await
    }

    /// Mosaic over a server-side directory of granules.
    pub async fn image_mosaic(self, directory: &str) -> Result<(), Error> {
        validate_directory(directory)?;
        let store = self.store("ImageMosaic", directory)?;
        self.send(store).await
    }

    #[allow(clippy::unused_async)]
    pub async fn image_pyramid(self, _directory: &str) -> Result<(), Error> {
        Err(Error::not_implemented(
            "ImagePyramid coverage stores are not implemented",
        ))
    }

    #[allow(clippy::unused_async)]
    pub async fn gtopo30(self, _path: &str) -> Result<(), Error> {
        Err(Error::not_implemented(
            "GTOPO30 coverage stores are not implemented",
        ))
    }

    pub(crate) fn store(&self, store_type: &str, path: &str) -> Result<CoverageStore, Error> {
        validate_name(&self.name)?;
        Ok(CoverageStore {
            description: self.settings.description.clone(),
            store_type: Some(store_type.to_owned()),
            enabled: Some(self.settings.enabled),
            workspace: Some(ResourceRef::new(self.workspace.as_str())),
            url: Some(file_url(path)),
            disable_on_conn_failure: self.settings.disable_on_conn_failure,
            ..CoverageStore::new(self.name.as_str())
        })
    }

    async fn send(self, store: CoverageStore) -> Result<(), Error> {
        debug!(
            workspace = %self.workspace,
            name = %self.name,
            store_type = store.store_type.as_deref().unwrap_or_default(),
            "creating coverage store"
        );
        self.requester.create(&self.name, &store, &[]).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::SecretString;
    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::auth::Credentials;
    use crate::context::ConnectionContext;
    use crate::kind::ResourceKind;

    fn builder(options: Vec<StoreOption>) -> CoverageStoreBuilder {
        let ctx = ConnectionContext::new(
            reqwest::Client::new(),
            Url::parse("http://localhost:8080").unwrap(),
            Credentials::new("admin", SecretString::from("geoserver".to_owned())),
        );
        let requester = Requester::nested(
            ctx,
            ResourceKind::CoverageStore,
            &[(ResourceKind::Workspace, "PLAYGROUND")],
        );
        CoverageStoreBuilder::new(requester, "PLAYGROUND", "dem", options)
    }

    #[test]
    fn geotiff_payload() {
        let store = builder(vec![StoreOption::Description("elevation".into())])
            .store("GeoTIFF", "/data/dem.tif")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&store).unwrap(),
            json!({
                "name": "dem",
                "description": "elevation",
                "type": "GeoTIFF",
                "enabled": true,
                "workspace": { "name": "PLAYGROUND" },
                "url": "file:/data/dem.tif"
            })
        );
    }

    #[test]
    fn invalid_store_name_is_rejected() {
        let mut builder = builder(vec![]);
        builder.name = "dem!".into();
        let err = builder.store("GeoTIFF", "/data/dem.tif").unwrap_err();
        assert_eq!(
            err.to_string(),
            "name can only contain alphanumerical characters"
        );
    }
}
