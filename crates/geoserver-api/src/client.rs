// GeoServer REST client root
//
// Entry point of the navigation hierarchy. Holds the root connection
// context (no workspace selected) and hands out resource handles. Handles
// and scopes clone the context, so any number of chains can be built off
// one root concurrently.

use url::Url;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::context::ConnectionContext;
use crate::error::Error;
use crate::resources::{
    About, Fonts, GeoWebCache, LayerGroups, Logging, Styles, Wms, WorkspaceScope, Workspaces,
};

/// Typed client for a GeoServer instance.
#[derive(Debug, Clone)]
pub struct GeoServer {
    ctx: ConnectionContext,
}

impl GeoServer {
    /// Build a client with its own HTTP transport from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let http = config.transport().build_client()?;
        Ok(Self::with_client(
            http,
            config.url.clone(),
            config.credentials.clone(),
        ))
    }

    /// Build a client with the default transport settings.
    pub fn new(base_url: Url, credentials: Credentials) -> Result<Self, Error> {
        Self::from_config(&ClientConfig::new(base_url, credentials))
    }

    /// Build a client around an existing `reqwest::Client`.
    ///
    /// `base_url` is the server root (e.g. `http://localhost:8080`); REST
    /// calls go to `{base_url}/geoserver/rest`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            ctx: ConnectionContext::new(http, base_url, credentials),
        }
    }

    pub fn context(&self) -> &ConnectionContext {
        &self.ctx
    }

    pub fn workspaces(&self) -> Workspaces {
        Workspaces::new(self.ctx.clone())
    }

    /// Shorthand for `workspaces().select(name)`.
    pub fn workspace(&self, name: &str) -> WorkspaceScope {
        self.workspaces().select(name)
    }

    /// Root-level layer groups.
    pub fn layer_groups(&self) -> LayerGroups {
        LayerGroups::new(self.ctx.clone())
    }

    /// Global styles.
    pub fn styles(&self) -> Styles {
        Styles::new(self.ctx.clone())
    }

    pub fn fonts(&self) -> Fonts {
        Fonts::new(self.ctx.clone())
    }

    pub fn logging(&self) -> Logging {
        Logging::new(self.ctx.clone())
    }

    pub fn about(&self) -> About {
        About::new(self.ctx.clone())
    }

    /// Tile cache with fully qualified layer names.
    pub fn geo_web_cache(&self) -> GeoWebCache {
        GeoWebCache::new(self.ctx.clone())
    }

    /// The global WMS endpoint.
    pub fn wms(&self) -> Wms {
        Wms::new(self.ctx.clone())
    }
}
