// Server-wide singletons: logging, fonts, about
//
// These have no collection and no name; each maps to one fixed path.

use crate::context::ConnectionContext;
use crate::envelope::{self, OneOrMany};
use crate::error::Error;
use crate::kind::ResourceKind;
use crate::models::{LoggingConfig, ModuleStatus, VersionResource};
use crate::requester::Requester;

/// `/rest/logging`
#[derive(Debug, Clone)]
pub struct Logging {
    requester: Requester,
}

impl Logging {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        Self {
            requester: Requester::root(ctx, ResourceKind::Logging),
        }
    }

    pub async fn get(&self) -> Result<LoggingConfig, Error> {
        let body = self.requester.get_singleton_text(&["logging"]).await?;
        envelope::decode_item(&body, "logging")
    }

    pub async fn update(&self, config: &LoggingConfig) -> Result<(), Error> {
        if config.level.trim().is_empty() {
            return Err(Error::input("logging level cannot be empty"));
        }
        self.requester.update_singleton(&["logging"], config).await
    }
}

/// `/rest/fonts`
#[derive(Debug, Clone)]
pub struct Fonts {
    requester: Requester,
}

impl Fonts {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        Self {
            requester: Requester::root(ctx, ResourceKind::Fonts),
        }
    }

    /// Font family names known to the server's JVM.
    pub async fn get_all(&self) -> Result<Vec<String>, Error> {
        let body = self.requester.get_singleton_text(&["fonts"]).await?;
        let fonts: OneOrMany<String> = envelope::decode_item(&body, "fonts")?;
        Ok(fonts.into_vec())
    }
}

/// `/rest/about/*`
#[derive(Debug, Clone)]
pub struct About {
    requester: Requester,
}

impl About {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        Self {
            requester: Requester::root(ctx, ResourceKind::About),
        }
    }

    /// Versions of GeoServer, GeoTools and GeoWebCache.
    pub async fn version(&self) -> Result<Vec<VersionResource>, Error> {
        let body = self
            .requester
            .get_singleton_text(&["about", "version"])
            .await?;
        envelope::decode_collection(&body, "about", "resource")
    }

    /// Per-module status page. The envelope really is spelled `statuss`.
    pub async fn status(&self) -> Result<Vec<ModuleStatus>, Error> {
        let body = self
            .requester
            .get_singleton_text(&["about", "status"])
            .await?;
        envelope::decode_collection(&body, "statuss", "status")
    }
}
