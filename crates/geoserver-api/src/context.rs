// Connection context threaded through the resource hierarchy.
//
// Each `select`/`workspace` step clones the context and sets one more
// level of scope on the copy. The transport handle is shared (reqwest
// clients are reference-counted), everything else is owned per copy, so
// chains built concurrently off one root never observe each other.

use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::validate::validate_segment;

/// Base URL, credentials, transport and the currently selected
/// workspace / store.
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    workspace: Option<String>,
    store: Option<String>,
}

impl ConnectionContext {
    pub fn new(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            workspace: None,
            store: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Selected workspace, `None` at the root.
    pub fn workspace(&self) -> Option<&str> {
        self.workspace.as_deref()
    }

    /// Selected store, `None` outside a store scope.
    pub fn store(&self) -> Option<&str> {
        self.store.as_deref()
    }

    /// Copy of this context scoped to `name`. Clears any store selection.
    pub fn with_workspace(&self, name: &str) -> Self {
        let mut ctx = self.clone();
        ctx.workspace = Some(name.to_owned());
        ctx.store = None;
        ctx
    }

    /// Copy of this context scoped to store `name` inside the current workspace.
    pub fn with_store(&self, name: &str) -> Self {
        let mut ctx = self.clone();
        ctx.store = Some(name.to_owned());
        ctx
    }

    // ── Request plumbing ────────────────────────────────────────────

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        self.credentials.apply(builder)
    }

    /// `{base}/geoserver/rest/{segments...}`
    pub(crate) fn rest_url(&self, segments: &[&str]) -> Result<Url, Error> {
        self.geoserver_url(&["rest"], segments)
    }

    /// `{base}/geoserver/gwc/rest/{segments...}`
    pub(crate) fn gwc_url(&self, segments: &[&str]) -> Result<Url, Error> {
        self.geoserver_url(&["gwc", "rest"], segments)
    }

    /// `{base}/geoserver[/{workspace}]/{service}` for OGC services.
    pub(crate) fn service_url(&self, service: &str) -> Result<Url, Error> {
        match self.workspace() {
            Some(ws) => self.geoserver_url(&[ws], &[service]),
            None => self.geoserver_url(&[], &[service]),
        }
    }

    /// Segments are pushed one by one, so `/`, `?` and `#` inside a name
    /// are percent-escaped. Blank, `.` and `..` segments are rejected
    /// because normalization would drop or collapse them.
    fn geoserver_url(&self, prefix: &[&str], segments: &[&str]) -> Result<Url, Error> {
        for segment in prefix.iter().chain(segments) {
            validate_segment(segment)?;
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("geoserver")
            .extend(prefix)
            .extend(segments);
        Ok(url)
    }
}
