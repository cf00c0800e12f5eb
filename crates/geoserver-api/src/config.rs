// ── Runtime connection configuration ──
//
// These types describe *how* to reach a GeoServer instance. They carry
// credential data and connection tuning, but never touch disk; the
// `geoserver-config` crate builds a `ClientConfig` from profiles.

use std::time::Duration;

use url::Url;

use crate::auth::Credentials;
use crate::transport::{TlsMode, TransportConfig};

/// Configuration for connecting to a single GeoServer.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:8080`. REST paths are appended
    /// below `{url}/geoserver/rest`.
    pub url: Url,
    pub credentials: Credentials,
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: Url, credentials: Credentials) -> Self {
        Self {
            url,
            credentials,
            tls: TlsMode::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self.tls.clone(),
            timeout: self.timeout,
        }
    }
}
