// Server-level resources: logging, fonts, about
//
// Loosely modelled; only the commonly needed fields are explicit.

use serde::{Deserialize, Serialize};

/// Logging settings (`{"logging": {...}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Logging profile, e.g. `DEFAULT_LOGGING`, `VERBOSE_LOGGING`.
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub std_out_logging: bool,
}

/// One component of `/about/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResource {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "Version", default)]
    pub version: Option<String>,
    #[serde(rename = "Build-Timestamp", default)]
    pub build_timestamp: Option<String>,
    #[serde(rename = "Git-Revision", default)]
    pub git_revision: Option<String>,
}

/// One module entry of `/about/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStatus {
    pub module: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub message: Option<String>,
}
