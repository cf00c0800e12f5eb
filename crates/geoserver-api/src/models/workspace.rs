use serde::{Deserialize, Serialize};

/// A workspace as returned by `GET /workspaces/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolated: Option<bool>,
    /// Links to nested collections, only present in responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_stores: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_stores: Option<String>,
}

impl Workspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            isolated: None,
            data_stores: None,
            coverage_stores: None,
        }
    }
}
