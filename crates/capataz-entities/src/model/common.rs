//! Common model types

use serde::{Deserialize, Serialize};

/// Generic index-endpoint envelope
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResults<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub subtotal: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Reply of the ping endpoint, listing backend service health
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PingStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub services: serde_json::Map<String, serde_json::Value>,
}

impl PingStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
