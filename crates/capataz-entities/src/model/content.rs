//! Content management model types

use serde::{Deserialize, Serialize};

/// Product information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub organization_id: Option<u64>,
    #[serde(default)]
    pub repository_count: Option<u64>,
}

/// A set of repositories shipped within a product
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepositorySet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub content_url: Option<String>,
}

/// Repository information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub product_id: Option<u64>,
}

/// Content view information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentView {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub composite: Option<bool>,
    #[serde(default)]
    pub organization_id: Option<u64>,
    #[serde(default)]
    pub repository_ids: Vec<u64>,
}

/// A published version of a content view
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentViewVersion {
    pub id: u64,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub content_view_id: Option<u64>,
    #[serde(default)]
    pub environment_ids: Vec<u64>,
}
