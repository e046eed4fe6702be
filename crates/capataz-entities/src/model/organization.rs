//! Organization and subscription model types

use serde::{Deserialize, Serialize};

/// Organization information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One subscription available to an organization
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub consumed: Option<i64>,
}

/// Synchronization schedule attached to an organization
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncPlan {
    pub id: u64,
    pub name: String,
    pub interval: String,
    #[serde(default)]
    pub sync_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
