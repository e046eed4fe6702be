//! User access model types

use serde::{Deserialize, Serialize};

/// A single grantable permission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Permission {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub resource_type: Option<String>,
}
