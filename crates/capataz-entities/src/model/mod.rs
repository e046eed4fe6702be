//! Model types for server API responses

pub mod access;
pub mod common;
pub mod content;
pub mod organization;
pub mod task;

pub use access::Permission;
pub use common::{PingStatus, SearchResults};
pub use content::{ContentView, ContentViewVersion, Product, Repository, RepositorySet};
pub use organization::{Organization, Subscription, SyncPlan};
pub use task::TaskInfo;
