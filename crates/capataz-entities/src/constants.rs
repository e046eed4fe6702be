//! API path constants following the server's route layout

pub mod api_path {
    // Provisioning API
    pub const ARCHITECTURES: &str = "api/v2/architectures";
    pub const HOSTS: &str = "api/v2/hosts";
    pub const PERMISSIONS: &str = "api/v2/permissions";
    pub const SMART_PROXIES: &str = "api/v2/smart_proxies";
    pub const USERS: &str = "api/v2/users";

    // Content API
    pub const ACTIVATION_KEYS: &str = "katello/api/v2/activation_keys";
    pub const CONTENT_VIEWS: &str = "katello/api/v2/content_views";
    pub const CONTENT_VIEW_VERSIONS: &str = "katello/api/v2/content_view_versions";
    pub const GPG_KEYS: &str = "katello/api/v2/gpg_keys";
    pub const HOST_COLLECTIONS: &str = "katello/api/v2/host_collections";
    pub const LIFECYCLE_ENVIRONMENTS: &str = "katello/api/v2/environments";
    pub const ORGANIZATIONS: &str = "katello/api/v2/organizations";
    pub const PING: &str = "katello/api/v2/ping";
    pub const PRODUCTS: &str = "katello/api/v2/products";
    pub const REPOSITORIES: &str = "katello/api/v2/repositories";
    pub const STATUS: &str = "katello/api/v2/status";
    pub const SYSTEMS: &str = "katello/api/v2/systems";

    // Asynchronous tasks
    pub const TASKS: &str = "foreman_tasks/api/tasks";
}
