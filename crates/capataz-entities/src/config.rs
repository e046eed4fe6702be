//! Configuration for the satellite facade client

use capataz_client::HttpClientConfig;

use crate::descriptor::ServerMode;

/// Configuration for [`crate::SatelliteClient`]
#[derive(Clone, Debug)]
pub struct SatelliteConfig {
    /// Server base URL (e.g. "https://satellite.example.com")
    pub base_url: String,
    /// Username for basic authentication
    pub username: String,
    /// Password for basic authentication
    pub password: String,
    /// Verify the server TLS certificate
    pub verify_tls: bool,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Deployment flavor of the target server
    pub server_mode: ServerMode,
    /// Delay between task status probes in milliseconds (default: 5000)
    pub task_poll_interval_ms: u64,
    /// Maximum time to wait for a task in milliseconds (default: 120000)
    pub task_poll_timeout_ms: u64,
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            username: "admin".to_string(),
            password: "changeme".to_string(),
            verify_tls: false,
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            server_mode: ServerMode::Sat,
            task_poll_interval_ms: 5000,
            task_poll_timeout_ms: 120_000,
        }
    }
}

impl SatelliteConfig {
    /// Create a new config for a server base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Set authentication credentials
    pub fn with_auth(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    /// Set the deployment flavor
    pub fn with_server_mode(mut self, mode: ServerMode) -> Self {
        self.server_mode = mode;
        self
    }

    /// Set task polling cadence and deadline
    pub fn with_task_polling(mut self, interval_ms: u64, timeout_ms: u64) -> Self {
        self.task_poll_interval_ms = interval_ms;
        self.task_poll_timeout_ms = timeout_ms;
        self
    }

    /// Enable or disable TLS certificate verification
    pub fn with_tls_verification(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    pub(crate) fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::new(&self.base_url)
            .with_auth(&self.username, &self.password)
            .with_timeouts(self.connect_timeout_ms, self.read_timeout_ms)
            .with_tls_verification(self.verify_tls)
    }
}
