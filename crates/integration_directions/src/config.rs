//! Directions service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OSRM directions service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL of the OSRM server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ask the server for alternative routes
    #[serde(default = "default_alternatives")]
    pub alternatives: bool,

    /// Cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,
}

fn default_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_alternatives() -> bool {
    true
}

const fn default_cache_ttl_minutes() -> u32 {
    5
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            alternatives: default_alternatives(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
