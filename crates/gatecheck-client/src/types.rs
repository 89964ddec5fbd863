//! Request DTO and client configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of an authorization check.
///
/// Field names on the wire are `ActiveDirectoryId` and `Abilities`, exactly
/// as the service expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// Directory identity being checked.
    #[serde(rename = "ActiveDirectoryId")]
    pub active_directory_id: Uuid,

    /// Ability names the identity is checked against.
    #[serde(rename = "Abilities")]
    pub abilities: Vec<String>,
}

impl AuthorizationRequest {
    pub fn new(
        active_directory_id: Uuid,
        abilities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            active_directory_id,
            abilities: abilities.into_iter().map(Into::into).collect(),
        }
    }

    /// Request for a single ability.
    pub fn single(active_directory_id: Uuid, ability: impl Into<String>) -> Self {
        Self::new(active_directory_id, [ability.into()])
    }

    /// Whether the request is worth sending at all.
    ///
    /// A nil identity or an empty ability list can never be granted, so an
    /// invalid request resolves to "denied" locally.
    pub fn is_valid(&self) -> bool {
        !self.abilities.is_empty() && !self.active_directory_id.is_nil()
    }
}

/// Authorization client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Base URL of the authorization service.
    #[serde(default = "default_authz_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_authz_url() -> String {
    "https://authz.gatecheck.dev/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            base_url: default_authz_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AuthzConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `GATECHECK_AUTHZ_URL` | Authorization service base URL |
    /// | `GATECHECK_AUTHZ_TIMEOUT` | Request timeout in seconds |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GATECHECK_AUTHZ_URL").unwrap_or_else(|_| default_authz_url()),
            timeout_secs: std::env::var("GATECHECK_AUTHZ_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
