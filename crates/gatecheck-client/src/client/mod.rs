//! Authorization client for ability checks.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::endpoint::check_url;
use crate::error::{AuthzError, AuthzResult};
use crate::types::{AuthorizationRequest, AuthzConfig};

mod http;

use http::{CheckOutcome, HttpBackend};

const USER_AGENT_VALUE: &str = concat!("gatecheck-client/", env!("CARGO_PKG_VERSION"));

/// Client for the ability authorization service.
#[derive(Debug, Clone)]
pub struct AuthzClient {
    http: HttpBackend,
}

impl AuthzClient {
    pub fn new(config: AuthzConfig) -> AuthzResult<Self> {
        let endpoint = check_url(&config.base_url)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| AuthzError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http: HttpBackend {
                client,
                check_url: endpoint,
            },
        })
    }

    pub fn from_env() -> AuthzResult<Self> {
        Self::new(AuthzConfig::from_env())
    }

    /// Whether the identity holds a single named ability.
    pub async fn is_authorized_for(
        &self,
        active_directory_id: Uuid,
        ability: &str,
    ) -> AuthzResult<bool> {
        self.check(&AuthorizationRequest::single(active_directory_id, ability))
            .await
    }

    /// Whether the identity holds the named abilities.
    pub async fn is_authorized(
        &self,
        active_directory_id: Uuid,
        abilities: impl IntoIterator<Item = impl Into<String>>,
    ) -> AuthzResult<bool> {
        self.check(&AuthorizationRequest::new(active_directory_id, abilities))
            .await
    }

    /// Run a pre-built authorization check.
    ///
    /// Invalid requests (empty ability list, nil identity) are denied
    /// locally without any network I/O.
    pub async fn check(&self, request: &AuthorizationRequest) -> AuthzResult<bool> {
        if !request.is_valid() {
            debug!(
                id = %request.active_directory_id,
                abilities = request.abilities.len(),
                "invalid check request denied locally"
            );
            return Ok(false);
        }

        debug!(url = %self.http.check_url, "posting ability check");

        match self.http.post_check(request).await? {
            CheckOutcome::Granted => Ok(true),
            CheckOutcome::Denied(_) => Ok(false),
        }
    }

    /// Resolved check endpoint, for diagnostics.
    pub fn endpoint(&self) -> &Url {
        &self.http.check_url
    }
}
