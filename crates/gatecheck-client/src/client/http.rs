//! HTTP layer: status mapping, CheckOutcome.
//!
//! This is the ONLY place for status code handling. client/mod.rs never
//! interprets status codes.

use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::error::{AuthzError, AuthzResult};
use crate::types::AuthorizationRequest;

/// Outcome of an ability check as reported by the service.
#[derive(Debug)]
pub(crate) enum CheckOutcome {
    Granted,
    Denied(StatusCode),
}

/// HTTP backend for making requests (holds reqwest client and the resolved
/// check URL).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) check_url: Url,
}

impl HttpBackend {
    /// POST one ability check; map the status to an outcome.
    pub(crate) async fn post_check(
        &self,
        request: &AuthorizationRequest,
    ) -> AuthzResult<CheckOutcome> {
        let response = self
            .client
            .post(self.check_url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            200..=299 => {
                // Drain the body so the connection is released.
                let _ = response.text().await;
                Ok(CheckOutcome::Granted)
            }

            500 => {
                let headers = response
                    .headers()
                    .iter()
                    .map(|(name, value)| {
                        (
                            name.as_str().to_string(),
                            String::from_utf8_lossy(value.as_bytes()).into_owned(),
                        )
                    })
                    .collect();
                let body = response.text().await.unwrap_or_else(|_| String::new());

                Err(AuthzError::Service {
                    status: status.as_u16(),
                    body,
                    headers,
                })
            }

            _ => {
                let _ = response.text().await;
                debug!(status = status.as_u16(), "check denied by status");
                Ok(CheckOutcome::Denied(status))
            }
        }
    }
}
