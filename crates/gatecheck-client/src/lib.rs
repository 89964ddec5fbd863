//! Client for the gatecheck ability authorization service.
//!
//! Asks a remote authorization service whether a directory identity (an
//! Active Directory GUID) holds one or more named abilities. One JSON POST
//! per check; the HTTP status code carries the decision.
//!
//! # Quick Start
//!
//! ```no_run
//! use gatecheck_client::{AuthzClient, AuthzConfig};
//! use uuid::Uuid;
//!
//! # async fn example() -> gatecheck_client::AuthzResult<()> {
//! let client = AuthzClient::new(AuthzConfig::from_env())?;
//!
//! let id = Uuid::parse_str("7f9e8d3e-1d58-4b49-8d38-084dccd5b803").unwrap();
//! if client.is_authorized_for(id, "wss superuser").await? {
//!     println!("granted");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Decision semantics
//!
//! - Any 2xx response grants.
//! - HTTP 500 fails with [`AuthzError::Service`] carrying the raw response.
//! - Any other status denies.
//! - Network-level failures fail with [`AuthzError::Transport`] so callers
//!   can tell "denied" from "could not determine".
//! - Requests with an empty ability list or a nil identity are denied
//!   locally, without any network I/O.
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `GATECHECK_AUTHZ_URL` | Authorization service base URL (default: `https://authz.gatecheck.dev/v1`) |
//! | `GATECHECK_AUTHZ_TIMEOUT` | Request timeout in seconds (default: 30) |

pub mod client;
pub mod endpoint;
pub mod error;
pub mod types;

pub use client::AuthzClient;
pub use endpoint::check_url;
pub use error::{AuthzError, AuthzResult};
pub use types::{AuthorizationRequest, AuthzConfig};
