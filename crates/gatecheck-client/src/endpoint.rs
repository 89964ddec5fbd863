//! Check endpoint composition.
//!
//! The service exposes the ability check at `<base>/v1/providers/activedirectory`.
//! Bases are composed structurally from path segments, so trailing slashes
//! are irrelevant and the version segment is never duplicated.

use url::Url;

use crate::error::{AuthzError, AuthzResult};

/// Fixed relative path of the ability check resource.
pub const CHECK_SEGMENTS: [&str; 2] = ["providers", "activedirectory"];

/// API version segment inserted when the base URL carries none.
pub const VERSION_SEGMENT: &str = "v1";

/// Resolve the ability check URL for a service base URL.
///
/// `http://host/v1` and `http://host/v1/` both resolve to
/// `http://host/v1/providers/activedirectory`; a base without a version
/// segment gains one.
pub fn check_url(base: &str) -> AuthzResult<Url> {
    let mut url = Url::parse(base).map_err(|e| AuthzError::Config {
        message: format!("invalid base URL {base:?}: {e}"),
    })?;

    {
        let mut segments = url.path_segments_mut().map_err(|()| AuthzError::Config {
            message: format!("base URL {base:?} cannot carry path segments"),
        })?;
        segments.pop_if_empty();
    }

    let has_version = url
        .path_segments()
        .is_some_and(|mut segments| segments.any(|segment| segment == VERSION_SEGMENT));

    {
        // Checked above, the URL is known to be a base.
        let mut segments = url.path_segments_mut().map_err(|()| AuthzError::Config {
            message: format!("base URL {base:?} cannot carry path segments"),
        })?;
        if !has_version {
            segments.push(VERSION_SEGMENT);
        }
        segments.extend(CHECK_SEGMENTS);
    }

    Ok(url)
}
