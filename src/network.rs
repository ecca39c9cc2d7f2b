//! Network URL constants.

use crate::auth::ApiVersion;

/// Default host for the Bittrex REST API.
pub const DEFAULT_API_HOST: &str = "https://bittrex.com";

/// Derive the versioned base URL, e.g. `https://bittrex.com/api/v1.1`.
pub(crate) fn base_url(host: &str, version: ApiVersion) -> String {
    format!("{}/api/v{}", host.trim_end_matches('/'), version.as_str())
}
