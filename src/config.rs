/// Client configuration for the SpaceTraders API.
use std::time::Duration;

/// Production API origin, version prefix included.
pub const API_BASE: &str = "https://api.spacetraders.io/v2";

/// Configuration for [`StApi`](crate::api::StApi).
///
/// A plain struct: take the default, override what you need, pass it in.
/// `api_base` points at a mock server in tests; `http` swaps the
/// underlying transport entirely.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Origin plus version prefix, no trailing slash.
    pub api_base: String,
    /// Upper bound on a single call, connect through body read. Ignored
    /// when `http` supplies a pre-built transport.
    pub timeout: Duration,
    /// Underlying transport. `None` builds a standard pooling client.
    pub http: Option<reqwest::Client>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE.into(),
            timeout: Duration::from_secs(30),
            http: None,
        }
    }
}

impl ApiConfig {
    /// Configuration pointing at `base`, for tests against a local server.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            api_base: base.into(),
            ..Self::default()
        }
    }
}
