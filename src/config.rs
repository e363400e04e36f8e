//! Client configuration for the Heroku Platform API.
//!
//! Holds the auth token and the resolved base URL, plus the fixed protocol
//! values (Accept version pin, user-agent) every request carries.

use std::env;

use url::Url;

use crate::error::HerokuError;

/// Default Heroku Platform API endpoint.
pub const HEROKU_API_BASE_URL: &str = "https://api.heroku.com";

/// Environment variable that overrides the API base URL.
pub const HEROKU_API_URL_ENV: &str = "HEROKU_API_URL";

/// Fixed `Accept` value pinning the Platform API revision.
pub const HEROKU_ACCEPT: &str = "application/vnd.heroku+json; version=edge";

/// Fixed `User-Agent` sent with every request.
pub const HEROKU_USER_AGENT: &str = "hbuild/1";

/// Immutable configuration for [`HerokuClient`](crate::client::HerokuClient).
///
/// The base URL is resolved once at construction: `HEROKU_API_URL` when set
/// and non-empty, otherwise [`HEROKU_API_BASE_URL`]. The raw string is kept
/// as-is (no normalization) so request URLs are exact concatenations of
/// base URL and path.
#[derive(Debug, Clone)]
pub struct HerokuConfig {
    /// API token, sent as the basic-auth password with an empty username.
    pub token: String,
    /// Base URL requests are appended to. Validated, stored unnormalized.
    pub base_url: String,
}

impl HerokuConfig {
    /// Create a configuration with the given API token.
    ///
    /// The token is taken as-is; no validation is performed on it. The base
    /// URL comes from `HEROKU_API_URL` when set and non-empty, otherwise the
    /// default endpoint.
    ///
    /// ## Errors
    ///
    /// Returns `HerokuError::InvalidBaseUrl` if the override is not a
    /// syntactically valid URL.
    pub fn new(token: impl Into<String>) -> Result<Self, HerokuError> {
        let base_url = env::var(HEROKU_API_URL_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| HEROKU_API_BASE_URL.to_string());

        Self {
            token: token.into(),
            base_url: String::new(),
        }
        .with_base_url(base_url)
    }

    /// Replace the base URL, validating it first.
    ///
    /// Useful for tests and for pointing the client at a non-default
    /// endpoint without going through the environment.
    ///
    /// ## Errors
    ///
    /// Returns `HerokuError::InvalidBaseUrl` if the value does not parse as
    /// a URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, HerokuError> {
        let base_url = base_url.into();
        if let Err(source) = Url::parse(&base_url) {
            return Err(HerokuError::InvalidBaseUrl {
                value: base_url,
                source,
            });
        }
        self.base_url = base_url;
        Ok(self)
    }
}
