//! Generic request dispatch against the Heroku Platform API.
//!
//! `HerokuClient` performs one HTTP round-trip per call: compose the URL,
//! serialize the optional body, attach credentials and the fixed headers,
//! execute, then decode either the typed success payload or the structured
//! error payload. No retries, no caching, no cross-call state.

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{HEROKU_ACCEPT, HEROKU_USER_AGENT, HerokuConfig};
use crate::error::{ApiErrorPayload, HerokuError};

/// Client for the Heroku Platform API.
///
/// Holds immutable configuration and a shared `reqwest::Client`. Cloning is
/// cheap and clones share the underlying connection pool, so a single value
/// can serve sequential or concurrent calls without locking.
#[derive(Debug, Clone)]
pub struct HerokuClient {
    config: HerokuConfig,
    http: Client,
}

impl HerokuClient {
    /// Create a client with a default HTTP transport.
    pub fn new(config: HerokuConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a client with a caller-supplied transport.
    ///
    /// This is the injection point for timeouts, proxies, or any other
    /// transport-level configuration; the library sets none itself.
    pub fn with_client(config: HerokuConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &HerokuConfig {
        &self.config
    }

    /// Perform a request and decode the response into `T`.
    ///
    /// The effective URL is the configured base URL with `path` appended
    /// verbatim (no escaping, no normalization). When `body` is present it
    /// is serialized to JSON before any I/O and sent with
    /// `Content-Type: application/json`. Credentials go out as HTTP basic
    /// auth with an empty username and the token as password.
    ///
    /// Statuses in 200–299 are success and the body is decoded into `T`.
    /// Every other status is failure: the body is decoded as the Platform
    /// API error payload and returned as [`HerokuError::Api`].
    ///
    /// ## Errors
    ///
    /// - `HerokuError::Serialize` if the body cannot be encoded
    /// - `HerokuError::Http` for request construction or transport failures
    /// - `HerokuError::Decode` if a success or error body is not valid JSON
    ///   of the expected shape
    /// - `HerokuError::Api` for a non-2xx response with a decodable payload
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, HerokuError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);

        let payload = match body {
            Some(body) => Some(serde_json::to_vec(body).map_err(HerokuError::Serialize)?),
            None => None,
        };

        debug!(
            method = %method,
            url = %url,
            has_body = payload.is_some(),
            "Dispatching Platform API request"
        );

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth("", Some(&self.config.token))
            .header(ACCEPT, HEROKU_ACCEPT)
            .header(USER_AGENT, HEROKU_USER_AGENT);

        if let Some(payload) = payload {
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(status = status.as_u16(), "Received Platform API response");

        if !status.is_success() {
            let payload: ApiErrorPayload =
                serde_json::from_slice(&bytes).map_err(HerokuError::Decode)?;
            warn!(
                status = status.as_u16(),
                id = %payload.id,
                "Platform API returned an error"
            );
            return Err(HerokuError::Api {
                message: payload.message,
                id: payload.id,
                url: payload.url,
            });
        }

        serde_json::from_slice(&bytes).map_err(HerokuError::Decode)
    }

    /// `GET` the given path.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HerokuError> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    /// `DELETE` the given path.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HerokuError> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    /// `POST` a JSON body to the given path.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HerokuError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `PUT` a JSON body to the given path.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HerokuError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// `PATCH` a JSON body to the given path.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, HerokuError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }
}
