//! Minimal async client for the Heroku Platform API.
//!
//! Builds authenticated requests, serializes JSON bodies, and decodes either
//! a typed success payload or the Platform API's structured error payload.
//! One HTTP round-trip per call: no retries, no pagination, no caching.
//!
//! Authentication follows Heroku's convention of HTTP basic auth with an
//! empty username and the API token as the password, and every request pins
//! the API revision via `Accept: application/vnd.heroku+json; version=edge`.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use heroku_client::{HerokuClient, HerokuConfig};
//! use serde_json::Value;
//!
//! # async fn run() -> Result<(), heroku_client::HerokuError> {
//! // Base URL comes from HEROKU_API_URL when set, otherwise the default.
//! let client = HerokuClient::new(HerokuConfig::new("my-api-token")?);
//!
//! let app: Value = client.get("/apps/my-app").await?;
//! println!("{}", app["name"]);
//!
//! let created: Value = client
//!     .post("/apps", &serde_json::json!({ "name": "my-app" }))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`HerokuError`]: invalid base URL at construction,
//! body serialization, transport, response decoding, or a decoded API error
//! (non-2xx status with `Message`/`Id`/`url` fields).

pub mod client;
pub mod config;
pub mod error;

pub use client::HerokuClient;
pub use config::{HEROKU_ACCEPT, HEROKU_API_BASE_URL, HEROKU_API_URL_ENV, HEROKU_USER_AGENT, HerokuConfig};
pub use error::HerokuError;

pub use reqwest::Method;
