//! Error types for the Heroku Platform API client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while configuring the client or performing a
/// request.
#[derive(Debug, Error)]
pub enum HerokuError {
    /// The configured base URL is not a syntactically valid URL
    #[error("Invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        /// The rejected value, verbatim
        value: String,
        /// The underlying parse failure
        source: url::ParseError,
    },

    /// The request body could not be serialized to JSON
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP round-trip failed (request construction, DNS, connection,
    /// timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded as JSON
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API answered with a non-2xx status and a decodable error payload
    #[error("{message}")]
    Api {
        /// Human-readable message from the server
        message: String,
        /// Opaque error identifier
        id: String,
        /// Reference URL for the error
        url: String,
    },
}

/// Wire shape of the Platform API error payload.
///
/// The documented keys are `Message`, `Id`, and lower-case `url`; lower-case
/// `message`/`id` are accepted as aliases since real responses use them.
/// Missing fields decode to empty strings.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorPayload {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: String,
    #[serde(rename = "Id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_server_message() {
        let err = HerokuError::Api {
            message: "invalid".to_string(),
            id: "ERR1".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(err.to_string(), "invalid");
    }

    #[test]
    fn test_invalid_base_url_display() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = HerokuError::InvalidBaseUrl {
            value: "not a url".to_string(),
            source,
        };
        let display = err.to_string();
        assert!(display.contains("not a url"));
        assert!(display.contains("Invalid base URL"));
    }

    #[test]
    fn test_payload_capitalized_keys() {
        let json = r#"{"Message":"invalid","Id":"ERR1","url":"https://example.com"}"#;
        let payload: ApiErrorPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.message, "invalid");
        assert_eq!(payload.id, "ERR1");
        assert_eq!(payload.url, "https://example.com");
    }

    #[test]
    fn test_payload_lowercase_keys() {
        let json = r#"{"message":"invalid","id":"ERR1","url":"https://example.com"}"#;
        let payload: ApiErrorPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.message, "invalid");
        assert_eq!(payload.id, "ERR1");
    }

    #[test]
    fn test_payload_missing_fields_default_to_empty() {
        let payload: ApiErrorPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.message, "");
        assert_eq!(payload.id, "");
        assert_eq!(payload.url, "");
    }

    #[test]
    fn test_serialize_and_decode_are_distinct_variants() {
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = HerokuError::Decode(bad);
        assert!(err.to_string().contains("decode"));

        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = HerokuError::Serialize(bad);
        assert!(err.to_string().contains("serialize"));
    }
}
