//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Scheme and structure are validated by
    /// the service; only presence is checked here.
    #[validate(length(min = 1, message = "Missing or invalid url"))]
    pub url: String,
}

/// Response for a successfully created short link.
///
/// Field names are camelCase on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_fails_validation() {
        let request = ShortenRequest {
            url: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = ShortenResponse {
            short_url: "http://sho.rt/1".to_string(),
            short_code: "1".to_string(),
            long_url: "https://example.com/".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["shortUrl"], "http://sho.rt/1");
        assert_eq!(json["shortCode"], "1");
        assert_eq!(json["longUrl"], "https://example.com/");
    }
}
