//! DTOs for the condense endpoint.

use serde::{Deserialize, Serialize};

/// Request to condense a URL.
///
/// `url` is optional at the wire level so a missing field reaches the
/// service and is reported as `A URL is required.` rather than as a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CondenseRequest {
    pub url: Option<String>,
}

/// Short link for the submitted URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CondenseResponse {
    pub new_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_url() {
        let req: CondenseRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());

        let req: CondenseRequest = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert!(req.url.is_none());
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let req: CondenseRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "slug": "x"}"#).unwrap();
        assert_eq!(req.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_response_field_name() {
        let json = serde_json::to_value(CondenseResponse {
            new_url: "https://cndns.io/0a1b2c3d".to_string(),
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({ "newUrl": "https://cndns.io/0a1b2c3d" }));
    }
}
