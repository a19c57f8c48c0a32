use brandsetu_chat_resolver::Resolution;
use serde::{Deserialize, Serialize};

use crate::RemoteConfig;

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatRequest {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
}

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatResponse {
    pub data: Option<ChatData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatData {
    pub response: Option<String>,
    pub options: Option<Vec<String>>,
}

/// Payload of the health probe.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Health {
    /// Reported status, `"healthy"` when everything is fine.
    pub status: String,
    /// Reported backend version, if any.
    #[serde(default)]
    pub version: Option<String>,
}

impl Health {
    /// Returns `true` if the backend reports itself healthy.
    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(text: &str, config: &RemoteConfig) -> ChatRequest {
    ChatRequest {
        message: text.to_owned(),
        session_id: config.session_id.clone(),
    }
}

/// Converts the response body into a [`Resolution`].
///
/// An empty reply is treated the same as a missing one.
pub fn into_resolution(resp: ChatResponse) -> Resolution {
    let data = resp.data.unwrap_or_default();
    Resolution {
        reply: data.response.filter(|reply| !reply.is_empty()),
        suggestions: data.options.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::RemoteConfigBuilder;

    #[test]
    fn test_create_request() {
        let config = RemoteConfigBuilder::new().build();
        let request = create_request("pricing", &config);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "message": "pricing" })
        );

        let config = RemoteConfigBuilder::new().with_session_id("s-1").build();
        let request = create_request("pricing", &config);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "message": "pricing", "session_id": "s-1" })
        );
    }

    #[test]
    fn test_full_response() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "success": true,
            "session_id": "s-1",
            "data": {
                "response": "Our plans start at ₹15,000",
                "options": ["Tell me more", "Contact sales"],
                "confidence": 0.8
            }
        }))
        .unwrap();
        let resolution = into_resolution(resp);
        assert_eq!(
            resolution.reply.as_deref(),
            Some("Our plans start at ₹15,000")
        );
        assert_eq!(resolution.suggestions, vec!["Tell me more", "Contact sales"]);
    }

    #[test]
    fn test_missing_fields() {
        let resp: ChatResponse =
            serde_json::from_value(json!({ "data": {} })).unwrap();
        assert_eq!(into_resolution(resp), Resolution::default());

        let resp: ChatResponse =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(into_resolution(resp), Resolution::default());

        let resp: ChatResponse = serde_json::from_value(
            json!({ "data": { "response": "", "options": [] } }),
        )
        .unwrap();
        assert_eq!(into_resolution(resp), Resolution::default());
    }

    #[test]
    fn test_health() {
        let health: Health = serde_json::from_value(json!({
            "status": "healthy",
            "timestamp": "2024-01-01T00:00:00",
            "version": "2.2.0"
        }))
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version.as_deref(), Some("2.2.0"));
    }
}
