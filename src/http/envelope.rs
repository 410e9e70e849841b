//! Response envelope construction and rendering.
//!
//! The envelope is built fresh per request and dropped once the response
//! is sent. `service` is always present; `peer` and `peerError` are
//! mutually exclusive and both absent when no peer is configured.

use serde::Serialize;
use serde_json::Value;

/// JSON object returned by the primary route, always tagged with this
/// service's identity.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    /// This service's name.
    pub service: String,

    /// Parsed body returned by the peer, when the call succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<Value>,

    /// Peer failure description, when a call was attempted and failed.
    #[serde(rename = "peerError", skip_serializing_if = "Option::is_none")]
    pub peer_error: Option<String>,
}

impl ResponseEnvelope {
    /// Envelope for a service with no peer configured.
    pub fn bare(service: &str) -> Self {
        Self {
            service: service.to_string(),
            peer: None,
            peer_error: None,
        }
    }

    /// Envelope carrying a successful peer response.
    pub fn with_peer(service: &str, peer: Value) -> Self {
        Self {
            service: service.to_string(),
            peer: Some(peer),
            peer_error: None,
        }
    }

    /// Degraded envelope carrying the peer failure.
    pub fn with_peer_error(service: &str, error: impl ToString) -> Self {
        Self {
            service: service.to_string(),
            peer: None,
            peer_error: Some(error.to_string()),
        }
    }

    /// Render to the wire format: 2-space indentation plus a trailing
    /// newline when `pretty`, compact with no trailing newline otherwise.
    pub fn render(&self, pretty: bool) -> String {
        if pretty {
            let mut body =
                serde_json::to_string_pretty(self).expect("envelope is always serializable");
            body.push('\n');
            body
        } else {
            serde_json::to_string(self).expect("envelope is always serializable")
        }
    }
}
