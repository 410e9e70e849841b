//! Peer failure classification.

use axum::http::StatusCode;
use thiserror::Error;

/// Why a peer call produced no usable JSON body.
///
/// Every variant is local to a single request; none is fatal to the
/// process or visible to other in-flight requests.
#[derive(Debug, Error)]
pub enum PeerError {
    /// Connection, DNS, or transport failure, including the call timing out.
    #[error("peer unreachable: {0}")]
    Unreachable(String),

    /// The peer answered outside the 2xx range.
    #[error("peer returned status {0}")]
    BadStatus(StatusCode),

    /// The peer answered 2xx but the body did not parse as JSON.
    #[error("peer body is not valid JSON: {0}")]
    BadBody(#[from] serde_json::Error),
}
