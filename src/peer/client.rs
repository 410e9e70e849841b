//! Single-shot JSON client for the configured peer.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde_json::Value;
use tokio::time;

use crate::config::PeerTarget;
use crate::peer::error::PeerError;

/// Upper bound on a buffered peer body.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A hung peer must not hold the inbound request forever.
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the single adjacent peer.
///
/// Cheap to clone; the underlying connector is shared across clones.
#[derive(Clone)]
pub struct PeerClient {
    client: Client<HttpConnector, Body>,
}

impl PeerClient {
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client }
    }

    /// Issue one GET to the peer and decode the JSON body.
    ///
    /// Never retried; every failure maps onto a [`PeerError`] variant.
    pub async fn fetch_json(&self, target: &PeerTarget) -> Result<Value, PeerError> {
        let url = target.url();

        let request = Request::builder()
            .method(Method::GET)
            .uri(&url)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .map_err(|e| PeerError::Unreachable(e.to_string()))?;

        let response = match time::timeout(CALL_TIMEOUT, self.client.request(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(PeerError::Unreachable(e.to_string())),
            Err(_) => {
                return Err(PeerError::Unreachable(format!("call to {} timed out", url)))
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(PeerError::BadStatus(status));
        }

        let bytes = axum::body::to_bytes(Body::new(response.into_body()), MAX_BODY_BYTES)
            .await
            .map_err(|e| PeerError::Unreachable(e.to_string()))?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Default for PeerClient {
    fn default() -> Self {
        Self::new()
    }
}
