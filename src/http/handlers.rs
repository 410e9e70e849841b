//! Route handlers: the chain responder, the liveness probe, and the
//! greeter variant.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::envelope::ResponseEnvelope;
use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;

/// Greeting used by the `/hello/{name}` route.
const GREETING: &str = "Hi there";

/// Primary route: compose this service's envelope, chaining through the
/// configured peer when there is one.
///
/// Peer failures degrade to a `200` envelope carrying `peerError`; the
/// inbound request is never failed on the peer's account.
pub async fn chain_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let pretty = params.contains_key("pretty");
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let envelope = match &state.config.peer {
        Some(peer) => {
            tracing::info!(
                request_id = %request_id,
                url = %peer.url(),
                "Calling peer service"
            );
            match state.peer_client.fetch_json(peer).await {
                Ok(body) => ResponseEnvelope::with_peer(&state.config.service, body),
                Err(e) => {
                    tracing::warn!(
                        request_id = %request_id,
                        error = %e,
                        "Peer call failed, degrading"
                    );
                    ResponseEnvelope::with_peer_error(&state.config.service, e)
                }
            }
        }
        None => ResponseEnvelope::bare(&state.config.service),
    };

    json_response(envelope.render(pretty))
}

/// Liveness probe; never depends on peer reachability.
pub async fn ping_handler() -> &'static str {
    "ok"
}

/// Greeter route carried over from the hello-server variant.
pub async fn hello_handler(Path(name): Path<String>) -> Response {
    let timestamp = unix_millis();
    (
        StatusCode::OK,
        format!("{} {}<br>\n<i>{}</i>\n", GREETING, name, timestamp),
    )
        .into_response()
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn json_response(body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response()
}
