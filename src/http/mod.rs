//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routes)
//!     → request.rs (add request ID)
//!     → handlers.rs (chain / ping / hello)
//!     → [peer client, when a peer is configured]
//!     → envelope.rs (render JSON body)
//!     → Send to client
//! ```

pub mod envelope;
pub mod handlers;
pub mod request;
pub mod server;

pub use envelope::ResponseEnvelope;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
