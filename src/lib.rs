//! Minimal service-chaining HTTP demo.
//!
//! One process, one identity, at most one adjacent peer:
//!
//! ```text
//!     Client ── GET /{service} ──▶ ┌───────────────────────────────┐
//!                                  │         service-chain         │
//!                                  │   http::server ─▶ handlers    │
//!                                  │         │                     │
//!                                  │         ▼ (peer configured)   │
//!                                  │   peer::client ── GET ────────┼──▶ Peer
//!                                  │         │                     │
//!                                  │         ▼                     │
//!                                  │   http::envelope (JSON)       │
//!     Client ◀────────────────────┼─────────┘                     │
//!                                  └───────────────────────────────┘
//! ```
//!
//! `GET /ping` answers `ok` regardless of peer health; `GET /hello/{name}`
//! is the greeter variant from the same demo family.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod peer;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
