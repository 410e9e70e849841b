//! Outbound peer call subsystem.
//!
//! At most one GET per inbound request; no retries, no circuit breaking,
//! no pooling policy beyond what the transport keeps for free.

pub mod client;
pub mod error;

pub use client::PeerClient;
pub use error::PeerError;
