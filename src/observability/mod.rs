//! Observability subsystem.
//!
//! Structured logging only; every inbound request carries an
//! `x-request-id` that shows up in the peer-call log lines.

pub mod logging;
