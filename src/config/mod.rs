//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags / environment (SS_PORT)
//!     → cli.rs (clap parse)
//!     → schema.rs (ServiceConfig, immutable)
//!     → validation.rs (semantic checks)
//!     → shared via Arc to the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once assembled; there is no reload path
//! - Validation separates syntactic (clap) from semantic checks
//! - No process-wide globals; the config struct is passed explicitly

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::{ListenerConfig, PeerTarget, ServiceConfig};
pub use validation::{validate_config, ValidationError};
