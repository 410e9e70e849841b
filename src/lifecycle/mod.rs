//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Parse flags → Validate → Bind listener → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM / Ctrl-C or broadcast trigger
//!         → Stop accepting → Drain in-flight requests → Exit 0
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
