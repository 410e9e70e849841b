//! Configuration schema definitions.
//!
//! Everything here is fixed at process start and immutable for the process
//! lifetime; handlers see it behind an `Arc`.

use crate::config::cli::Cli;

/// Root configuration for one service instance.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service identity; tags every envelope and derives the primary route.
    pub service: String,

    /// The adjacent peer called on the primary route, if any.
    pub peer: Option<PeerTarget>,

    /// Listener configuration.
    pub listener: ListenerConfig,
}

/// The single adjacent service this process may call.
#[derive(Debug, Clone)]
pub struct PeerTarget {
    /// Peer host, scheme-less (e.g., "gamma" or "gamma:8080").
    pub host: String,

    /// Path to request on the peer.
    pub path: String,
}

impl PeerTarget {
    /// Full request URL for the peer call.
    pub fn url(&self) -> String {
        format!("http://{}{}", self.host, self.path)
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:80").
    pub bind_address: String,
}

impl ServiceConfig {
    /// Assemble the runtime configuration from parsed CLI flags.
    ///
    /// A peer path given without a peer host is ignored; a peer host given
    /// without a path gets "/".
    pub fn from_cli(cli: Cli) -> Self {
        let peer = cli.peer_host.map(|host| PeerTarget {
            host: host.trim().to_string(),
            path: cli
                .peer_path
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(ToString::to_string)
                .unwrap_or_else(|| "/".to_string()),
        });

        Self {
            service: cli.service.trim().to_string(),
            peer,
            listener: ListenerConfig {
                bind_address: format!("0.0.0.0:{}", cli.port),
            },
        }
    }

    /// Path the primary route is served at, derived from the service name.
    pub fn service_path(&self) -> String {
        format!("/{}", self.service)
    }
}
