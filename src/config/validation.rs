//! Semantic configuration checks.
//!
//! clap guarantees the flags are syntactically well-formed; this module
//! rejects values that would produce a broken route or peer URL. Runs
//! before the listener binds, so violations abort startup.

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// Route names the router registers unconditionally.
const RESERVED_NAMES: [&str; 2] = ["ping", "hello"];

/// A configuration value that parsed but cannot be served.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("service name must not be empty")]
    EmptyServiceName,

    #[error("service name {0:?} cannot be used as a path segment")]
    InvalidServiceName(String),

    #[error("service name {0:?} collides with a fixed route")]
    ReservedServiceName(String),

    #[error("peer path {0:?} must start with '/'")]
    InvalidPeerPath(String),

    #[error("peer host {0:?} is not a plain host: {1}")]
    InvalidPeerHost(String, String),
}

/// Validate the assembled configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), ValidationError> {
    if config.service.is_empty() {
        return Err(ValidationError::EmptyServiceName);
    }
    if config.service.contains(['/', '?', '#']) {
        return Err(ValidationError::InvalidServiceName(config.service.clone()));
    }
    if RESERVED_NAMES.contains(&config.service.as_str()) {
        return Err(ValidationError::ReservedServiceName(config.service.clone()));
    }

    if let Some(peer) = &config.peer {
        if !peer.path.starts_with('/') {
            return Err(ValidationError::InvalidPeerPath(peer.path.clone()));
        }
        if peer.host.contains('/') {
            return Err(ValidationError::InvalidPeerHost(
                peer.host.clone(),
                "contains a path separator".to_string(),
            ));
        }
        // The host may carry a port; strip it before the host parser sees it.
        let host_only = peer
            .host
            .rsplit_once(':')
            .map(|(host, _port)| host)
            .unwrap_or(&peer.host);
        url::Host::parse(host_only).map_err(|e| {
            ValidationError::InvalidPeerHost(peer.host.clone(), e.to_string())
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ListenerConfig, PeerTarget};

    fn config(service: &str, peer: Option<PeerTarget>) -> ServiceConfig {
        ServiceConfig {
            service: service.to_string(),
            peer,
            listener: ListenerConfig {
                bind_address: "0.0.0.0:80".to_string(),
            },
        }
    }

    fn peer(host: &str, path: &str) -> PeerTarget {
        PeerTarget {
            host: host.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_valid_configurations() {
        assert!(validate_config(&config("alpha", None)).is_ok());
        assert!(validate_config(&config("beta", Some(peer("gamma", "/")))).is_ok());
        assert!(validate_config(&config("beta", Some(peer("gamma:8080", "/ping")))).is_ok());
    }

    #[test]
    fn test_empty_service_name_rejected() {
        assert!(matches!(
            validate_config(&config("", None)),
            Err(ValidationError::EmptyServiceName)
        ));
    }

    #[test]
    fn test_service_name_with_slash_rejected() {
        assert!(matches!(
            validate_config(&config("a/b", None)),
            Err(ValidationError::InvalidServiceName(_))
        ));
    }

    #[test]
    fn test_reserved_service_names_rejected() {
        assert!(matches!(
            validate_config(&config("ping", None)),
            Err(ValidationError::ReservedServiceName(_))
        ));
        assert!(matches!(
            validate_config(&config("hello", None)),
            Err(ValidationError::ReservedServiceName(_))
        ));
    }

    #[test]
    fn test_peer_path_without_slash_rejected() {
        assert!(matches!(
            validate_config(&config("beta", Some(peer("gamma", "ping")))),
            Err(ValidationError::InvalidPeerPath(_))
        ));
    }

    #[test]
    fn test_peer_host_with_scheme_rejected() {
        assert!(matches!(
            validate_config(&config("beta", Some(peer("http://gamma", "/")))),
            Err(ValidationError::InvalidPeerHost(_, _))
        ));
    }
}
