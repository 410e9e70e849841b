//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use service_chain::config::{ListenerConfig, PeerTarget, ServiceConfig};
use service_chain::http::HttpServer;
use service_chain::lifecycle::Shutdown;

/// Start a mock peer that returns a fixed 200 JSON response.
pub async fn start_mock_peer(body: &'static str) -> SocketAddr {
    start_programmable_peer(move || async move { (200, body.to_string()) }).await
}

/// Start a programmable mock peer on an ephemeral port.
#[allow(dead_code)]
pub async fn start_programmable_peer<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request head before answering
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Allocate a localhost address nobody is listening on.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Build a test configuration listening on an ephemeral localhost port.
pub fn test_config(service: &str, peer: Option<PeerTarget>) -> ServiceConfig {
    ServiceConfig {
        service: service.to_string(),
        peer,
        listener: ListenerConfig {
            bind_address: "127.0.0.1:0".to_string(),
        },
    }
}

/// Peer target pointing at a mock backend.
#[allow(dead_code)]
pub fn peer_at(addr: SocketAddr, path: &str) -> PeerTarget {
    PeerTarget {
        host: addr.to_string(),
        path: path.to_string(),
    }
}

/// Spawn a service-chain server; returns its address and shutdown handle.
///
/// The listener is bound before the task is spawned, so requests may be
/// issued immediately. Keep the handle alive for the test's duration.
pub async fn start_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Non-pooling client so every request sees the server's current state.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
