//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use rover_service::{HttpServer, ServiceConfig, Shutdown};

/// Start the service on an ephemeral port.
///
/// Returns the bound address and the shutdown handle that stops it.
pub async fn start_service(mut config: ServiceConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

pub fn api_url(addr: SocketAddr) -> String {
    format!("http://{}/api", addr)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
