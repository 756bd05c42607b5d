//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use phishdrill::capture::CaptureStore;
use phishdrill::intake::{IdentityResolver, Intake, SlidingWindowLimiter};
use phishdrill::{AppConfig, HttpServer, Shutdown};

/// Spawn a server on an ephemeral loopback port backed by `store`.
///
/// Returns the bound address and a shutdown handle the test should trigger
/// when done.
pub async fn spawn_server(config: AppConfig, store: Arc<CaptureStore>) -> (SocketAddr, Shutdown) {
    let intake = Arc::new(Intake::new(
        IdentityResolver::new(&config.identity),
        SlidingWindowLimiter::new(
            config.rate_limit.max_requests,
            Duration::from_secs(config.rate_limit.window_seconds),
        ),
        store,
    ));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, intake);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client that does not follow redirects, so 303s stay observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
