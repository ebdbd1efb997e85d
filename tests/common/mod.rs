//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use http_client_metrics::TelemetryConfig;

/// Initialize test logging once, at the configured level; the environment
/// overrides, later calls are no-ops.
pub fn init_tracing(config: &TelemetryConfig) {
    let directive = format!("http_client_metrics={}", config.observability.log_level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&directive)),
        )
        .try_init();
}

/// Start a mock backend that answers every connection with a fixed status
/// and body, optionally after a delay.
pub async fn start_status_backend(
    addr: SocketAddr,
    status: u16,
    body: &'static str,
    delay: Duration,
) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}
