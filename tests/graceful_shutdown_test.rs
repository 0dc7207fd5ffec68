//! Integration tests for graceful shutdown
//!
//! These tests verify that:
//! - Shutdown signals reach every receiver
//! - The HTTP server stops once the shutdown future resolves

use hearscreen::adapters::memory::InMemoryStore;
use hearscreen::api::{serve, AppState};
use hearscreen::config::{AuthConfig, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

fn state() -> AppState {
    AppState::new(Arc::new(InMemoryStore::new()), &AuthConfig::default())
}

fn ephemeral() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

#[tokio::test]
async fn test_shutdown_signal_propagation() {
    let (shutdown_tx, shutdown_rx1) = watch::channel(false);
    let shutdown_rx2 = shutdown_rx1.clone();

    assert!(!*shutdown_rx1.borrow());
    assert!(!*shutdown_rx2.borrow());

    shutdown_tx.send(true).unwrap();

    assert!(*shutdown_rx1.borrow());
    assert!(*shutdown_rx2.borrow());
}

#[tokio::test]
async fn test_server_stops_on_signal() {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = tokio::spawn(async move {
        serve(&ephemeral(), state(), async move {
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
        })
        .await
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!server.is_finished());

    shutdown_tx.send(true).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop within timeout")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_server_stops_when_sender_dropped() {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = tokio::spawn(async move {
        serve(&ephemeral(), state(), async move {
            // A closed channel counts as shutdown
            let _ = shutdown_rx.changed().await;
        })
        .await
    });

    drop(shutdown_tx);

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop within timeout")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_bind_failure_is_reported() {
    let config = ServerConfig {
        host: "256.0.0.1".to_string(),
        port: 3001,
    };
    let result = serve(&config, state(), std::future::pending()).await;
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to bind"));
}
