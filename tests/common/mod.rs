//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use recipe_sdk::RecipeClient;
use recipe_service::config::ServiceConfig;
use recipe_service::http::HttpServer;
use recipe_service::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running service bound to an ephemeral localhost port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<()>,
}

impl TestService {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> RecipeClient {
        RecipeClient::new(&self.base_url())
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = self.handle.await;
    }
}

/// Start a service whose recipes live in `data_file`.
pub async fn start_service(data_file: &Path) -> TestService {
    let mut config = ServiceConfig::default();
    config.listener.bind_host = "127.0.0.1".into();
    config.storage.data_file = data_file.to_path_buf();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::from_config(config);
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        addr,
        shutdown,
        handle,
    }
}
