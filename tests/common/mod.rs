use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use menu_api::{
    config::ServerConfig, database::InMemoryMenuRepository, router, services::MenuService,
    AppState,
};

pub struct TestServer {
    pub base_url: String,
    /// Backing store of the running server, for seeding and inspection
    pub repo: InMemoryMenuRepository,
}

impl TestServer {
    /// Serve the real router over an in-memory store on a free port.
    ///
    /// The server lives on the calling test's runtime, so each test gets its
    /// own isolated instance.
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let repo = InMemoryMenuRepository::new();
        let state = AppState::new(MenuService::new(Arc::new(repo.clone())));
        let app = router(state, &ServerConfig::default());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind port {}", port))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let server = Self { base_url, repo };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}
