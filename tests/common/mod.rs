#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use kariera_api::career::{CompensationRecord, PayType};
use kariera_api::config::AppConfig;
use kariera_api::database::MemoryUserStore;
use kariera_api::{app, AppState};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// An in-process server bound to a free port, backed by an in-memory user
/// store that tests can inspect directly.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub config: AppConfig,
    pub store: Arc<MemoryUserStore>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(fixture_records()).await
    }

    pub async fn spawn_with(records: Vec<CompensationRecord>) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::development();
        config.api.port = port;
        config.api.enable_request_logging = false;
        config.security.jwt_secret = TEST_JWT_SECRET.to_string();

        let store = Arc::new(MemoryUserStore::new());
        let state = AppState::new(config.clone(), store.clone(), records);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app(state)).await;
        });

        let server = Self {
            port,
            base_url,
            config,
            store,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/api/register"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/api/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?)
    }

    /// Register and log in, returning the bearer token.
    pub async fn token_for(&self, email: &str, password: &str) -> Result<String> {
        let res = self.register(email, password).await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "register failed: {}", res.status());

        let body: Value = self.login(email, password).await?.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("login response had no token")
    }
}

/// A small dataset covering duplicates, bonus months and an unparseable label.
pub fn fixture_records() -> Vec<CompensationRecord> {
    vec![
        CompensationRecord::new("Feb 2023", 11000.0, 7900.0, 7100.0, PayType::Salary),
        CompensationRecord::new("Dec 2022", 10500.0, 7600.0, 6800.0, PayType::Salary),
        CompensationRecord::new("Dec 2022", 4000.0, 2900.0, 6900.0, PayType::Bonus),
        CompensationRecord::new("Jan 2023", 0.0, 7800.0, 7000.0, PayType::Salary),
        CompensationRecord::new("sometime", 1.0, 1.0, 1.0, PayType::Salary),
    ]
}
