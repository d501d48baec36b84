use bfhl_service::config::{BfhlConfig, GeminiSettings, ServerConfig};
use bfhl_service::services::providers::TextProvider;
use bfhl_service::startup::Application;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port with the given text provider.
    pub async fn spawn(text_provider: Arc<dyn TextProvider>) -> Self {
        let config = BfhlConfig {
            // Use random port for testing (port 0)
            server: ServerConfig { port: 0 },
            gemini: GeminiSettings {
                api_key: String::new(),
                model: "gemini-pro".to_string(),
            },
        };

        let app = Application::build_with_provider(config, text_provider)
            .await
            .expect("Failed to build application");
        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            address: format!("http://localhost:{}", port),
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_bfhl(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/bfhl", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }
}
