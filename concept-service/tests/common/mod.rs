use concept_service::config::{ConceptConfig, GeminiSettings, ImageSettings};
use concept_service::startup::{AppState, Application};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

/// Configuration pointing Gemini at `gemini_base`, listening on a random port.
pub fn test_config(gemini_base: &str, api_key: Option<&str>) -> ConceptConfig {
    ConceptConfig {
        common: CoreConfig {
            port: 0,
            log_level: "debug".to_string(),
        },
        gemini: GeminiSettings {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
            model: "gemini-1.5-flash".to_string(),
            api_base: gemini_base.to_string(),
            timeout_secs: 5,
        },
        images: ImageSettings {
            api_base: "https://image.pollinations.ai".to_string(),
            width: 1024,
            height: 576,
            model: "flux".to_string(),
        },
        otlp_endpoint: None,
    }
}

impl TestApp {
    /// Spawn the real application (Gemini + Pollinations providers).
    pub async fn spawn(config: ConceptConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the application around caller-supplied providers.
    #[allow(dead_code)]
    pub async fn spawn_with_state(state: AppState) -> Self {
        let config = test_config("http://127.0.0.1:9", None);
        let app = Application::with_state(&config, state)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
