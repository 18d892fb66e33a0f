use sos_relay::config::{OneSignalConfig, SosRelayConfig};
use sos_relay::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn an app backed by the mock push provider.
    pub async fn spawn() -> Self {
        Self::spawn_with(mock_provider_config()).await
    }

    pub async fn spawn_with(config: SosRelayConfig) -> Self {
        // Use random port for testing (port 0)
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
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

/// Config that selects the mock push provider.
pub fn mock_provider_config() -> SosRelayConfig {
    SosRelayConfig {
        port: 0,
        onesignal: OneSignalConfig {
            app_id: "test-app-id".to_string(),
            rest_api_key: "test-rest-api-key".to_string(),
            api_url: "http://127.0.0.1:1/api/v1/notifications".to_string(),
            enabled: false,
        },
    }
}

/// Config that points the real OneSignal provider at a local mock server.
pub fn onesignal_config(server_uri: &str) -> SosRelayConfig {
    SosRelayConfig {
        port: 0,
        onesignal: OneSignalConfig {
            app_id: "test-app-id".to_string(),
            rest_api_key: "test-rest-api-key".to_string(),
            api_url: format!("{}/api/v1/notifications", server_uri),
            enabled: true,
        },
    }
}

/// Config with the real provider selected but no credentials set.
pub fn unconfigured_onesignal_config(server_uri: &str) -> SosRelayConfig {
    SosRelayConfig {
        port: 0,
        onesignal: OneSignalConfig {
            app_id: String::new(),
            rest_api_key: String::new(),
            api_url: format!("{}/api/v1/notifications", server_uri),
            enabled: true,
        },
    }
}
