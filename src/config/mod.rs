use std::env;

pub const DEFAULT_ONESIGNAL_API_URL: &str = "https://onesignal.com/api/v1/notifications";

#[derive(Debug, Clone)]
pub struct SosRelayConfig {
    pub port: u16,
    pub onesignal: OneSignalConfig,
}

#[derive(Debug, Clone)]
pub struct OneSignalConfig {
    pub app_id: String,
    pub rest_api_key: String,
    pub api_url: String,
    pub enabled: bool,
}

impl SosRelayConfig {
    /// Load configuration from the process environment.
    ///
    /// Missing credentials are not a startup failure: the provider rejects
    /// them per request, so the service boots either way.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        SosRelayConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            onesignal: OneSignalConfig {
                app_id: get_env("ONESIGNAL_APP_ID", ""),
                rest_api_key: get_env("ONESIGNAL_REST_API_KEY", ""),
                api_url: get_env("ONESIGNAL_API_URL", DEFAULT_ONESIGNAL_API_URL),
                enabled: env::var("ONESIGNAL_ENABLED")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .unwrap_or(true),
            },
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
