use super::{ProviderError, ProviderReceipt, PushAlert, PushProvider};
use crate::config::OneSignalConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

const SOS_HEADING: &str = "⚠️ SOS Emergency";
const DEFAULT_MESSAGE: &str = "Emergency alert from a guardian";

pub struct OneSignalProvider {
    config: OneSignalConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct NotificationRequest<'a> {
    app_id: &'a str,
    include_player_ids: &'a [String],
    headings: LocalizedText<'a>,
    contents: LocalizedText<'a>,
    priority: u8,
}

#[derive(Debug, Serialize)]
struct LocalizedText<'a> {
    en: &'a str,
}

#[derive(Debug, Deserialize)]
struct NotificationResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    recipients: Value,
}

impl OneSignalProvider {
    pub fn new(config: OneSignalConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PushProvider for OneSignalProvider {
    async fn send(&self, alert: &PushAlert) -> Result<ProviderReceipt, ProviderError> {
        if self.config.app_id.is_empty() || self.config.rest_api_key.is_empty() {
            return Err(ProviderError::Configuration(
                "OneSignal credentials not configured".to_string(),
            ));
        }

        let request = NotificationRequest {
            app_id: &self.config.app_id,
            include_player_ids: &alert.player_ids,
            headings: LocalizedText { en: SOS_HEADING },
            contents: LocalizedText {
                en: alert.message.as_deref().unwrap_or(DEFAULT_MESSAGE),
            },
            priority: 10,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header(
                "Authorization",
                format!("Basic {}", self.config.rest_api_key),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ProviderError::Connection(format!("Failed to connect to OneSignal: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::SendFailed(format!(
                "OneSignal API returned error status {}: {}",
                status, body
            )));
        }

        let result: NotificationResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse OneSignal response: {}", e))
        })?;

        tracing::info!(
            notification_id = result.id.as_deref().unwrap_or("-"),
            recipients = %result.recipients,
            "Push notification sent via OneSignal"
        );

        Ok(ProviderReceipt {
            recipients: result.recipients,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        // OneSignal has no cheap health endpoint; verify credentials exist.
        if self.config.app_id.is_empty() {
            return Err(ProviderError::Configuration(
                "OneSignal app_id is not configured".to_string(),
            ));
        }

        if self.config.rest_api_key.is_empty() {
            return Err(ProviderError::Configuration(
                "OneSignal rest_api_key is not configured".to_string(),
            ));
        }

        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

/// Mock push provider for testing
pub struct MockPushProvider {
    enabled: bool,
    send_count: AtomicU64,
}

impl MockPushProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            send_count: AtomicU64::new(0),
        }
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PushProvider for MockPushProvider {
    async fn send(&self, alert: &PushAlert) -> Result<ProviderReceipt, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::Configuration(
                "Mock push provider is not enabled".to_string(),
            ));
        }

        self.send_count.fetch_add(1, Ordering::SeqCst);

        tracing::info!(
            player_count = alert.player_ids.len(),
            "[MOCK] SOS push notification would be sent"
        );

        Ok(ProviderReceipt {
            recipients: Value::from(alert.player_ids.len()),
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
