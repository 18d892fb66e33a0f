pub mod onesignal;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use onesignal::{MockPushProvider, OneSignalProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Send error: {0}")]
    SendFailed(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// One alert to relay: the recipient device tokens and an optional
/// caller-supplied message.
#[derive(Debug, Clone)]
pub struct PushAlert {
    pub player_ids: Vec<String>,
    pub message: Option<String>,
}

/// What the provider reported back on success. `recipients` is passed
/// through to the caller verbatim, whatever shape the provider used.
#[derive(Debug, Clone)]
pub struct ProviderReceipt {
    pub recipients: Value,
}

#[async_trait]
pub trait PushProvider: Send + Sync {
    async fn send(&self, alert: &PushAlert) -> Result<ProviderReceipt, ProviderError>;
    async fn health_check(&self) -> Result<(), ProviderError>;
    fn is_enabled(&self) -> bool;
}
