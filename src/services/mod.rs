pub mod providers;

pub use providers::{
    MockPushProvider, OneSignalProvider, ProviderError, ProviderReceipt, PushAlert, PushProvider,
};
