use sos_relay::config::SosRelayConfig;
use sos_relay::startup::Application;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .init();
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let config = SosRelayConfig::load();

    let app = Application::build(config).await?;
    app.run_until_stopped().await
}
