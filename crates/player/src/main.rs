//! Bomb Canary headless player

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bombcanary_player::config::ClientConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is the game view.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bombcanary_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Bomb Canary player");

    let config = ClientConfig::from_env()?;
    bombcanary_player::runner::run(config).await
}
