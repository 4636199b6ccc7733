use std::io::IsTerminal;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vipchatbot_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignored silently if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vipchatbot_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .init();

    let config = Config::parse();

    vipchatbot_api::start(&config)
        .await
        .with_context(|| format!("VipChatBot API failed on {}", config.addr()))?;

    Ok(())
}
