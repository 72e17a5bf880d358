//! Levelguide - command-line leveling guide tracker.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use levelguide_player::config::PlayerConfig;
use levelguide_player::runner::{self, Cli, RunnerDeps};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "levelguide_player=info,levelguide_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config(PlayerConfig::from_env());
    tracing::debug!(?config, "Starting levelguide");

    runner::run(cli, RunnerDeps::from_config(&config)).await
}
