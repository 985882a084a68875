mod bot;
mod presence;
mod status_source;
mod update_scheduler;

use crate::bot::StatusBot;
use common::configuration::load_bot_config;
use common::logging::{default_filter, init_logging};
use std::path::Path;
use tracing::{debug, error, info};

static PREFIX: &str = "STATUSBOT";
static DEFAULT_CONFIG: &str = include_str!("../configs/default_config.toml");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_bot_config(DEFAULT_CONFIG, PREFIX)?;

    let env_log = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| default_filter("status_bot", &settings.logging_level));
    let (non_blocking_stdout, guard) = tracing_appender::non_blocking(std::io::stdout());
    let non_blocking_file = if settings.log_root.is_empty() {
        None
    } else {
        let log_path = Path::new(&settings.log_root).join("status_bot");
        Some(tracing_appender::rolling::never(log_path, "status_bot.log"))
    };
    init_logging(&env_log, non_blocking_stdout, non_blocking_file);

    info!(
        treatment = %settings.bot_treatment,
        update_username = settings.update_username,
        "Starting status bot for {}",
        settings.server_address()
    );

    let bot = StatusBot::new(settings);
    if let Err(e) = bot.run(shutdown_signal()).await {
        error!("{}", e);
        drop(guard); // flush before exiting
        std::process::exit(2);
    }
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    debug!("signal received, starting graceful shutdown");
}
