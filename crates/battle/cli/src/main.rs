//! Battle replay command-line entry point.
mod bundle;
mod config;
mod presentation;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use battle_core::BattleReplay;
use bundle::LoadedBattle;
use clap::Parser;
use config::{CliConfig, OutputFormat};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::parse();
    let _guard = setup_logging(config.log_dir.as_deref())?;

    let battle = LoadedBattle::load(&config.input)?;

    if let Some(path) = &config.export_log {
        return bundle::export_log(&battle.log, path);
    }

    let engine = BattleReplay::new(battle.config);
    let turns = engine.replay(&battle.log, &battle.participants, &battle.entries);
    tracing::info!(turns = turns.len(), "battle replayed");

    let output = match config.format {
        OutputFormat::Text => presentation::render_turns(&turns),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&turns).context("failed to serialize turn summaries")?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write output")?;
    Ok(())
}

/// Setup logging to stderr, plus a log file when `log_dir` is set.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "battle-replay.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/battle-replay.log", dir.display());
    }

    Ok(guard)
}
