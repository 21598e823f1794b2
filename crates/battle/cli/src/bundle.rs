//! On-disk battle bundle: everything one replay needs.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use battle_core::{BattleLogRecord, BattleParticipants, RenderedLogEntry, ReplayConfig};
use serde::Deserialize;

/// JSON document handed to the CLI.
///
/// The battle log is either inline (`log`) or stored next to the bundle in
/// its binary storage format (`log_file`, resolved relative to the bundle).
#[derive(Debug, Deserialize)]
pub struct BattleBundle {
    #[serde(default)]
    log: Option<BattleLogRecord>,
    #[serde(default)]
    log_file: Option<PathBuf>,
    pub participants: BattleParticipants,
    #[serde(default)]
    pub entries: Vec<RenderedLogEntry>,
    #[serde(default)]
    pub config: ReplayConfig,
}

/// A bundle with its battle log resolved.
#[derive(Debug)]
pub struct LoadedBattle {
    pub log: BattleLogRecord,
    pub participants: BattleParticipants,
    pub entries: Vec<RenderedLogEntry>,
    pub config: ReplayConfig,
}

impl LoadedBattle {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("battle bundle not found: {}", path.display()))?;
        let bundle: BattleBundle = serde_json::from_str(&text)
            .with_context(|| format!("battle bundle is not decodable: {}", path.display()))?;

        let log = match (bundle.log, bundle.log_file) {
            (Some(log), None) => log,
            (None, Some(file)) => {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                read_stored_log(&base.join(file))?
            }
            (Some(_), Some(_)) => bail!("bundle sets both `log` and `log_file`"),
            (None, None) => bail!("bundle has no battle log (`log` or `log_file`)"),
        };

        tracing::info!(
            actions = log.actions.len(),
            allies = bundle.participants.allies.len(),
            enemies = bundle.participants.enemies.len(),
            entries = bundle.entries.len(),
            outcome = %log.outcome,
            "battle loaded"
        );

        Ok(Self {
            log,
            participants: bundle.participants,
            entries: bundle.entries,
            config: bundle.config,
        })
    }
}

fn read_stored_log(path: &Path) -> Result<BattleLogRecord> {
    let bytes =
        fs::read(path).with_context(|| format!("battle log not found: {}", path.display()))?;
    BattleLogRecord::from_bytes(&bytes)
        .with_context(|| format!("battle log is not decodable: {}", path.display()))
}

/// Writes `log` in storage format to `path`.
pub fn export_log(log: &BattleLogRecord, path: &Path) -> Result<()> {
    let bytes = log.to_bytes().context("failed to encode battle log")?;
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "battle log exported");
    Ok(())
}
