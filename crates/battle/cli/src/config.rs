//! Command-line configuration.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Replay a stored battle and print its turn-by-turn summary.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file in the working directory):
/// - `BATTLE_REPLAY_INPUT` - Battle bundle to replay
/// - `BATTLE_REPLAY_FORMAT` - Output format, `text` or `json` (default: text)
/// - `BATTLE_REPLAY_LOG_DIR` - Also write logs to `<dir>/battle-replay.log`
#[derive(Clone, Debug, Parser)]
#[command(name = "battle-replay", version, about)]
pub struct CliConfig {
    /// Battle bundle (JSON) holding the log, participants and rendered entries.
    #[arg(env = "BATTLE_REPLAY_INPUT")]
    pub input: PathBuf,

    #[arg(long, value_enum, env = "BATTLE_REPLAY_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, env = "BATTLE_REPLAY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write the bundle's battle log in storage format to this path and exit.
    #[arg(long, value_name = "PATH")]
    pub export_log: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_input_and_flags_parse() {
        let config = CliConfig::try_parse_from([
            "battle-replay",
            "battle.json",
            "--format",
            "json",
            "--export-log",
            "out.bin",
        ])
        .expect("valid arguments");

        assert_eq!(config.input, PathBuf::from("battle.json"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.export_log, Some(PathBuf::from("out.bin")));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(CliConfig::try_parse_from(["battle-replay", "b.json", "--format", "xml"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        CliConfig::command().debug_assert();
    }
}
