//! Battle replay entry point.
//!
//! [`BattleReplay`] runs the whole pipeline for one stored battle:
//! registry → HP replay → entry correlation → grouping → turn assembly.
//! A call owns all of its state, so one engine can serve independent logs
//! from several threads.

use std::collections::BTreeMap;

use crate::config::ReplayConfig;
use crate::log::{BattleAction, BattleLogRecord, Turn};
use crate::participant::{ParticipantRegistry, ParticipantSnapshot};
use crate::rendered::{EntryFilter, RenderedLogEntry};
use crate::replay::HpReplay;
use crate::turn::{TurnAssembler, TurnSummary};

/// Ally and enemy snapshots captured at battle start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleParticipants {
    #[cfg_attr(feature = "serde", serde(default))]
    pub allies: Vec<ParticipantSnapshot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<ParticipantSnapshot>,
}

impl BattleParticipants {
    pub fn new(allies: Vec<ParticipantSnapshot>, enemies: Vec<ParticipantSnapshot>) -> Self {
        Self { allies, enemies }
    }
}

/// Reconstructs the per-turn view model of a stored battle.
#[derive(Clone, Debug, Default)]
pub struct BattleReplay {
    config: ReplayConfig,
}

impl BattleReplay {
    pub fn new(config: ReplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Replays `log` and returns one summary per displayed turn, ascending.
    ///
    /// Only turns above 0 that keep at least one rendered entry after
    /// filtering are replayed; their actions are applied in log order.
    pub fn replay(
        &self,
        log: &BattleLogRecord,
        participants: &BattleParticipants,
        entries: &[RenderedLogEntry],
    ) -> Vec<TurnSummary> {
        let registry =
            ParticipantRegistry::build(&participants.allies, &participants.enemies, &log.initial_hp);
        let filter = EntryFilter::new(&self.config);

        let turns = filter.by_turn(entries);

        let mut turn_actions: BTreeMap<Turn, Vec<(usize, &BattleAction)>> = BTreeMap::new();
        for (index, action) in log.actions.iter().enumerate() {
            if turns.contains_key(&action.turn) {
                turn_actions.entry(action.turn).or_default().push((index, action));
            }
        }

        tracing::debug!(
            participants = registry.len(),
            actions = log.actions.len(),
            turns = turns.len(),
            "replaying battle log"
        );

        let mut hp = HpReplay::new(&registry);
        turns
            .into_iter()
            .map(|(turn, turn_entries)| {
                let actions = turn_actions.remove(&turn).unwrap_or_default();
                let replayed = hp.replay_turn(turn, actions);
                TurnAssembler::assemble(replayed, &turn_entries)
            })
            .collect()
    }
}

/// Replays `log` with the default configuration.
pub fn replay(
    log: &BattleLogRecord,
    participants: &BattleParticipants,
    entries: &[RenderedLogEntry],
) -> Vec<TurnSummary> {
    BattleReplay::default().replay(log, participants, entries)
}
