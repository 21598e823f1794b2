//! Per-turn view model.

use std::collections::BTreeMap;

use crate::correlate::LogEntryCorrelator;
use crate::group::{ActionGrouper, GroupedAction};
use crate::log::Turn;
use crate::participant::{ParticipantId, ParticipantState, Role};
use crate::rendered::RenderedLogEntry;
use crate::replay::TurnReplay;

/// Everything the turn view draws for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSummary {
    pub turn: Turn,
    /// Allies in party order.
    pub allies: Vec<ParticipantState>,
    /// Enemies in encounter order.
    pub enemies: Vec<ParticipantState>,
    pub participants: BTreeMap<ParticipantId, ParticipantState>,
    pub actions: Vec<GroupedAction>,
}

impl TurnSummary {
    pub fn participant(&self, id: &str) -> Option<&ParticipantState> {
        self.participants.get(id)
    }
}

/// Builds a [`TurnSummary`] from a replayed turn and its filtered entries.
pub struct TurnAssembler;

impl TurnAssembler {
    pub fn assemble(replay: TurnReplay, entries: &[&RenderedLogEntry]) -> TurnSummary {
        let hp_changes = LogEntryCorrelator::correlate(entries, &replay.deltas);
        let actions = ActionGrouper::group(entries, &hp_changes);

        let allies = ordered(&replay.states, Role::Player);
        let enemies = ordered(&replay.states, Role::Enemy);

        TurnSummary {
            turn: replay.turn,
            allies,
            enemies,
            participants: replay.states,
            actions,
        }
    }
}

fn ordered(states: &BTreeMap<ParticipantId, ParticipantState>, role: Role) -> Vec<ParticipantState> {
    let mut side: Vec<_> = states
        .values()
        .filter(|state| state.role == role)
        .cloned()
        .collect();
    side.sort_by_key(|state| state.order);
    side
}
