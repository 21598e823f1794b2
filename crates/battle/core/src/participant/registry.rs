//! Actor index to participant identity mapping.

use std::collections::BTreeMap;

use super::{ParticipantId, ParticipantSnapshot, ParticipantState, Role};
use crate::log::ActorIndex;

/// Identity and starting HP of every participant in one battle.
///
/// Built once per replay from the ally and enemy snapshot lists. Malformed
/// snapshots (allies without a party slot, enemies whose id is not an
/// actor index in `0..=u16::MAX`) are dropped rather than reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipantRegistry {
    identities: BTreeMap<ActorIndex, ParticipantId>,
    initial_states: BTreeMap<ParticipantId, ParticipantState>,
}

impl ParticipantRegistry {
    pub fn build(
        allies: &[ParticipantSnapshot],
        enemies: &[ParticipantSnapshot],
        initial_hp: &BTreeMap<ActorIndex, u32>,
    ) -> Self {
        let mut registry = Self::default();

        for (order, ally) in allies.iter().enumerate() {
            let Some(slot) = ally.party_slot else {
                tracing::debug!(id = %ally.id, "dropping ally snapshot without party slot");
                continue;
            };
            registry.register(ActorIndex(slot), ally, Role::Player, order, initial_hp);
        }

        for (order, enemy) in enemies.iter().enumerate() {
            let Ok(index) = enemy.id.parse::<u16>() else {
                tracing::debug!(id = %enemy.id, "dropping enemy snapshot whose id is not an actor index");
                continue;
            };
            registry.register(ActorIndex(index), enemy, Role::Enemy, order, initial_hp);
        }

        registry
    }

    fn register(
        &mut self,
        index: ActorIndex,
        snapshot: &ParticipantSnapshot,
        role: Role,
        order: usize,
        initial_hp: &BTreeMap<ActorIndex, u32>,
    ) {
        let hp = initial_hp.get(&index).copied().unwrap_or(snapshot.max_hp);
        let state = ParticipantState::from_snapshot(snapshot, role, hp, order);
        self.identities.insert(index, snapshot.id.clone());
        self.initial_states.insert(snapshot.id.clone(), state);
    }

    /// Participant identifier for an actor index.
    pub fn identity(&self, index: ActorIndex) -> Option<&str> {
        self.identities.get(&index).map(String::as_str)
    }

    pub fn identities(&self) -> &BTreeMap<ActorIndex, ParticipantId> {
        &self.identities
    }

    /// Starting state of every registered participant, keyed by identifier.
    pub fn initial_states(&self) -> &BTreeMap<ParticipantId, ParticipantState> {
        &self.initial_states
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
