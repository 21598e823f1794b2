//! Turn-by-turn HP replay.
//!
//! [`HpReplay`] owns the live HP map for one battle and applies actions in
//! log order. Each replayed turn yields a [`TurnReplay`]: an immutable
//! display snapshot of every participant plus the HP delta of each action
//! that touches HP. Later turns depend on earlier ones, so turns must be fed
//! in ascending order on a single replay instance.

use std::collections::BTreeMap;

use crate::log::{BattleAction, HpEffect, Turn};
use crate::participant::{ParticipantId, ParticipantRegistry, ParticipantState};
use crate::rendered::EntryType;

/// HP of one participant before and after a single action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionHpChange {
    pub target_id: ParticipantId,
    pub target_name: String,
    pub before_hp: u32,
    pub after_hp: u32,
    pub max_hp: u32,
}

impl ActionHpChange {
    /// Signed HP difference (negative for damage).
    pub fn delta(&self) -> i64 {
        i64::from(self.after_hp) - i64::from(self.before_hp)
    }
}

/// HP change of one action, tagged with what the rendered log shows for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionDelta {
    /// Position of the action in the battle log.
    pub action_index: usize,
    /// Rendered entry type expected to display this change.
    pub entry_type: EntryType,
    pub change: ActionHpChange,
}

/// Result of replaying one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReplay {
    pub turn: Turn,
    /// Participant states for display: `current_hp` after this turn's
    /// actions, `previous_hp` as of the start of the prior replayed turn.
    pub states: BTreeMap<ParticipantId, ParticipantState>,
    /// Deltas in the order the actions were applied.
    pub deltas: Vec<ActionDelta>,
}

/// Live replay state for one battle.
#[derive(Clone, Debug)]
pub struct HpReplay<'r> {
    registry: &'r ParticipantRegistry,
    current: BTreeMap<ParticipantId, ParticipantState>,
    previous_turn_start: BTreeMap<ParticipantId, ParticipantState>,
}

impl<'r> HpReplay<'r> {
    pub fn new(registry: &'r ParticipantRegistry) -> Self {
        let initial = registry.initial_states().clone();
        Self {
            registry,
            current: initial.clone(),
            previous_turn_start: initial,
        }
    }

    /// Live HP map as of the last applied action.
    pub fn current_states(&self) -> &BTreeMap<ParticipantId, ParticipantState> {
        &self.current
    }

    /// Applies `actions` (indexed by their log position) as turn `turn`.
    pub fn replay_turn<'a, I>(&mut self, turn: Turn, actions: I) -> TurnReplay
    where
        I: IntoIterator<Item = (usize, &'a BattleAction)>,
    {
        let turn_start = self.current.clone();

        let deltas = actions
            .into_iter()
            .filter_map(|(index, action)| self.apply(index, action))
            .collect();

        let mut states = self.current.clone();
        for (id, state) in states.iter_mut() {
            if let Some(baseline) = self.previous_turn_start.get(id) {
                state.previous_hp = baseline.current_hp;
            }
        }

        self.previous_turn_start = turn_start;

        TurnReplay {
            turn,
            states,
            deltas,
        }
    }

    /// Applies one action to the live state, returning its HP delta if it
    /// touches HP. Unknown kinds and unregistered participants are skipped.
    pub fn apply(&mut self, action_index: usize, action: &BattleAction) -> Option<ActionDelta> {
        let kind = match action.kind() {
            Ok(kind) => kind,
            Err(error) => {
                tracing::trace!(action_index, %error, "skipping action");
                return None;
            }
        };

        let effect = kind.hp_effect();
        let entry_type = effect.entry_type()?;

        let Some(index) = action.affected_index(effect) else {
            tracing::trace!(action_index, %kind, "skipping action without target");
            return None;
        };
        let registry = self.registry;
        let Some(id) = registry.identity(index) else {
            tracing::trace!(action_index, %kind, %index, "skipping action on unknown participant");
            return None;
        };
        let state = self.current.get_mut(id)?;

        let before_hp = state.current_hp;
        match effect {
            HpEffect::DamageTarget | HpEffect::DamageSelf => state.apply_damage(action.value()),
            HpEffect::HealTarget | HpEffect::HealSelf => state.apply_heal(action.value()),
            HpEffect::Kill => state.kill(),
            HpEffect::None => return None,
        }

        Some(ActionDelta {
            action_index,
            entry_type,
            change: ActionHpChange {
                target_id: state.id.clone(),
                target_name: state.name.clone(),
                before_hp,
                after_hp: state.current_hp,
                max_hp: state.max_hp,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{ActionKind, ActorIndex};
    use crate::participant::{EnemyActorIndex, ParticipantSnapshot};

    fn registry() -> ParticipantRegistry {
        let allies = [ParticipantSnapshot::ally("hero", 1, "Hero", 100)];
        let enemies = [ParticipantSnapshot::enemy(
            EnemyActorIndex::new(0, 1).expect("fits"),
            "Slime",
            100,
        )];
        let initial_hp = BTreeMap::from([(ActorIndex(1), 90)]);
        ParticipantRegistry::build(&allies, &enemies, &initial_hp)
    }

    fn indexed(actions: &[BattleAction]) -> impl Iterator<Item = (usize, &BattleAction)> {
        actions.iter().enumerate()
    }

    #[test]
    fn sequential_damage_uses_running_hp() {
        let registry = registry();
        let mut replay = HpReplay::new(&registry);
        let actions = [
            BattleAction::new(1, ActionKind::PhysicalDamage, 1)
                .with_target(1001)
                .with_value(40),
            BattleAction::new(1, ActionKind::MagicDamage, 1)
                .with_target(1001)
                .with_value(80),
        ];

        let turn = replay.replay_turn(1, indexed(&actions));

        let changes: Vec<_> = turn
            .deltas
            .iter()
            .map(|d| (d.change.before_hp, d.change.after_hp))
            .collect();
        assert_eq!(changes, vec![(100, 60), (60, 0)]);
        assert_eq!(turn.states["1001"].current_hp, 0);
    }

    #[test]
    fn heal_clamps_to_max() {
        let registry = registry();
        let mut replay = HpReplay::new(&registry);
        let actions = [BattleAction::new(1, ActionKind::MagicHeal, 1)
            .with_target(1)
            .with_value(50)];

        let turn = replay.replay_turn(1, indexed(&actions));

        assert_eq!(turn.deltas[0].change.before_hp, 90);
        assert_eq!(turn.deltas[0].change.after_hp, 100);
        assert_eq!(turn.deltas[0].entry_type, EntryType::Heal);
    }

    #[test]
    fn self_effects_hit_the_actor() {
        let registry = registry();
        let mut replay = HpReplay::new(&registry);
        let actions = [
            BattleAction::new(1, ActionKind::SelfDamage, 1).with_value(15),
            BattleAction::new(1, ActionKind::VampiricHeal, 1)
                .with_target(1001)
                .with_value(10),
        ];

        let turn = replay.replay_turn(1, indexed(&actions));

        assert_eq!(turn.deltas.len(), 2);
        assert!(turn.deltas.iter().all(|d| d.change.target_id == "hero"));
        assert_eq!(turn.deltas[0].change.after_hp, 75);
        assert_eq!(turn.deltas[1].change.after_hp, 85);
        assert_eq!(turn.states["1001"].current_hp, 100);
    }

    #[test]
    fn kill_sets_zero_from_full_hp() {
        let registry = registry();
        let mut replay = HpReplay::new(&registry);
        let actions = [BattleAction::new(1, ActionKind::Kill, 1).with_target(1001)];

        let turn = replay.replay_turn(1, indexed(&actions));

        assert_eq!(turn.deltas[0].change.before_hp, 100);
        assert_eq!(turn.deltas[0].change.after_hp, 0);
        assert_eq!(turn.deltas[0].entry_type, EntryType::Defeat);
    }

    #[test]
    fn unknown_kinds_and_participants_are_skipped() {
        let registry = registry();
        let mut replay = HpReplay::new(&registry);
        let mut unknown = BattleAction::new(1, ActionKind::Other, 1)
            .with_target(1001)
            .with_value(30);
        unknown.kind = 200;
        let actions = [
            unknown,
            BattleAction::new(1, ActionKind::PhysicalDamage, 1)
                .with_target(4242)
                .with_value(30),
            BattleAction::new(1, ActionKind::PhysicalDamage, 1).with_value(30),
            BattleAction::new(1, ActionKind::PhysicalAttack, 1).with_target(1001),
        ];

        let turn = replay.replay_turn(1, indexed(&actions));

        assert!(turn.deltas.is_empty());
        assert_eq!(turn.states["1001"].current_hp, 100);
    }

    #[test]
    fn unregistered_actor_still_damages_registered_target() {
        let registry = registry();
        let mut replay = HpReplay::new(&registry);
        let actions = [
            BattleAction::new(1, ActionKind::PhysicalDamage, 4242)
                .with_target(1001)
                .with_value(25),
            // self effects land on the unregistered actor and are skipped
            BattleAction::new(1, ActionKind::SelfHeal, 4242).with_value(25),
        ];

        let turn = replay.replay_turn(1, indexed(&actions));

        assert_eq!(turn.deltas.len(), 1);
        assert_eq!(turn.deltas[0].action_index, 0);
        assert_eq!(turn.deltas[0].change.target_id, "1001");
        assert_eq!(turn.states["1001"].current_hp, 75);
    }

    #[test]
    fn previous_hp_lags_one_turn_behind_turn_start() {
        let registry = registry();
        let mut replay = HpReplay::new(&registry);
        let hit = |turn, value| {
            BattleAction::new(turn, ActionKind::PhysicalDamage, 1)
                .with_target(1001)
                .with_value(value)
        };
        let actions = [hit(1, 10), hit(2, 20), hit(3, 30)];

        let first = replay.replay_turn(1, [(0, &actions[0])]);
        let second = replay.replay_turn(2, [(1, &actions[1])]);
        let third = replay.replay_turn(3, [(2, &actions[2])]);

        let slime = |turn: &TurnReplay| {
            let state = &turn.states["1001"];
            (state.previous_hp, state.current_hp)
        };
        assert_eq!(slime(&first), (100, 90));
        // start of turn 1 is still the initial HP
        assert_eq!(slime(&second), (100, 70));
        // start of turn 2 is the end of turn 1
        assert_eq!(slime(&third), (90, 40));
    }

    #[test]
    fn delta_is_signed() {
        let change = ActionHpChange {
            target_id: "x".into(),
            target_name: "X".into(),
            before_hp: 10,
            after_hp: 4,
            max_hp: 10,
        };
        assert_eq!(change.delta(), -6);
    }
}
