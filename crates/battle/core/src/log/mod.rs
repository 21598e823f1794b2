//! Persisted battle log: the ordered action sequence of one battle.
//!
//! A [`BattleLogRecord`] is read-only input to replay. Actions are stored in
//! the compact form the battle simulator writes (indices and numeric codes),
//! never mutated after recording.
#[cfg(feature = "serde")]
mod codec;
mod kind;

use std::collections::{BTreeMap, BTreeSet};

pub use kind::{ActionKind, HpEffect};

use crate::error::{UnknownActionKind, UnknownOutcome};

/// Turn ordinal. Turn 0 is pre-battle setup and is never displayed.
pub type Turn = u32;

/// Numeric key identifying a participant inside one battle's action log.
///
/// Allies use their party slot id. Enemies use the composite encoding of
/// [`EnemyActorIndex`](crate::EnemyActorIndex).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActorIndex(pub u16);

impl core::fmt::Display for ActorIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ActorIndex {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// One atomic event in a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub turn: Turn,
    /// Raw kind code; see [`ActionKind::code`].
    pub kind: u8,
    pub actor: ActorIndex,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<ActorIndex>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_index: Option<u16>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra: Option<u32>,
}

impl BattleAction {
    pub fn new(turn: Turn, kind: ActionKind, actor: u16) -> Self {
        Self {
            turn,
            kind: kind.code(),
            actor: ActorIndex(actor),
            target: None,
            value: None,
            skill_index: None,
            extra: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: u16) -> Self {
        self.target = Some(ActorIndex(target));
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    /// Decodes the stored kind code.
    pub fn kind(&self) -> Result<ActionKind, UnknownActionKind> {
        ActionKind::from_code(self.kind)
    }

    /// Magnitude of the action. Absent values count as zero.
    pub fn value(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    /// Index of the participant whose HP this action changes.
    ///
    /// Self-targeting effects land on the actor; everything else on the
    /// explicit target, which may be absent.
    pub fn affected_index(&self, effect: HpEffect) -> Option<ActorIndex> {
        if effect.is_self_targeted() {
            Some(self.actor)
        } else {
            self.target
        }
    }
}

/// Overall result of a battle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Retreat,
    #[default]
    Undecided,
}

impl BattleOutcome {
    pub const fn code(&self) -> u8 {
        match self {
            Self::Victory => 0,
            Self::Defeat => 1,
            Self::Retreat => 2,
            Self::Undecided => 3,
        }
    }
}

impl TryFrom<u8> for BattleOutcome {
    type Error = UnknownOutcome;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Victory),
            1 => Ok(Self::Defeat),
            2 => Ok(Self::Retreat),
            3 => Ok(Self::Undecided),
            _ => Err(UnknownOutcome { code }),
        }
    }
}

impl From<BattleOutcome> for u8 {
    fn from(outcome: BattleOutcome) -> Self {
        outcome.code()
    }
}

/// Storage record for one battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLogRecord {
    /// Actions in recorded order.
    pub actions: Vec<BattleAction>,
    /// HP each participant entered the battle with, keyed by actor index.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_hp: BTreeMap<ActorIndex, u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub outcome: BattleOutcome,
    /// Number of turns the battle lasted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub turns: Turn,
}

impl BattleLogRecord {
    pub fn new(actions: Vec<BattleAction>) -> Self {
        let turns = actions.iter().map(|action| action.turn).max().unwrap_or(0);
        Self {
            actions,
            initial_hp: BTreeMap::new(),
            outcome: BattleOutcome::Undecided,
            turns,
        }
    }

    #[must_use]
    pub fn with_initial_hp(mut self, actor: u16, hp: u32) -> Self {
        self.initial_hp.insert(ActorIndex(actor), hp);
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: BattleOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Actions recorded for `turn`, in log order.
    pub fn actions_for_turn(&self, turn: Turn) -> impl Iterator<Item = &BattleAction> {
        self.actions.iter().filter(move |action| action.turn == turn)
    }

    /// Distinct turn numbers that have at least one action, ascending.
    pub fn turn_numbers(&self) -> BTreeSet<Turn> {
        self.actions.iter().map(|action| action.turn).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_counts_as_zero() {
        let action = BattleAction::new(1, ActionKind::PhysicalDamage, 1).with_target(1001);
        assert_eq!(action.value(), 0);
        assert_eq!(action.with_value(12).value(), 12);
    }

    #[test]
    fn self_effects_land_on_actor() {
        let action = BattleAction::new(2, ActionKind::SelfHeal, 3).with_target(1001);
        assert_eq!(
            action.affected_index(HpEffect::HealSelf),
            Some(ActorIndex(3))
        );
        assert_eq!(
            action.affected_index(HpEffect::DamageTarget),
            Some(ActorIndex(1001))
        );
    }

    #[test]
    fn unknown_kind_code_surfaces_on_decode() {
        let mut action = BattleAction::new(1, ActionKind::Other, 1);
        action.kind = 250;
        assert_eq!(action.kind(), Err(UnknownActionKind { code: 250 }));
    }

    #[test]
    fn record_groups_actions_by_turn() {
        let record = BattleLogRecord::new(vec![
            BattleAction::new(0, ActionKind::Other, 1),
            BattleAction::new(2, ActionKind::PhysicalAttack, 1),
            BattleAction::new(1, ActionKind::MagicAttack, 2),
            BattleAction::new(2, ActionKind::Defend, 2),
        ]);

        assert_eq!(record.turns, 2);
        assert_eq!(
            record.turn_numbers().into_iter().collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        let turn_two: Vec<_> = record.actions_for_turn(2).map(|a| a.actor).collect();
        assert_eq!(turn_two, vec![ActorIndex(1), ActorIndex(2)]);
    }

    #[test]
    fn outcome_codes_round_trip() {
        for outcome in [
            BattleOutcome::Victory,
            BattleOutcome::Defeat,
            BattleOutcome::Retreat,
            BattleOutcome::Undecided,
        ] {
            assert_eq!(BattleOutcome::try_from(outcome.code()), Ok(outcome));
        }
        assert_eq!(BattleOutcome::try_from(9), Err(UnknownOutcome { code: 9 }));
    }
}
