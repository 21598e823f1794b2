//! Battle participants: static snapshots and the mutable HP projection.
//!
//! Snapshots are captured at battle start and never change. Replay works on
//! [`ParticipantState`] copies whose `current_hp` is clamped to
//! `[0, max_hp]` by every mutator.
mod index;
mod registry;

pub use index::EnemyActorIndex;
pub use registry::ParticipantRegistry;

/// Stable string identifier of a participant, shared with rendered log entries.
pub type ParticipantId = String;

/// Which side of the battle a participant fights on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Player,
    Enemy,
}

/// Identity and static stats of a participant at battle start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantSnapshot {
    /// Ally character id, or the numeric actor index for enemies.
    pub id: ParticipantId,
    /// Party slot of an ally; doubles as its actor index.
    #[cfg_attr(feature = "serde", serde(default))]
    pub party_slot: Option<u16>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: Option<u32>,
    pub max_hp: u32,
}

impl ParticipantSnapshot {
    pub fn ally(id: impl Into<String>, party_slot: u16, name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            id: id.into(),
            party_slot: Some(party_slot),
            name: name.into(),
            avatar: None,
            level: None,
            max_hp,
        }
    }

    pub fn enemy(index: EnemyActorIndex, name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            id: index.to_string(),
            party_slot: None,
            name: name.into(),
            avatar: None,
            level: None,
            max_hp,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }
}

/// Runtime HP projection of one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantState {
    pub id: ParticipantId,
    pub name: String,
    pub current_hp: u32,
    /// HP the turn view compares against when drawing the delta.
    pub previous_hp: u32,
    pub max_hp: u32,
    pub level: Option<u32>,
    pub role: Role,
    /// Position in the participant's input list.
    pub order: usize,
}

impl ParticipantState {
    pub(crate) fn from_snapshot(
        snapshot: &ParticipantSnapshot,
        role: Role,
        initial_hp: u32,
        order: usize,
    ) -> Self {
        let hp = initial_hp.min(snapshot.max_hp);
        Self {
            id: snapshot.id.clone(),
            name: snapshot.name.clone(),
            current_hp: hp,
            previous_hp: hp,
            max_hp: snapshot.max_hp,
            level: snapshot.level,
            role,
            order,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Lowers HP by `amount`, stopping at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Raises HP by `amount`, stopping at `max_hp`.
    pub fn apply_heal(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn kill(&mut self) {
        self.current_hp = 0;
    }
}
