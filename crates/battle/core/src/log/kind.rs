//! Action kinds and their HP-effect lookup table.

use crate::error::UnknownActionKind;
use crate::rendered::EntryType;

/// How an action kind mutates hit points during replay.
///
/// The mapping from [`ActionKind`] to `HpEffect` is a pure table
/// ([`ActionKind::hp_effect`]); the replay loop only ever matches on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HpEffect {
    /// Reduce the target's HP by the action value.
    DamageTarget,
    /// Reduce the actor's own HP by the action value.
    DamageSelf,
    /// Restore the target's HP by the action value.
    HealTarget,
    /// Restore the actor's own HP by the action value.
    HealSelf,
    /// Set the target's HP to zero.
    Kill,
    /// No HP change.
    None,
}

impl HpEffect {
    /// Returns true if the effect lands on the acting participant.
    pub const fn is_self_targeted(&self) -> bool {
        matches!(self, Self::DamageSelf | Self::HealSelf)
    }

    /// Rendered entry type that displays this effect, if any.
    pub const fn entry_type(&self) -> Option<EntryType> {
        match self {
            Self::DamageTarget | Self::DamageSelf => Some(EntryType::Damage),
            Self::HealTarget | Self::HealSelf => Some(EntryType::Heal),
            Self::Kill => Some(EntryType::Defeat),
            Self::None => None,
        }
    }
}

/// Kind of a single recorded battle action.
///
/// Each variant has a stable numeric wire code (see [`ActionKind::code`]).
/// Codes are grouped by family: 1x attacks, 2x damage over time and special
/// damage, 3x healing, 4x defensive and status, 5x outcome markers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    PhysicalAttack,
    PhysicalDamage,
    PhysicalEvade,
    MagicAttack,
    MagicDamage,
    MagicMiss,
    BreathDamage,

    StatusTick,
    EnemySpecialDamage,
    SelfDamage,

    MagicHeal,
    PartyHeal,
    AbsorbHeal,
    VampiricHeal,
    SelfHeal,
    EnemySpecialHeal,

    Defend,
    StatusInflicted,
    StatusRecovered,

    Kill,
    Retreat,
    Victory,
    Other,
}

impl ActionKind {
    /// Stable numeric code used in persisted logs.
    pub const fn code(&self) -> u8 {
        match self {
            Self::PhysicalAttack => 10,
            Self::PhysicalDamage => 11,
            Self::PhysicalEvade => 12,
            Self::MagicAttack => 13,
            Self::MagicDamage => 14,
            Self::MagicMiss => 15,
            Self::BreathDamage => 16,
            Self::StatusTick => 20,
            Self::EnemySpecialDamage => 21,
            Self::SelfDamage => 22,
            Self::MagicHeal => 30,
            Self::PartyHeal => 31,
            Self::AbsorbHeal => 32,
            Self::VampiricHeal => 33,
            Self::SelfHeal => 34,
            Self::EnemySpecialHeal => 35,
            Self::Defend => 40,
            Self::StatusInflicted => 41,
            Self::StatusRecovered => 42,
            Self::Kill => 50,
            Self::Retreat => 51,
            Self::Victory => 52,
            Self::Other => 0,
        }
    }

    /// Decodes a persisted kind code.
    pub const fn from_code(code: u8) -> Result<Self, UnknownActionKind> {
        let kind = match code {
            10 => Self::PhysicalAttack,
            11 => Self::PhysicalDamage,
            12 => Self::PhysicalEvade,
            13 => Self::MagicAttack,
            14 => Self::MagicDamage,
            15 => Self::MagicMiss,
            16 => Self::BreathDamage,
            20 => Self::StatusTick,
            21 => Self::EnemySpecialDamage,
            22 => Self::SelfDamage,
            30 => Self::MagicHeal,
            31 => Self::PartyHeal,
            32 => Self::AbsorbHeal,
            33 => Self::VampiricHeal,
            34 => Self::SelfHeal,
            35 => Self::EnemySpecialHeal,
            40 => Self::Defend,
            41 => Self::StatusInflicted,
            42 => Self::StatusRecovered,
            50 => Self::Kill,
            51 => Self::Retreat,
            52 => Self::Victory,
            0 => Self::Other,
            _ => return Err(UnknownActionKind { code }),
        };
        Ok(kind)
    }

    /// HP-effect category for this kind.
    pub const fn hp_effect(&self) -> HpEffect {
        match self {
            Self::PhysicalDamage
            | Self::MagicDamage
            | Self::BreathDamage
            | Self::StatusTick
            | Self::EnemySpecialDamage => HpEffect::DamageTarget,
            Self::SelfDamage => HpEffect::DamageSelf,
            Self::MagicHeal | Self::PartyHeal => HpEffect::HealTarget,
            Self::AbsorbHeal | Self::VampiricHeal | Self::SelfHeal | Self::EnemySpecialHeal => {
                HpEffect::HealSelf
            }
            Self::Kill => HpEffect::Kill,
            Self::PhysicalAttack
            | Self::PhysicalEvade
            | Self::MagicAttack
            | Self::MagicMiss
            | Self::Defend
            | Self::StatusInflicted
            | Self::StatusRecovered
            | Self::Retreat
            | Self::Victory
            | Self::Other => HpEffect::None,
        }
    }
}

impl TryFrom<u8> for ActionKind {
    type Error = UnknownActionKind;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<ActionKind> for u8 {
    fn from(kind: ActionKind) -> Self {
        kind.code()
    }
}
