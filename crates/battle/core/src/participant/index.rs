use crate::log::ActorIndex;

/// Composite actor index used for enemies.
///
/// Encodes the enemy's position in the encounter together with its
/// definition id as `(position + 1) * 1000 + definition_id`, so the first
/// enemy of definition 1 is `1001`. Definition ids must stay below 1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnemyActorIndex {
    position: u16,
    definition_id: u16,
}

impl EnemyActorIndex {
    const STRIDE: u16 = 1000;

    /// Builds the index for an enemy, or `None` if it does not fit the encoding.
    pub const fn new(position: u16, definition_id: u16) -> Option<Self> {
        if definition_id >= Self::STRIDE {
            return None;
        }
        let Some(slot) = position.checked_add(1) else {
            return None;
        };
        let Some(base) = slot.checked_mul(Self::STRIDE) else {
            return None;
        };
        if base.checked_add(definition_id).is_none() {
            return None;
        }
        Some(Self {
            position,
            definition_id,
        })
    }

    /// Encodes `position` and `definition_id` into an actor index.
    pub const fn encode(position: u16, definition_id: u16) -> Option<ActorIndex> {
        match Self::new(position, definition_id) {
            Some(index) => Some(index.actor_index()),
            None => None,
        }
    }

    /// Splits an actor index back into position and definition id.
    ///
    /// Indices below 1000 belong to allies and yield `None`.
    pub const fn decode(index: ActorIndex) -> Option<Self> {
        if index.0 < Self::STRIDE {
            return None;
        }
        Some(Self {
            position: index.0 / Self::STRIDE - 1,
            definition_id: index.0 % Self::STRIDE,
        })
    }

    pub const fn position(&self) -> u16 {
        self.position
    }

    pub const fn definition_id(&self) -> u16 {
        self.definition_id
    }

    pub const fn actor_index(&self) -> ActorIndex {
        ActorIndex((self.position + 1) * Self::STRIDE + self.definition_id)
    }
}

impl core::fmt::Display for EnemyActorIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.actor_index())
    }
}
