//! Error types for battle-core.
//!
//! Replay itself never fails: malformed input is skipped with a well-defined
//! fallback. Errors exist only at the decoding boundaries, where a host turns
//! stored bytes or numeric codes into typed values.

/// A persisted action kind code with no known [`ActionKind`](crate::ActionKind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unknown action kind code {code}")]
pub struct UnknownActionKind {
    pub code: u8,
}

/// A persisted battle outcome code with no known [`BattleOutcome`](crate::BattleOutcome).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unknown battle outcome code {code}")]
pub struct UnknownOutcome {
    pub code: u8,
}

/// Errors raised while encoding or decoding a stored battle log.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum LogCodecError {
    #[error("battle log is empty")]
    Empty,

    #[error("unsupported battle log format version {found} (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },

    #[error("battle log is not decodable: {0}")]
    Decode(#[source] bincode::Error),

    #[error("failed to encode battle log: {0}")]
    Encode(#[source] bincode::Error),
}
