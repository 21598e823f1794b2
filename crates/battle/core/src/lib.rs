//! Deterministic battle-log replay.
//!
//! `battle-core` turns a stored battle (compact actions plus starting HP)
//! and the host's rendered log lines into a per-turn view model: participant
//! HP bars, and rendered lines grouped as "declaration + results" with the
//! HP change of each result attached. Everything here is pure and
//! synchronous; [`engine::BattleReplay`] drives the pipeline.
pub mod config;
pub mod correlate;
pub mod engine;
pub mod error;
pub mod group;
pub mod log;
pub mod participant;
pub mod rendered;
pub mod replay;
pub mod turn;

pub use config::ReplayConfig;
pub use correlate::LogEntryCorrelator;
pub use engine::{BattleParticipants, BattleReplay, replay};
#[cfg(feature = "serde")]
pub use error::LogCodecError;
pub use error::{UnknownActionKind, UnknownOutcome};
pub use group::{ActionGrouper, GroupedAction};
pub use log::{ActionKind, ActorIndex, BattleAction, BattleLogRecord, BattleOutcome, HpEffect, Turn};
pub use participant::{
    EnemyActorIndex, ParticipantId, ParticipantRegistry, ParticipantSnapshot, ParticipantState,
    Role,
};
pub use rendered::{EntryClass, EntryFilter, EntryType, RenderedLogEntry};
pub use replay::{ActionDelta, ActionHpChange, HpReplay, TurnReplay};
pub use turn::{TurnAssembler, TurnSummary};
