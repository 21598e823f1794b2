//! Binary storage format for [`BattleLogRecord`].
//!
//! Layout: one format-version byte followed by the bincode encoding of the
//! record. Kind codes are kept raw, so logs containing kinds this build does
//! not know still decode and those actions are skipped at replay time.

use super::BattleLogRecord;
use crate::error::LogCodecError;

impl BattleLogRecord {
    /// Current storage format version.
    pub const FORMAT_VERSION: u8 = 1;

    /// Encodes the record into its storage representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LogCodecError> {
        let payload = bincode::serialize(self).map_err(LogCodecError::Encode)?;
        let mut bytes = Vec::with_capacity(payload.len() + 1);
        bytes.push(Self::FORMAT_VERSION);
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    /// Decodes a record previously produced by [`BattleLogRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LogCodecError> {
        let (&version, payload) = bytes.split_first().ok_or(LogCodecError::Empty)?;
        if version != Self::FORMAT_VERSION {
            return Err(LogCodecError::UnsupportedVersion {
                found: version,
                expected: Self::FORMAT_VERSION,
            });
        }
        bincode::deserialize(payload).map_err(LogCodecError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{ActionKind, ActorIndex, BattleAction, BattleOutcome};

    fn sample() -> BattleLogRecord {
        BattleLogRecord::new(vec![
            BattleAction::new(1, ActionKind::PhysicalAttack, 1).with_target(1001),
            BattleAction::new(1, ActionKind::PhysicalDamage, 1)
                .with_target(1001)
                .with_value(30),
        ])
        .with_initial_hp(1, 80)
        .with_initial_hp(1001, 100)
        .with_outcome(BattleOutcome::Victory)
    }

    #[test]
    fn stored_log_decodes_to_same_record() {
        let record = sample();
        let bytes = record.to_bytes().expect("encode");
        assert_eq!(bytes[0], BattleLogRecord::FORMAT_VERSION);
        assert_eq!(BattleLogRecord::from_bytes(&bytes).expect("decode"), record);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            BattleLogRecord::from_bytes(&[]),
            Err(LogCodecError::Empty)
        ));
    }

    #[test]
    fn foreign_version_is_rejected() {
        let mut bytes = sample().to_bytes().expect("encode");
        bytes[0] = 7;
        assert!(matches!(
            BattleLogRecord::from_bytes(&bytes),
            Err(LogCodecError::UnsupportedVersion {
                found: 7,
                expected: 1
            })
        ));
    }

    #[test]
    fn truncated_payload_is_not_decodable() {
        let bytes = sample().to_bytes().expect("encode");
        assert!(matches!(
            BattleLogRecord::from_bytes(&bytes[..bytes.len() / 2]),
            Err(LogCodecError::Decode(_))
        ));
    }

    #[test]
    fn json_bundle_uses_numeric_kind_codes() {
        let json = r#"{
            "actions": [{"turn": 1, "kind": 11, "actor": 1, "target": 1001, "value": 30}],
            "initial_hp": {"1001": 100},
            "outcome": 0,
            "turns": 1
        }"#;
        let record: BattleLogRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.actions[0].kind(), Ok(ActionKind::PhysicalDamage));
        assert_eq!(record.initial_hp.get(&ActorIndex(1001)), Some(&100));
        assert_eq!(record.outcome, BattleOutcome::Victory);
    }
}
