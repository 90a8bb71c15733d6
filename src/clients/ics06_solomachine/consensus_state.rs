use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::error::Error;
use crate::clients::ics06_solomachine::public_key::PublicKey;
use crate::core::ics02_client::client_consensus::ConsensusState as Ics02ConsensusState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error as Ics02Error;
use crate::proto::solomachine::ConsensusState as RawConsensusState;
use crate::timestamp::Timestamp;

pub const SOLOMACHINE_CONSENSUS_STATE_TYPE_URL: &str =
    "/ibc.lightclients.solomachine.v1.ConsensusState";

/// The solo machine's consensus state: the authority key currently trusted,
/// the sequence it is trusted at, and the diversifier separating this client
/// instance from others sharing the key.
///
/// Owned exclusively by its client state and replaced wholesale on each
/// accepted update.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsensusState {
    pub sequence: u64,
    pub public_key: PublicKey,
    pub diversifier: String,
    pub timestamp: Timestamp,
}

impl ConsensusState {
    pub fn new(
        sequence: u64,
        public_key: PublicKey,
        diversifier: String,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            sequence,
            public_key,
            diversifier,
            timestamp,
        }
    }

    pub fn validate_basic(&self) -> Result<(), Error> {
        if self.sequence == 0 {
            return Err(Error::zero_sequence());
        }

        if !self.diversifier.is_empty() && self.diversifier.trim().is_empty() {
            return Err(Error::blank_diversifier());
        }

        Ok(())
    }
}

impl Ics02ConsensusState for ConsensusState {
    fn client_type(&self) -> ClientType {
        ClientType::Solomachine
    }

    fn validate_basic(&self) -> Result<(), Ics02Error> {
        ConsensusState::validate_basic(self).map_err(Into::into)
    }
}

impl TryFrom<RawConsensusState> for ConsensusState {
    type Error = Error;

    fn try_from(raw: RawConsensusState) -> Result<Self, Self::Error> {
        if raw.public_key.is_empty() {
            return Err(Error::empty_public_key());
        }

        Ok(ConsensusState {
            sequence: raw.sequence,
            public_key: PublicKey::from_bytes(&raw.public_key)?,
            diversifier: raw.diversifier,
            timestamp: Timestamp::from_nanoseconds(raw.timestamp),
        })
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(value: ConsensusState) -> Self {
        RawConsensusState {
            sequence: value.sequence,
            public_key: value.public_key.as_bytes().to_vec(),
            diversifier: value.diversifier,
            timestamp: value.timestamp.nanoseconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::clients::ics06_solomachine::test_utils::dummy_consensus_state;

    #[test]
    fn validate_basic_accepts_valid_state() {
        let consensus_state = dummy_consensus_state(1);
        assert!(consensus_state.validate_basic().is_ok());
    }

    #[test]
    fn validate_basic_rejects_zero_sequence() {
        let consensus_state = dummy_consensus_state(0);
        assert!(consensus_state.validate_basic().is_err());
    }

    #[test]
    fn validate_basic_rejects_blank_diversifier() {
        let mut consensus_state = dummy_consensus_state(1);
        consensus_state.diversifier = "   ".to_string();
        assert!(consensus_state.validate_basic().is_err());
    }

    #[test]
    fn raw_roundtrip() {
        let consensus_state = dummy_consensus_state(3);

        let raw = RawConsensusState::from(consensus_state.clone());
        let back = ConsensusState::try_from(raw).unwrap();
        assert_eq!(consensus_state, back);
    }

    #[test]
    fn raw_conversion_rejects_empty_public_key() {
        let raw = RawConsensusState {
            sequence: 1,
            public_key: vec![],
            diversifier: "oracle".to_string(),
            timestamp: 10,
        };

        assert!(ConsensusState::try_from(raw).is_err());
    }
}
