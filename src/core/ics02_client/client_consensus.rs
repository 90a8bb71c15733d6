use core::fmt::Debug;

use prost::Message;
use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::consensus_state::{
    ConsensusState as SoloMachineConsensusState, SOLOMACHINE_CONSENSUS_STATE_TYPE_URL,
};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::proto::solomachine::ConsensusState as RawSoloMachineConsensusState;

/// The sequence-bounded consensus state a client verifies counterparty
/// claims against; replaced wholesale on each accepted update.
pub trait ConsensusState: Clone + Debug + Send + Sync {
    /// Type of client associated with this consensus state (eg. Solomachine)
    fn client_type(&self) -> ClientType;

    /// Performs basic validation of the consensus state
    fn validate_basic(&self) -> Result<(), Error>;
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum AnyConsensusState {
    Solomachine(SoloMachineConsensusState),
}

impl ConsensusState for AnyConsensusState {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Solomachine(state) => state.client_type(),
        }
    }

    fn validate_basic(&self) -> Result<(), Error> {
        match self {
            Self::Solomachine(state) => state.validate_basic().map_err(Into::into),
        }
    }
}

impl TryFrom<Any> for AnyConsensusState {
    type Error = Error;

    fn try_from(raw: Any) -> Result<Self, Error> {
        match raw.type_url.as_str() {
            SOLOMACHINE_CONSENSUS_STATE_TYPE_URL => {
                let raw_state = RawSoloMachineConsensusState::decode(raw.value.as_slice())
                    .map_err(Error::decode)?;
                let state = SoloMachineConsensusState::try_from(raw_state)?;

                Ok(AnyConsensusState::Solomachine(state))
            }

            _ => Err(Error::unknown_consensus_state_type(raw.type_url)),
        }
    }
}

impl From<AnyConsensusState> for Any {
    fn from(value: AnyConsensusState) -> Self {
        match value {
            AnyConsensusState::Solomachine(state) => Any {
                type_url: SOLOMACHINE_CONSENSUS_STATE_TYPE_URL.to_string(),
                value: RawSoloMachineConsensusState::from(state).encode_to_vec(),
            },
        }
    }
}

impl From<SoloMachineConsensusState> for AnyConsensusState {
    fn from(state: SoloMachineConsensusState) -> Self {
        Self::Solomachine(state)
    }
}
