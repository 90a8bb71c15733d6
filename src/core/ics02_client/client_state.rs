use core::fmt::Debug;

use prost::Message;
use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::client_state::{
    ClientState as SoloMachineClientState, SOLOMACHINE_CLIENT_STATE_TYPE_URL,
};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::core::ics24_host::identifier::ClientId;
use crate::proto::solomachine::ClientState as RawSoloMachineClientState;

/// The per-counterparty trust record every client variant maintains.
pub trait ClientState: Clone + Debug + Send + Sync {
    /// Type of client associated with this state (eg. Solomachine)
    fn client_type(&self) -> ClientType;

    /// The identifier this client was registered under, assigned once at
    /// creation and immutable afterwards.
    fn client_id(&self) -> &ClientId;

    /// Freeze status of the client. Monotonic: once a client is frozen by
    /// misbehaviour it stays frozen.
    fn is_frozen(&self) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum AnyClientState {
    Solomachine(SoloMachineClientState),
}

impl ClientState for AnyClientState {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Solomachine(state) => state.client_type(),
        }
    }

    fn client_id(&self) -> &ClientId {
        match self {
            Self::Solomachine(state) => state.client_id(),
        }
    }

    fn is_frozen(&self) -> bool {
        match self {
            Self::Solomachine(state) => state.is_frozen(),
        }
    }
}

impl TryFrom<Any> for AnyClientState {
    type Error = Error;

    fn try_from(raw: Any) -> Result<Self, Error> {
        match raw.type_url.as_str() {
            SOLOMACHINE_CLIENT_STATE_TYPE_URL => {
                let raw_state = RawSoloMachineClientState::decode(raw.value.as_slice())
                    .map_err(Error::decode)?;
                let state = SoloMachineClientState::try_from(raw_state)?;

                Ok(AnyClientState::Solomachine(state))
            }

            _ => Err(Error::unknown_client_state_type(raw.type_url)),
        }
    }
}

impl From<AnyClientState> for Any {
    fn from(value: AnyClientState) -> Self {
        match value {
            AnyClientState::Solomachine(state) => Any {
                type_url: SOLOMACHINE_CLIENT_STATE_TYPE_URL.to_string(),
                value: RawSoloMachineClientState::from(state).encode_to_vec(),
            },
        }
    }
}

impl From<SoloMachineClientState> for AnyClientState {
    fn from(state: SoloMachineClientState) -> Self {
        Self::Solomachine(state)
    }
}
