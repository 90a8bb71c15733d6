use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::consensus_state::ConsensusState;
use crate::clients::ics06_solomachine::error::Error;
use crate::core::ics02_client::client_state::ClientState as Ics02ClientState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics24_host::identifier::ClientId;
use crate::proto::solomachine::ClientState as RawClientState;

pub const SOLOMACHINE_CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.solomachine.v1.ClientState";

/// On-chain record for a solo machine client: the identifier it was
/// registered under, a frozen flag set on proven misbehaviour, and the
/// consensus state currently trusted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientState {
    pub client_id: ClientId,
    pub frozen: bool,
    pub consensus_state: ConsensusState,
}

impl ClientState {
    pub fn new(client_id: ClientId, consensus_state: ConsensusState) -> Result<Self, Error> {
        consensus_state.validate_basic()?;

        Ok(Self {
            client_id,
            frozen: false,
            consensus_state,
        })
    }

    /// The sequence the client expects the next signed message to carry.
    pub fn sequence(&self) -> u64 {
        self.consensus_state.sequence
    }
}

impl Ics02ClientState for ClientState {
    fn client_type(&self) -> ClientType {
        ClientType::Solomachine
    }

    fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl TryFrom<RawClientState> for ClientState {
    type Error = Error;

    fn try_from(raw: RawClientState) -> Result<Self, Self::Error> {
        let consensus_state = raw
            .consensus_state
            .ok_or_else(Error::missing_consensus_state)?
            .try_into()?;

        Ok(ClientState {
            client_id: raw
                .client_id
                .parse()
                .map_err(Error::invalid_client_identifier)?,
            frozen: raw.frozen,
            consensus_state,
        })
    }
}

impl From<ClientState> for RawClientState {
    fn from(value: ClientState) -> Self {
        RawClientState {
            client_id: value.client_id.to_string(),
            frozen: value.frozen,
            consensus_state: Some(value.consensus_state.into()),
        }
    }
}
