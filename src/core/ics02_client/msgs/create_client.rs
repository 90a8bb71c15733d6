//! Definition of domain type message `MsgCreateClient`.

use core::str::FromStr;

use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::core::ics02_client::client_consensus::{AnyConsensusState, ConsensusState};
use crate::core::ics02_client::error::Error;
use crate::core::ics24_host::identifier::ClientId;
use crate::proto::client::MsgCreateClient as RawMsgCreateClient;
use crate::signer::Signer;
use crate::tx_msg::Msg;

pub const TYPE_URL: &str = "/ibc.core.client.v1.MsgCreateClient";

/// A request to register a new client with the supplied identifier and
/// registration-time consensus state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MsgCreateClient {
    pub client_id: ClientId,
    pub consensus_state: AnyConsensusState,
}

impl MsgCreateClient {
    pub fn new(client_id: ClientId, consensus_state: AnyConsensusState) -> Self {
        MsgCreateClient {
            client_id,
            consensus_state,
        }
    }

    /// The only address allowed to register a key is the address derived
    /// from that key: the signer is computed from the embedded consensus
    /// state's public key, never supplied separately.
    pub fn signer(&self) -> Result<Signer, Error> {
        match &self.consensus_state {
            AnyConsensusState::Solomachine(consensus_state) => consensus_state
                .public_key
                .to_address()
                .parse()
                .map_err(Error::signer),
        }
    }
}

impl Msg for MsgCreateClient {
    type ValidationError = Error;
    type Raw = RawMsgCreateClient;

    fn route(&self) -> String {
        crate::keys::ROUTER_KEY.to_string()
    }

    fn type_url(&self) -> String {
        TYPE_URL.to_string()
    }

    fn validate_basic(&self) -> Result<(), Error> {
        self.consensus_state.validate_basic()
    }
}

impl TryFrom<RawMsgCreateClient> for MsgCreateClient {
    type Error = Error;

    fn try_from(raw: RawMsgCreateClient) -> Result<Self, Self::Error> {
        let client_id = ClientId::from_str(raw.client_id.as_str())
            .map_err(Error::invalid_client_identifier)?;

        let raw_consensus_state = raw
            .consensus_state
            .ok_or_else(Error::missing_raw_consensus_state)?;

        Ok(MsgCreateClient::new(
            client_id,
            AnyConsensusState::try_from(raw_consensus_state)?,
        ))
    }
}

impl From<MsgCreateClient> for RawMsgCreateClient {
    fn from(msg: MsgCreateClient) -> Self {
        RawMsgCreateClient {
            client_id: msg.client_id.to_string(),
            consensus_state: Some(Any::from(msg.consensus_state)),
        }
    }
}
