//! Definition of domain type message `MsgUpdateClient`.

use core::str::FromStr;

use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::header::AnyHeader;
use crate::core::ics24_host::identifier::ClientId;
use crate::proto::client::MsgUpdateClient as RawMsgUpdateClient;
use crate::signer::Signer;
use crate::tx_msg::Msg;

pub const TYPE_URL: &str = "/ibc.core.client.v1.MsgUpdateClient";

/// A request to update an existing client with a new signed header.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MsgUpdateClient {
    pub client_id: ClientId,
    pub header: AnyHeader,
}

impl MsgUpdateClient {
    pub fn new(client_id: ClientId, header: AnyHeader) -> Self {
        MsgUpdateClient { client_id, header }
    }

    /// Only the holder of the rotated-in key may request the rotation: the
    /// signer is derived from the header's new public key.
    pub fn signer(&self) -> Result<Signer, Error> {
        match &self.header {
            AnyHeader::Solomachine(header) => header
                .new_public_key
                .to_address()
                .parse()
                .map_err(Error::signer),
        }
    }
}

impl Msg for MsgUpdateClient {
    type ValidationError = Error;
    type Raw = RawMsgUpdateClient;

    fn route(&self) -> String {
        crate::keys::ROUTER_KEY.to_string()
    }

    fn type_url(&self) -> String {
        TYPE_URL.to_string()
    }

    fn validate_basic(&self) -> Result<(), Error> {
        match &self.header {
            AnyHeader::Solomachine(header) => header.validate_basic().map_err(Into::into),
        }
    }
}

impl TryFrom<RawMsgUpdateClient> for MsgUpdateClient {
    type Error = Error;

    fn try_from(raw: RawMsgUpdateClient) -> Result<Self, Self::Error> {
        let client_id = ClientId::from_str(raw.client_id.as_str())
            .map_err(Error::invalid_client_identifier)?;

        let raw_header = raw.header.ok_or_else(Error::missing_raw_header)?;

        Ok(MsgUpdateClient::new(
            client_id,
            AnyHeader::try_from(raw_header)?,
        ))
    }
}

impl From<MsgUpdateClient> for RawMsgUpdateClient {
    fn from(msg: MsgUpdateClient) -> Self {
        RawMsgUpdateClient {
            client_id: msg.client_id.to_string(),
            header: Some(Any::from(msg.header)),
        }
    }
}
