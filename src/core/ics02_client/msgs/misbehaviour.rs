//! Definition of domain type message `MsgSubmitMisbehaviour`.

use core::str::FromStr;

use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::misbehaviour::AnyMisbehaviour;
use crate::proto::client::MsgSubmitMisbehaviour as RawMsgSubmitMisbehaviour;
use crate::signer::Signer;
use crate::tx_msg::Msg;

pub const TYPE_URL: &str = "/ibc.core.client.v1.MsgSubmitMisbehaviour";

/// A request to freeze a client based on evidence of conflicting signed
/// statements.
///
/// The submitter bears no relation to the evidence's signing key: anyone may
/// report valid misbehaviour. Anti-spam economics are the host's concern.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MsgSubmitMisbehaviour {
    pub misbehaviour: AnyMisbehaviour,
    pub submitter: Signer,
}

impl MsgSubmitMisbehaviour {
    pub fn new(misbehaviour: AnyMisbehaviour, submitter: Signer) -> Self {
        MsgSubmitMisbehaviour {
            misbehaviour,
            submitter,
        }
    }

    pub fn signer(&self) -> Signer {
        self.submitter.clone()
    }
}

impl Msg for MsgSubmitMisbehaviour {
    type ValidationError = Error;
    type Raw = RawMsgSubmitMisbehaviour;

    fn route(&self) -> String {
        crate::keys::ROUTER_KEY.to_string()
    }

    fn type_url(&self) -> String {
        TYPE_URL.to_string()
    }

    fn validate_basic(&self) -> Result<(), Error> {
        match &self.misbehaviour {
            AnyMisbehaviour::Solomachine(misbehaviour) => {
                misbehaviour.validate_basic().map_err(Into::into)
            }
        }
    }
}

impl TryFrom<RawMsgSubmitMisbehaviour> for MsgSubmitMisbehaviour {
    type Error = Error;

    fn try_from(raw: RawMsgSubmitMisbehaviour) -> Result<Self, Self::Error> {
        let raw_misbehaviour = raw
            .misbehaviour
            .ok_or_else(Error::missing_raw_misbehaviour)?;

        let submitter = Signer::from_str(raw.submitter.as_str()).map_err(Error::signer)?;

        Ok(MsgSubmitMisbehaviour::new(
            AnyMisbehaviour::try_from(raw_misbehaviour)?,
            submitter,
        ))
    }
}

impl From<MsgSubmitMisbehaviour> for RawMsgSubmitMisbehaviour {
    fn from(msg: MsgSubmitMisbehaviour) -> Self {
        RawMsgSubmitMisbehaviour {
            misbehaviour: Some(Any::from(msg.misbehaviour)),
            submitter: msg.submitter.to_string(),
        }
    }
}
