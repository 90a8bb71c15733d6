use core::fmt::Debug;

use prost::Message;
use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::misbehaviour::{
    Misbehaviour as SoloMachineMisbehaviour, SOLOMACHINE_MISBEHAVIOUR_TYPE_URL,
};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::core::ics24_host::identifier::ClientId;
use crate::proto::solomachine::Misbehaviour as RawSoloMachineMisbehaviour;

/// Cryptographic evidence that a client's authority signed two conflicting
/// statements at one sequence.
pub trait Misbehaviour: Clone + Debug + Send + Sync {
    /// The type of client (eg. Solomachine)
    fn client_type(&self) -> ClientType;

    /// The client the evidence is presented against
    fn client_id(&self) -> &ClientId;
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum AnyMisbehaviour {
    Solomachine(SoloMachineMisbehaviour),
}

impl Misbehaviour for AnyMisbehaviour {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Solomachine(misbehaviour) => misbehaviour.client_type(),
        }
    }

    fn client_id(&self) -> &ClientId {
        match self {
            Self::Solomachine(misbehaviour) => misbehaviour.client_id(),
        }
    }
}

impl TryFrom<Any> for AnyMisbehaviour {
    type Error = Error;

    fn try_from(raw: Any) -> Result<Self, Error> {
        match raw.type_url.as_str() {
            SOLOMACHINE_MISBEHAVIOUR_TYPE_URL => {
                let raw_misbehaviour = RawSoloMachineMisbehaviour::decode(raw.value.as_slice())
                    .map_err(Error::decode)?;
                let misbehaviour = SoloMachineMisbehaviour::try_from(raw_misbehaviour)?;

                Ok(AnyMisbehaviour::Solomachine(misbehaviour))
            }

            _ => Err(Error::unknown_misbehaviour_type(raw.type_url)),
        }
    }
}

impl From<AnyMisbehaviour> for Any {
    fn from(value: AnyMisbehaviour) -> Self {
        match value {
            AnyMisbehaviour::Solomachine(misbehaviour) => Any {
                type_url: SOLOMACHINE_MISBEHAVIOUR_TYPE_URL.to_string(),
                value: RawSoloMachineMisbehaviour::from(misbehaviour).encode_to_vec(),
            },
        }
    }
}

impl From<SoloMachineMisbehaviour> for AnyMisbehaviour {
    fn from(misbehaviour: SoloMachineMisbehaviour) -> Self {
        Self::Solomachine(misbehaviour)
    }
}
