use core::fmt::Debug;

use prost::Message;
use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::header::{
    Header as SoloMachineHeader, SOLOMACHINE_HEADER_TYPE_URL,
};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::proto::solomachine::Header as RawSoloMachineHeader;
use crate::timestamp::Timestamp;

/// Abstract of consensus state update information: the authenticated claim a
/// client evaluates to advance its consensus state.
pub trait Header: Clone + Debug + Send + Sync {
    /// The type of client (eg. Solomachine)
    fn client_type(&self) -> ClientType;

    /// The sequence the update applies at
    fn sequence(&self) -> u64;

    /// The timestamp of the consensus state the update installs
    fn timestamp(&self) -> Timestamp;
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum AnyHeader {
    Solomachine(SoloMachineHeader),
}

impl Header for AnyHeader {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Solomachine(header) => header.client_type(),
        }
    }

    fn sequence(&self) -> u64 {
        match self {
            Self::Solomachine(header) => header.sequence,
        }
    }

    fn timestamp(&self) -> Timestamp {
        match self {
            Self::Solomachine(header) => header.timestamp,
        }
    }
}

impl TryFrom<Any> for AnyHeader {
    type Error = Error;

    fn try_from(raw: Any) -> Result<Self, Error> {
        match raw.type_url.as_str() {
            SOLOMACHINE_HEADER_TYPE_URL => {
                let raw_header =
                    RawSoloMachineHeader::decode(raw.value.as_slice()).map_err(Error::decode)?;
                let header = SoloMachineHeader::try_from(raw_header)?;

                Ok(AnyHeader::Solomachine(header))
            }

            _ => Err(Error::unknown_header_type(raw.type_url)),
        }
    }
}

impl From<AnyHeader> for Any {
    fn from(value: AnyHeader) -> Self {
        match value {
            AnyHeader::Solomachine(header) => Any {
                type_url: SOLOMACHINE_HEADER_TYPE_URL.to_string(),
                value: RawSoloMachineHeader::from(header).encode_to_vec(),
            },
        }
    }
}

impl From<SoloMachineHeader> for AnyHeader {
    fn from(header: SoloMachineHeader) -> Self {
        Self::Solomachine(header)
    }
}
