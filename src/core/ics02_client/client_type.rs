use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ics02_client::error::Error;

/// Type of the client, the tag a client registry dispatches on.
///
/// New client variants plug in behind the same interface by adding a variant
/// here and a matching arm in `AnyClient`; callers dispatch through the tag
/// and never name a concrete client type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ClientType {
    Solomachine,
}

impl ClientType {
    const SOLOMACHINE_STR: &'static str = "06-solomachine";

    /// Yields the identifier of this client type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solomachine => Self::SOLOMACHINE_STR,
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClientType({})", self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::SOLOMACHINE_STR => Ok(Self::Solomachine),
            _ => Err(Error::unknown_client_type(s.to_string())),
        }
    }
}
