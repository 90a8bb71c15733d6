use core::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::error::Error;
use crate::clients::ics06_solomachine::public_key::PublicKey;
use crate::clients::ics06_solomachine::sign_bytes::{canonical_sign_bytes, HeaderSignBytes};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::header::Header as Ics02Header;
use crate::proto::solomachine::Header as RawHeader;
use crate::serializers::ser_hex_upper;
use crate::timestamp::Timestamp;

pub const SOLOMACHINE_HEADER_TYPE_URL: &str = "/ibc.lightclients.solomachine.v1.Header";

/// A key-rotation announcement signed by the current authority.
///
/// Accepting it advances the client's sequence and replaces the trusted
/// public key and diversifier with the ones carried here.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Header {
    pub sequence: u64,
    pub timestamp: Timestamp,
    #[serde(serialize_with = "ser_hex_upper")]
    pub signature: Vec<u8>,
    pub new_public_key: PublicKey,
    pub new_diversifier: String,
}

impl Header {
    /// The bytes the current authority must have signed for this header to
    /// be accepted: the rotation payload bound to the CURRENT diversifier.
    pub fn sign_bytes(&self, current_diversifier: &str) -> Result<Vec<u8>, Error> {
        canonical_sign_bytes(&HeaderSignBytes {
            sequence: self.sequence,
            timestamp: self.timestamp.nanoseconds(),
            diversifier: current_diversifier,
            new_public_key: &self.new_public_key,
            new_diversifier: &self.new_diversifier,
        })
    }

    pub fn validate_basic(&self) -> Result<(), Error> {
        if self.sequence == 0 {
            return Err(Error::zero_sequence());
        }

        if self.signature.is_empty() {
            return Err(Error::empty_signature());
        }

        if !self.new_diversifier.is_empty() && self.new_diversifier.trim().is_empty() {
            return Err(Error::blank_diversifier());
        }

        Ok(())
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Header {{ sequence: {}, timestamp: {}, new_public_key: {}, new_diversifier: {} }}",
            self.sequence, self.timestamp, self.new_public_key, self.new_diversifier
        )
    }
}

impl Ics02Header for Header {
    fn client_type(&self) -> ClientType {
        ClientType::Solomachine
    }

    fn sequence(&self) -> u64 {
        self.sequence
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl TryFrom<RawHeader> for Header {
    type Error = Error;

    fn try_from(raw: RawHeader) -> Result<Self, Self::Error> {
        if raw.new_public_key.is_empty() {
            return Err(Error::empty_public_key());
        }

        Ok(Header {
            sequence: raw.sequence,
            timestamp: Timestamp::from_nanoseconds(raw.timestamp),
            signature: raw.signature,
            new_public_key: PublicKey::from_bytes(&raw.new_public_key)?,
            new_diversifier: raw.new_diversifier,
        })
    }
}

impl From<Header> for RawHeader {
    fn from(value: Header) -> Self {
        RawHeader {
            sequence: value.sequence,
            timestamp: value.timestamp.nanoseconds(),
            signature: value.signature,
            new_public_key: value.new_public_key.as_bytes().to_vec(),
            new_diversifier: value.new_diversifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::clients::ics06_solomachine::test_utils::{public_key, signed_header};

    #[test]
    fn validate_basic_accepts_valid_header() {
        let header = signed_header(1, "oracle", 2, "oracle");
        assert!(header.validate_basic().is_ok());
    }

    #[test]
    fn validate_basic_rejects_zero_sequence() {
        let mut header = signed_header(1, "oracle", 2, "oracle");
        header.sequence = 0;
        assert!(header.validate_basic().is_err());
    }

    #[test]
    fn validate_basic_rejects_empty_signature() {
        let mut header = signed_header(1, "oracle", 2, "oracle");
        header.signature.clear();
        assert!(header.validate_basic().is_err());
    }

    #[test]
    fn validate_basic_rejects_blank_new_diversifier() {
        let mut header = signed_header(1, "oracle", 2, "oracle");
        header.new_diversifier = "  ".to_string();
        assert!(header.validate_basic().is_err());
    }

    #[test]
    fn sign_bytes_depend_on_current_diversifier() {
        let header = signed_header(1, "oracle", 2, "oracle");

        let with_current = header.sign_bytes("oracle").unwrap();
        let with_other = header.sign_bytes("impostor").unwrap();
        assert_ne!(with_current, with_other);
    }

    #[test]
    fn raw_roundtrip() {
        let header = signed_header(1, "oracle", 2, "next");

        let raw = RawHeader::from(header.clone());
        let back = Header::try_from(raw).unwrap();
        assert_eq!(header, back);
        assert_eq!(back.new_public_key, public_key(2));
    }
}
