use core::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::error::Error;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::misbehaviour::Misbehaviour as Ics02Misbehaviour;
use crate::core::ics24_host::identifier::ClientId;
use crate::proto::solomachine::{
    Misbehaviour as RawMisbehaviour, SignatureAndData as RawSignatureAndData,
};
use crate::serializers::ser_hex_upper;

pub const SOLOMACHINE_MISBEHAVIOUR_TYPE_URL: &str = "/ibc.lightclients.solomachine.v1.Misbehaviour";

/// One half of a misbehaviour submission: a signature together with the data
/// it claims was signed at a given sequence.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignatureAndData {
    #[serde(serialize_with = "ser_hex_upper")]
    pub signature: Vec<u8>,
    #[serde(serialize_with = "ser_hex_upper")]
    pub data: Vec<u8>,
    pub sequence: u64,
}

impl SignatureAndData {
    pub fn validate_basic(&self) -> Result<(), Error> {
        if self.signature.is_empty() {
            return Err(Error::empty_signature());
        }

        if self.data.is_empty() {
            return Err(Error::empty_evidence_data());
        }

        if self.sequence == 0 {
            return Err(Error::zero_sequence());
        }

        Ok(())
    }
}

impl fmt::Debug for SignatureAndData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SignatureAndData {{ sequence: {}, data: {} bytes }}",
            self.sequence,
            self.data.len()
        )
    }
}

/// Evidence that the solo machine signed two different payloads at the same
/// sequence. Proving it freezes the client permanently.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Misbehaviour {
    pub client_id: ClientId,
    pub signature_one: SignatureAndData,
    pub signature_two: SignatureAndData,
}

impl Misbehaviour {
    /// The sequence both statements claim to be signed at.
    pub fn sequence(&self) -> u64 {
        self.signature_one.sequence
    }

    pub fn validate_basic(&self) -> Result<(), Error> {
        self.signature_one.validate_basic()?;
        self.signature_two.validate_basic()?;

        if self.signature_one.sequence != self.signature_two.sequence {
            return Err(Error::evidence_sequence_mismatch(
                self.signature_one.sequence,
                self.signature_two.sequence,
            ));
        }

        if self.signature_one.data == self.signature_two.data {
            return Err(Error::evidence_not_conflicting());
        }

        Ok(())
    }
}

impl Ics02Misbehaviour for Misbehaviour {
    fn client_type(&self) -> ClientType {
        ClientType::Solomachine
    }

    fn client_id(&self) -> &ClientId {
        &self.client_id
    }
}

impl TryFrom<RawSignatureAndData> for SignatureAndData {
    type Error = Error;

    fn try_from(raw: RawSignatureAndData) -> Result<Self, Self::Error> {
        Ok(SignatureAndData {
            signature: raw.signature,
            data: raw.data,
            sequence: raw.sequence,
        })
    }
}

impl From<SignatureAndData> for RawSignatureAndData {
    fn from(value: SignatureAndData) -> Self {
        RawSignatureAndData {
            signature: value.signature,
            data: value.data,
            sequence: value.sequence,
        }
    }
}

impl TryFrom<RawMisbehaviour> for Misbehaviour {
    type Error = Error;

    fn try_from(raw: RawMisbehaviour) -> Result<Self, Self::Error> {
        let signature_one = raw
            .signature_one
            .ok_or_else(Error::missing_signature_and_data)?
            .try_into()?;

        let signature_two = raw
            .signature_two
            .ok_or_else(Error::missing_signature_and_data)?
            .try_into()?;

        Ok(Misbehaviour {
            client_id: raw
                .client_id
                .parse()
                .map_err(Error::invalid_client_identifier)?,
            signature_one,
            signature_two,
        })
    }
}

impl From<Misbehaviour> for RawMisbehaviour {
    fn from(value: Misbehaviour) -> Self {
        RawMisbehaviour {
            client_id: value.client_id.to_string(),
            signature_one: Some(value.signature_one.into()),
            signature_two: Some(value.signature_two.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::clients::ics06_solomachine::error::ErrorDetail;
    use crate::clients::ics06_solomachine::test_utils::conflicting_evidence;

    #[test]
    fn validate_basic_accepts_conflicting_evidence() {
        let misbehaviour = conflicting_evidence(1, "oracle", 1, b"first", b"second");
        assert!(misbehaviour.validate_basic().is_ok());
    }

    #[test]
    fn validate_basic_rejects_mismatched_sequences() {
        let mut misbehaviour = conflicting_evidence(1, "oracle", 1, b"first", b"second");
        misbehaviour.signature_two.sequence = 2;

        let err = misbehaviour.validate_basic().unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::EvidenceSequenceMismatch(_)
        ));
    }

    #[test]
    fn validate_basic_rejects_identical_data() {
        let misbehaviour = conflicting_evidence(1, "oracle", 1, b"same", b"same");

        let err = misbehaviour.validate_basic().unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::EvidenceNotConflicting(_)));
    }

    #[test]
    fn validate_basic_rejects_empty_evidence() {
        let mut misbehaviour = conflicting_evidence(1, "oracle", 1, b"first", b"second");
        misbehaviour.signature_one.data.clear();
        assert!(misbehaviour.validate_basic().is_err());

        let mut misbehaviour = conflicting_evidence(1, "oracle", 1, b"first", b"second");
        misbehaviour.signature_two.signature.clear();
        assert!(misbehaviour.validate_basic().is_err());
    }

    #[test]
    fn raw_roundtrip() {
        let misbehaviour = conflicting_evidence(1, "oracle", 3, b"first", b"second");

        let raw = RawMisbehaviour::from(misbehaviour.clone());
        let back = Misbehaviour::try_from(raw).unwrap();
        assert_eq!(misbehaviour, back);
    }

    #[test]
    fn raw_conversion_requires_both_statements() {
        let misbehaviour = conflicting_evidence(1, "oracle", 1, b"first", b"second");

        let mut raw = RawMisbehaviour::from(misbehaviour);
        raw.signature_two = None;
        assert!(Misbehaviour::try_from(raw).is_err());
    }
}
