use core::fmt;

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use subtle_encoding::{Encoding, Hex};

use crate::clients::ics06_solomachine::error::Error;

/// Number of bytes of a raw public key.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Number of bytes of an account address derived from a public key.
const ADDRESS_LENGTH: usize = 20;

/// The ed25519 public key of the solo machine's signing authority.
///
/// Construction validates that the bytes form a valid curve point, so a held
/// `PublicKey` can always verify. Serialized as an upper-case hex string,
/// which also makes it deterministic inside canonical sign bytes.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::invalid_public_key_length(bytes.len()))?;

        VerifyingKey::from_bytes(&bytes).map_err(Error::invalid_public_key)?;

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// The account address bound to this key: the first 20 bytes of the
    /// key's SHA-256 digest, hex-encoded.
    pub fn to_address(&self) -> String {
        let digest = Sha256::digest(self.0);
        let address = &digest[..ADDRESS_LENGTH];

        // Hex encoding of a fixed-size slice cannot fail.
        Hex::lower_case()
            .encode_to_string(address)
            .unwrap_or_default()
    }

    /// Verifies `signature` over `sign_bytes` under this key.
    pub fn verify(&self, sign_bytes: &[u8], signature: &[u8]) -> Result<(), Error> {
        if signature.is_empty() {
            return Err(Error::empty_signature());
        }

        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(Error::invalid_public_key)?;

        let signature = Signature::from_slice(signature).map_err(Error::malformed_signature)?;

        verifying_key
            .verify(sign_bytes, &signature)
            .map_err(|_| Error::signature_verification())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = Hex::upper_case()
            .encode_to_string(self.0)
            .unwrap_or_default();
        write!(f, "{}", hex)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;

        let bytes = Hex::upper_case()
            .decode(hex.as_bytes())
            .map_err(D::Error::custom)?;

        PublicKey::from_bytes(&bytes).map_err(D::Error::custom)
    }
}
