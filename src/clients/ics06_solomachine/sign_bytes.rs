//! Canonical sign-bytes encodings.
//!
//! Signing input is the sorted-key JSON encoding of the structures below, so
//! independent implementations compute byte-identical bytes to sign. The
//! sorted ordering comes from `serde_json::Value`'s BTreeMap-backed objects;
//! the intermediate `to_value` step is what enforces it.

use serde::Serialize;

use crate::clients::ics06_solomachine::error::Error;
use crate::clients::ics06_solomachine::public_key::PublicKey;

/// What the current authority signs to rotate key and diversifier.
///
/// The CURRENT diversifier is mixed in so a header signed for one client
/// instance cannot be replayed against a different instance sharing the same
/// key.
#[derive(Serialize)]
pub struct HeaderSignBytes<'a> {
    pub sequence: u64,
    pub timestamp: u64,
    pub diversifier: &'a str,
    pub new_public_key: &'a PublicKey,
    pub new_diversifier: &'a str,
}

/// What an evidence statement's signature is checked against.
#[derive(Serialize)]
pub struct MisbehaviourSignBytes<'a> {
    pub sequence: u64,
    pub diversifier: &'a str,
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")]
    pub data: &'a [u8],
}

/// What the solo machine signs when proving a store entry (packet commitment
/// or acknowledgement digest) to a counterparty.
#[derive(Serialize)]
pub struct StateSignBytes<'a> {
    pub sequence: u64,
    pub diversifier: &'a str,
    pub path: String,
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")]
    pub data: &'a [u8],
}

/// Encodes a sign-bytes structure as canonical sorted-key JSON.
pub fn canonical_sign_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    let value = serde_json::to_value(value).map_err(Error::encode)?;
    serde_json::to_vec(&value).map_err(Error::encode)
}
