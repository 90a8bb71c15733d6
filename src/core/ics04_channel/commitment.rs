use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::ics04_channel::packet::Packet;

/// The digest persisted in place of a full packet payload.
///
/// Computed once at send time, compared but never decoded, and deleted when
/// the packet is acknowledged or timed out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PacketCommitment(
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")] Vec<u8>,
);

impl PacketCommitment {
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for PacketCommitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PacketCommitment {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// The digest persisted in place of a full acknowledgement payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct AcknowledgementCommitment(
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")] Vec<u8>,
);

impl AcknowledgementCommitment {
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for AcknowledgementCommitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for AcknowledgementCommitment {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Computes the commitment digest for a packet:
/// `SHA-256(big_endian(timeout_height) || data)`.
///
/// Any change to the timeout height or the payload changes the digest, so a
/// stored commitment binds the sender to both.
pub fn compute_packet_commitment(packet: &Packet) -> PacketCommitment {
    let mut hash_input = Vec::new();

    hash_input.extend_from_slice(&u64::from(packet.timeout_height).to_be_bytes());
    hash_input.extend_from_slice(&packet.data);

    hash(&hash_input).into()
}

/// Computes the commitment digest for a packet acknowledgement.
pub fn compute_ack_commitment(ack: &[u8]) -> AcknowledgementCommitment {
    hash(ack).into()
}

/// Helper function to hash a byte slice with SHA-256, the network-wide
/// commitment hash algorithm.
fn hash(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}
