//! Signing-key fixtures shared by the solo machine tests.

use ed25519_dalek::{Signer, SigningKey};

use crate::clients::ics06_solomachine::client_state::ClientState;
use crate::clients::ics06_solomachine::consensus_state::ConsensusState;
use crate::clients::ics06_solomachine::header::Header;
use crate::clients::ics06_solomachine::misbehaviour::{Misbehaviour, SignatureAndData};
use crate::clients::ics06_solomachine::public_key::PublicKey;
use crate::clients::ics06_solomachine::sign_bytes::{
    canonical_sign_bytes, MisbehaviourSignBytes, StateSignBytes,
};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics24_host::identifier::ClientId;
use crate::core::ics24_host::path::Path;
use crate::timestamp::Timestamp;

pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_bytes(&[seed; 32])
}

pub fn public_key(seed: u8) -> PublicKey {
    PublicKey::from_bytes(signing_key(seed).verifying_key().as_bytes()).unwrap()
}

pub fn sign(seed: u8, bytes: &[u8]) -> Vec<u8> {
    signing_key(seed).sign(bytes).to_bytes().to_vec()
}

pub fn dummy_consensus_state(sequence: u64) -> ConsensusState {
    ConsensusState {
        sequence,
        public_key: public_key(1),
        diversifier: "oracle".to_string(),
        timestamp: Timestamp::from_nanoseconds(10),
    }
}

pub fn dummy_client_state(sequence: u64, key_seed: u8, diversifier: &str) -> ClientState {
    ClientState {
        client_id: ClientId::new(ClientType::Solomachine, 0).unwrap(),
        frozen: false,
        consensus_state: ConsensusState {
            sequence,
            public_key: public_key(key_seed),
            diversifier: diversifier.to_string(),
            timestamp: Timestamp::from_nanoseconds(10),
        },
    }
}

/// A header at sequence 1, signed by `current_seed`'s key over sign bytes
/// bound to `current_diversifier`.
pub fn signed_header(
    current_seed: u8,
    current_diversifier: &str,
    new_seed: u8,
    new_diversifier: &str,
) -> Header {
    let mut header = Header {
        sequence: 1,
        timestamp: Timestamp::from_nanoseconds(20),
        signature: vec![],
        new_public_key: public_key(new_seed),
        new_diversifier: new_diversifier.to_string(),
    };

    let sign_bytes = header.sign_bytes(current_diversifier).unwrap();
    header.signature = sign(current_seed, &sign_bytes);
    header
}

/// Two statements at the same sequence, each properly signed by
/// `key_seed`'s key under `diversifier`.
pub fn conflicting_evidence(
    key_seed: u8,
    diversifier: &str,
    sequence: u64,
    data_one: &[u8],
    data_two: &[u8],
) -> Misbehaviour {
    let statement = |data: &[u8]| {
        let sign_bytes = canonical_sign_bytes(&MisbehaviourSignBytes {
            sequence,
            diversifier,
            data,
        })
        .unwrap();

        SignatureAndData {
            signature: sign(key_seed, &sign_bytes),
            data: data.to_vec(),
            sequence,
        }
    };

    Misbehaviour {
        client_id: ClientId::new(ClientType::Solomachine, 0).unwrap(),
        signature_one: statement(data_one),
        signature_two: statement(data_two),
    }
}

/// A proof signature over a store path and digest, at the client's current
/// sequence and diversifier.
pub fn signed_state_proof(
    key_seed: u8,
    client_state: &ClientState,
    path: Path,
    data: &[u8],
) -> Vec<u8> {
    let sign_bytes = canonical_sign_bytes(&StateSignBytes {
        sequence: client_state.sequence(),
        diversifier: &client_state.consensus_state.diversifier,
        path: path.to_string(),
        data,
    })
    .unwrap();

    sign(key_seed, &sign_bytes)
}
