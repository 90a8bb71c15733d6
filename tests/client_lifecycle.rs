//! End-to-end lifecycle of a solo machine client driven through the message
//! handlers: creation, a key-rotating update, then freezing on misbehaviour.

use core::str::FromStr;

use ed25519_dalek::{Signer as _, SigningKey};

use ibc_solo::clients::ics06_solomachine::consensus_state::ConsensusState;
use ibc_solo::clients::ics06_solomachine::header::Header;
use ibc_solo::clients::ics06_solomachine::misbehaviour::{Misbehaviour, SignatureAndData};
use ibc_solo::clients::ics06_solomachine::public_key::PublicKey;
use ibc_solo::clients::ics06_solomachine::sign_bytes::{
    canonical_sign_bytes, MisbehaviourSignBytes,
};
use ibc_solo::core::ics02_client::client_state::{AnyClientState, ClientState as _};
use ibc_solo::core::ics02_client::client_type::ClientType;
use ibc_solo::core::ics02_client::context::ClientReader;
use ibc_solo::core::ics02_client::error::ErrorDetail;
use ibc_solo::core::ics02_client::handler::{dispatch, keep};
use ibc_solo::core::ics02_client::msgs::create_client::MsgCreateClient;
use ibc_solo::core::ics02_client::msgs::misbehaviour::MsgSubmitMisbehaviour;
use ibc_solo::core::ics02_client::msgs::update_client::MsgUpdateClient;
use ibc_solo::core::ics02_client::msgs::ClientMsg;
use ibc_solo::core::ics24_host::identifier::ClientId;
use ibc_solo::mock::context::MockContext;
use ibc_solo::signer::Signer;
use ibc_solo::timestamp::Timestamp;

fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_bytes(&[seed; 32])
}

fn public_key(seed: u8) -> PublicKey {
    PublicKey::from_bytes(signing_key(seed).verifying_key().as_bytes()).unwrap()
}

fn signed_header(
    sequence: u64,
    current_seed: u8,
    current_diversifier: &str,
    new_seed: u8,
    new_diversifier: &str,
) -> Header {
    let mut header = Header {
        sequence,
        timestamp: Timestamp::from_nanoseconds(20),
        signature: vec![],
        new_public_key: public_key(new_seed),
        new_diversifier: new_diversifier.to_string(),
    };

    let sign_bytes = header.sign_bytes(current_diversifier).unwrap();
    header.signature = signing_key(current_seed)
        .sign(&sign_bytes)
        .to_bytes()
        .to_vec();
    header
}

fn evidence_statement(seed: u8, diversifier: &str, sequence: u64, data: &[u8]) -> SignatureAndData {
    let sign_bytes = canonical_sign_bytes(&MisbehaviourSignBytes {
        sequence,
        diversifier,
        data,
    })
    .unwrap();

    SignatureAndData {
        signature: signing_key(seed).sign(&sign_bytes).to_bytes().to_vec(),
        data: data.to_vec(),
        sequence,
    }
}

#[test]
fn solo_machine_client_lifecycle() {
    let mut ctx = MockContext::new();
    let client_id = ClientId::new(ClientType::Solomachine, 0).unwrap();

    // Register the client at sequence 1, trusting key 1.
    let msg = MsgCreateClient {
        client_id: client_id.clone(),
        consensus_state: ConsensusState {
            sequence: 1,
            public_key: public_key(1),
            diversifier: "oracle".to_string(),
            timestamp: Timestamp::from_nanoseconds(10),
        }
        .into(),
    };

    let output = dispatch(&ctx, ClientMsg::CreateClient(msg)).unwrap();
    keep(&mut ctx, output.result).unwrap();
    assert_eq!(ctx.client_counter().unwrap(), 1);

    // Rotate to key 2 with a header signed by key 1 at the current sequence.
    let msg = MsgUpdateClient {
        client_id: client_id.clone(),
        header: signed_header(1, 1, "oracle", 2, "oracle").into(),
    };

    let output = dispatch(&ctx, ClientMsg::UpdateClient(msg)).unwrap();
    keep(&mut ctx, output.result).unwrap();

    let AnyClientState::Solomachine(stored) = ctx.client_state(&client_id).unwrap();
    assert_eq!(stored.sequence(), 2);
    assert_eq!(stored.consensus_state.public_key, public_key(2));

    // Key 2 double-signs at sequence 2; the client must freeze.
    let msg = MsgSubmitMisbehaviour {
        misbehaviour: Misbehaviour {
            client_id: client_id.clone(),
            signature_one: evidence_statement(2, "oracle", 2, b"packet was sent"),
            signature_two: evidence_statement(2, "oracle", 2, b"packet was never sent"),
        }
        .into(),
        submitter: Signer::from_str("wronged-party").unwrap(),
    };

    let output = dispatch(&ctx, ClientMsg::Misbehaviour(msg)).unwrap();
    keep(&mut ctx, output.result).unwrap();
    assert!(ctx.client_state(&client_id).unwrap().is_frozen());

    // A correctly signed update at the right sequence is now refused with
    // the frozen error, not a signature or sequence error.
    let msg = MsgUpdateClient {
        client_id,
        header: signed_header(2, 2, "oracle", 3, "oracle").into(),
    };

    let err = dispatch(&ctx, ClientMsg::UpdateClient(msg)).unwrap_err();
    assert!(matches!(err.detail(), ErrorDetail::ClientFrozen(_)));
}
