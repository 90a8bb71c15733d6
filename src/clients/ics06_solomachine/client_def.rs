use crate::clients::ics06_solomachine::client_state::ClientState;
use crate::clients::ics06_solomachine::consensus_state::ConsensusState;
use crate::clients::ics06_solomachine::error::Error;
use crate::clients::ics06_solomachine::header::Header;
use crate::clients::ics06_solomachine::misbehaviour::Misbehaviour;
use crate::clients::ics06_solomachine::sign_bytes::{
    canonical_sign_bytes, MisbehaviourSignBytes, StateSignBytes,
};
use crate::core::ics02_client::client_def::ClientDef;
use crate::core::ics02_client::error::Error as Ics02Error;
use crate::core::ics04_channel::commitment::{AcknowledgementCommitment, PacketCommitment};
use crate::core::ics04_channel::packet::Sequence;
use crate::core::ics24_host::identifier::{ChannelId, ClientId, PortId};
use crate::core::ics24_host::path::Path;

/// Verification and update logic for the solo machine client.
///
/// Every operation is pure: it consumes the current state and returns the
/// next one, leaving persistence to the caller. A failed operation therefore
/// never leaves a partially-updated client behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoloMachineClient;

impl SoloMachineClient {
    /// Checks one evidence statement against the currently trusted key.
    fn verify_evidence_statement(
        client_state: &ClientState,
        sequence: u64,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), Ics02Error> {
        let sign_bytes = canonical_sign_bytes(&MisbehaviourSignBytes {
            sequence,
            diversifier: &client_state.consensus_state.diversifier,
            data,
        })
        .map_err(|e| Ics02Error::misbehaviour_verification_failure(e.to_string()))?;

        client_state
            .consensus_state
            .public_key
            .verify(&sign_bytes, signature)
            .map_err(|e| Ics02Error::misbehaviour_verification_failure(e.to_string()))
    }

    /// Checks a counterparty-signed proof over a store path and the digest
    /// claimed to live there.
    fn verify_state_proof(
        client_state: &ClientState,
        path: Path,
        data: &[u8],
        proof: &[u8],
    ) -> Result<(), Ics02Error> {
        let sign_bytes = canonical_sign_bytes(&StateSignBytes {
            sequence: client_state.sequence(),
            diversifier: &client_state.consensus_state.diversifier,
            path: path.to_string(),
            data,
        })
        .map_err(|e| Ics02Error::client_specific(e.to_string()))?;

        client_state
            .consensus_state
            .public_key
            .verify(&sign_bytes, proof)
            .map_err(|e| Ics02Error::client_specific(e.to_string()))
    }
}

impl ClientDef for SoloMachineClient {
    type Header = Header;
    type ClientState = ClientState;
    type ConsensusState = ConsensusState;
    type Misbehaviour = Misbehaviour;

    fn initialize(
        &self,
        client_id: ClientId,
        consensus_state: ConsensusState,
    ) -> Result<ClientState, Ics02Error> {
        ClientState::new(client_id, consensus_state).map_err(Into::into)
    }

    fn check_header_and_update_state(
        &self,
        client_state: ClientState,
        header: Header,
    ) -> Result<(ClientState, ConsensusState), Ics02Error> {
        if client_state.frozen {
            return Err(Ics02Error::client_frozen(client_state.client_id));
        }

        if header.sequence != client_state.sequence() {
            return Err(Ics02Error::header_verification_failure(
                Error::sequence_mismatch(client_state.sequence(), header.sequence).to_string(),
            ));
        }

        let sign_bytes = header
            .sign_bytes(&client_state.consensus_state.diversifier)
            .map_err(|e| Ics02Error::header_verification_failure(e.to_string()))?;

        client_state
            .consensus_state
            .public_key
            .verify(&sign_bytes, &header.signature)
            .map_err(|e| Ics02Error::header_verification_failure(e.to_string()))?;

        let new_consensus_state = ConsensusState {
            sequence: header.sequence + 1,
            public_key: header.new_public_key,
            diversifier: header.new_diversifier,
            timestamp: header.timestamp,
        };

        let new_client_state = ClientState {
            client_id: client_state.client_id,
            frozen: false,
            consensus_state: new_consensus_state.clone(),
        };

        Ok((new_client_state, new_consensus_state))
    }

    fn check_misbehaviour_and_update_state(
        &self,
        client_state: ClientState,
        misbehaviour: Misbehaviour,
    ) -> Result<ClientState, Ics02Error> {
        if client_state.frozen {
            return Err(Ics02Error::client_frozen(client_state.client_id));
        }

        // Checked here as well as in message validation, so the freeze rule
        // stands on its own when called outside the handler pipeline: the
        // statements must share a sequence and carry differing payloads.
        misbehaviour
            .validate_basic()
            .map_err(|e| Ics02Error::misbehaviour_verification_failure(e.to_string()))?;

        Self::verify_evidence_statement(
            &client_state,
            misbehaviour.signature_one.sequence,
            &misbehaviour.signature_one.data,
            &misbehaviour.signature_one.signature,
        )?;

        Self::verify_evidence_statement(
            &client_state,
            misbehaviour.signature_two.sequence,
            &misbehaviour.signature_two.data,
            &misbehaviour.signature_two.signature,
        )?;

        // Double-signing proven; freeze without touching the trust material.
        Ok(ClientState {
            frozen: true,
            ..client_state
        })
    }

    fn verify_packet_commitment(
        &self,
        client_state: &ClientState,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        commitment: &PacketCommitment,
        proof: &[u8],
    ) -> Result<(), Ics02Error> {
        if client_state.frozen {
            return Err(Ics02Error::client_frozen(client_state.client_id.clone()));
        }

        let path = Path::Commitments {
            port_id: port_id.clone(),
            channel_id: channel_id.clone(),
            sequence,
        };

        Self::verify_state_proof(client_state, path, commitment.as_bytes(), proof)
    }

    fn verify_packet_acknowledgement(
        &self,
        client_state: &ClientState,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        ack_commitment: &AcknowledgementCommitment,
        proof: &[u8],
    ) -> Result<(), Ics02Error> {
        if client_state.frozen {
            return Err(Ics02Error::client_frozen(client_state.client_id.clone()));
        }

        let path = Path::Acks {
            port_id: port_id.clone(),
            channel_id: channel_id.clone(),
            sequence,
        };

        Self::verify_state_proof(client_state, path, ack_commitment.as_bytes(), proof)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::clients::ics06_solomachine::test_utils::{
        conflicting_evidence, dummy_client_state, public_key, sign, signed_header,
        signed_state_proof,
    };
    use crate::core::ics02_client::error::ErrorDetail as Ics02ErrorDetail;
    use crate::core::ics04_channel::commitment::compute_packet_commitment;
    use crate::core::ics04_channel::packet::Packet;

    #[test]
    fn update_advances_sequence_and_rotates_key() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");
        let header = signed_header_at(5, 1, "oracle", 2, "next");

        let (new_state, new_consensus) = client
            .check_header_and_update_state(state, header)
            .unwrap();

        assert_eq!(new_state.sequence(), 6);
        assert_eq!(new_consensus.sequence, 6);
        assert_eq!(new_consensus.public_key, public_key(2));
        assert_eq!(new_consensus.diversifier, "next");
        assert!(!new_state.frozen);
    }

    #[test]
    fn replayed_header_fails_with_sequence_mismatch() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");
        let header = signed_header_at(5, 1, "oracle", 1, "oracle");

        let (new_state, _) = client
            .check_header_and_update_state(state, header.clone())
            .unwrap();
        assert_eq!(new_state.sequence(), 6);

        let err = client
            .check_header_and_update_state(new_state, header)
            .unwrap_err();
        assert!(matches!(
            err.detail(),
            Ics02ErrorDetail::HeaderVerificationFailure(_)
        ));
    }

    #[test]
    fn update_rejects_signature_from_wrong_key() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");

        // Signed by key 9, while the client trusts key 1.
        let header = signed_header_at(5, 9, "oracle", 2, "oracle");

        let err = client.check_header_and_update_state(state, header).unwrap_err();
        assert!(matches!(
            err.detail(),
            Ics02ErrorDetail::HeaderVerificationFailure(_)
        ));
    }

    #[test]
    fn update_rejects_replay_across_diversifiers() {
        let client = SoloMachineClient;

        // Header signed for the "oracle" instance must not update a client
        // whose diversifier is different, even under the same key.
        let state = dummy_client_state(5, 1, "other-instance");
        let header = signed_header_at(5, 1, "oracle", 2, "oracle");

        assert!(client.check_header_and_update_state(state, header).is_err());
    }

    #[test]
    fn misbehaviour_freezes_client() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");
        let evidence = conflicting_evidence(1, "oracle", 5, b"first", b"second");

        let frozen = client
            .check_misbehaviour_and_update_state(state.clone(), evidence)
            .unwrap();

        assert!(frozen.frozen);
        // Freezing does not rotate key or sequence.
        assert_eq!(frozen.sequence(), state.sequence());
        assert_eq!(
            frozen.consensus_state.public_key,
            state.consensus_state.public_key
        );
    }

    #[test]
    fn frozen_client_rejects_update_before_other_checks() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");
        let evidence = conflicting_evidence(1, "oracle", 5, b"first", b"second");

        let frozen = client
            .check_misbehaviour_and_update_state(state, evidence)
            .unwrap();

        // Correctly signed at the right sequence, still refused.
        let header = signed_header_at(5, 1, "oracle", 2, "oracle");
        let err = client
            .check_header_and_update_state(frozen.clone(), header)
            .unwrap_err();
        assert!(matches!(err.detail(), Ics02ErrorDetail::ClientFrozen(_)));

        let evidence = conflicting_evidence(1, "oracle", 5, b"third", b"fourth");
        let err = client
            .check_misbehaviour_and_update_state(frozen, evidence)
            .unwrap_err();
        assert!(matches!(err.detail(), Ics02ErrorDetail::ClientFrozen(_)));
    }

    #[test]
    fn misbehaviour_rule_rejects_non_conflicting_evidence() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");

        // Both statements validly signed, but over identical payloads: the
        // freeze rule itself must refuse, without relying on message-level
        // validation having run first.
        let evidence = conflicting_evidence(1, "oracle", 5, b"same", b"same");
        let err = client
            .check_misbehaviour_and_update_state(state.clone(), evidence)
            .unwrap_err();
        assert!(matches!(
            err.detail(),
            Ics02ErrorDetail::MisbehaviourVerificationFailure(_)
        ));

        // Same for statements at differing sequences.
        let mut evidence = conflicting_evidence(1, "oracle", 5, b"first", b"second");
        evidence.signature_two.sequence = 6;
        let err = client
            .check_misbehaviour_and_update_state(state, evidence)
            .unwrap_err();
        assert!(matches!(
            err.detail(),
            Ics02ErrorDetail::MisbehaviourVerificationFailure(_)
        ));
    }

    #[test]
    fn misbehaviour_rejects_statement_signed_by_wrong_key() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");
        let evidence = conflicting_evidence(9, "oracle", 5, b"first", b"second");

        let err = client
            .check_misbehaviour_and_update_state(state, evidence)
            .unwrap_err();
        assert!(matches!(
            err.detail(),
            Ics02ErrorDetail::MisbehaviourVerificationFailure(_)
        ));
    }

    #[test]
    fn packet_commitment_proof_roundtrip() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");

        let packet = Packet {
            sequence: 1.into(),
            source_port: PortId::transfer(),
            source_channel: ChannelId::new(0),
            destination_port: PortId::transfer(),
            destination_channel: ChannelId::new(1),
            data: b"hello".to_vec(),
            timeout_height: 100.into(),
        };
        let commitment = compute_packet_commitment(&packet);

        let path = Path::Commitments {
            port_id: packet.source_port.clone(),
            channel_id: packet.source_channel.clone(),
            sequence: packet.sequence,
        };
        let proof = signed_state_proof(1, &state, path, commitment.as_bytes());

        assert!(client
            .verify_packet_commitment(
                &state,
                &packet.source_port,
                &packet.source_channel,
                packet.sequence,
                &commitment,
                &proof,
            )
            .is_ok());

        // Same proof presented for a different digest fails.
        let other = compute_packet_commitment(&Packet {
            data: b"tampered".to_vec(),
            ..packet.clone()
        });
        assert!(client
            .verify_packet_commitment(
                &state,
                &packet.source_port,
                &packet.source_channel,
                packet.sequence,
                &other,
                &proof,
            )
            .is_err());
    }

    #[test]
    fn ack_proof_is_bound_to_the_acks_path() {
        let client = SoloMachineClient;
        let state = dummy_client_state(5, 1, "oracle");

        let ack: AcknowledgementCommitment = vec![0xAB; 32].into();
        let path = Path::Commitments {
            port_id: PortId::transfer(),
            channel_id: ChannelId::new(0),
            sequence: 1.into(),
        };

        // Proof signed over the commitments path must not satisfy an ack
        // verification for the same digest.
        let proof = signed_state_proof(1, &state, path, ack.as_bytes());

        assert!(client
            .verify_packet_acknowledgement(
                &state,
                &PortId::transfer(),
                &ChannelId::new(0),
                1.into(),
                &ack,
                &proof,
            )
            .is_err());
    }

    /// A header at an explicit sequence, signed by `current_seed`'s key over
    /// sign bytes bound to `current_diversifier`.
    fn signed_header_at(
        sequence: u64,
        current_seed: u8,
        current_diversifier: &str,
        new_seed: u8,
        new_diversifier: &str,
    ) -> Header {
        let mut header = signed_header(current_seed, current_diversifier, new_seed, new_diversifier);
        header.sequence = sequence;

        let sign_bytes = header.sign_bytes(current_diversifier).unwrap();
        header.signature = sign(current_seed, &sign_bytes);
        header
    }
}
