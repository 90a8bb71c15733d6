use crate::clients::ics06_solomachine::client_def::SoloMachineClient;
use crate::core::ics02_client::client_consensus::AnyConsensusState;
use crate::core::ics02_client::client_state::AnyClientState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::header::AnyHeader;
use crate::core::ics02_client::misbehaviour::AnyMisbehaviour;
use crate::core::ics04_channel::commitment::{AcknowledgementCommitment, PacketCommitment};
use crate::core::ics04_channel::packet::Sequence;
use crate::core::ics24_host::identifier::{ChannelId, ClientId, PortId};

/// The verification/update/freeze capability set every client variant
/// implements.
///
/// All operations take the current state by value or reference and return a
/// NEW state on success; the stored state is persisted by the caller only
/// after the operation succeeds, so every failure path leaves persisted
/// state byte-for-byte unchanged.
pub trait ClientDef: Clone {
    type Header;
    type ClientState;
    type ConsensusState;
    type Misbehaviour;

    /// Creates the initial trust record from a registration-time consensus
    /// state; fails if the supplied consensus state is itself invalid.
    fn initialize(
        &self,
        client_id: ClientId,
        consensus_state: Self::ConsensusState,
    ) -> Result<Self::ClientState, Error>;

    /// The core update rule: validates an authenticated header against the
    /// current state and yields the advanced state.
    fn check_header_and_update_state(
        &self,
        client_state: Self::ClientState,
        header: Self::Header,
    ) -> Result<(Self::ClientState, Self::ConsensusState), Error>;

    /// The freeze rule: validates evidence of conflicting signed statements
    /// and yields the permanently frozen state.
    fn check_misbehaviour_and_update_state(
        &self,
        client_state: Self::ClientState,
        misbehaviour: Self::Misbehaviour,
    ) -> Result<Self::ClientState, Error>;

    /// Checks a counterparty-signed proof that a packet commitment with the
    /// given digest is stored under the canonical path.
    fn verify_packet_commitment(
        &self,
        client_state: &Self::ClientState,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        commitment: &PacketCommitment,
        proof: &[u8],
    ) -> Result<(), Error>;

    /// Checks a counterparty-signed proof that an acknowledgement commitment
    /// with the given digest is stored under the canonical path.
    fn verify_packet_acknowledgement(
        &self,
        client_state: &Self::ClientState,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        ack_commitment: &AcknowledgementCommitment,
        proof: &[u8],
    ) -> Result<(), Error>;
}

/// Client registry: dispatches the `ClientDef` operations to the
/// implementation matching the client-type tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyClient {
    Solomachine(SoloMachineClient),
}

impl AnyClient {
    pub fn from_client_type(client_type: ClientType) -> AnyClient {
        match client_type {
            ClientType::Solomachine => Self::Solomachine(SoloMachineClient),
        }
    }
}

impl ClientDef for AnyClient {
    type Header = AnyHeader;
    type ClientState = AnyClientState;
    type ConsensusState = AnyConsensusState;
    type Misbehaviour = AnyMisbehaviour;

    fn initialize(
        &self,
        client_id: ClientId,
        consensus_state: AnyConsensusState,
    ) -> Result<AnyClientState, Error> {
        match self {
            Self::Solomachine(client) => {
                let AnyConsensusState::Solomachine(consensus_state) = consensus_state;

                let client_state = client.initialize(client_id, consensus_state)?;

                Ok(client_state.into())
            }
        }
    }

    fn check_header_and_update_state(
        &self,
        client_state: AnyClientState,
        header: AnyHeader,
    ) -> Result<(AnyClientState, AnyConsensusState), Error> {
        match self {
            Self::Solomachine(client) => {
                let AnyClientState::Solomachine(client_state) = client_state;
                let AnyHeader::Solomachine(header) = header;

                let (new_state, new_consensus) =
                    client.check_header_and_update_state(client_state, header)?;

                Ok((new_state.into(), new_consensus.into()))
            }
        }
    }

    fn check_misbehaviour_and_update_state(
        &self,
        client_state: AnyClientState,
        misbehaviour: AnyMisbehaviour,
    ) -> Result<AnyClientState, Error> {
        match self {
            Self::Solomachine(client) => {
                let AnyClientState::Solomachine(client_state) = client_state;
                let AnyMisbehaviour::Solomachine(misbehaviour) = misbehaviour;

                let frozen_state =
                    client.check_misbehaviour_and_update_state(client_state, misbehaviour)?;

                Ok(frozen_state.into())
            }
        }
    }

    fn verify_packet_commitment(
        &self,
        client_state: &AnyClientState,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        commitment: &PacketCommitment,
        proof: &[u8],
    ) -> Result<(), Error> {
        match self {
            Self::Solomachine(client) => {
                let AnyClientState::Solomachine(client_state) = client_state;

                client.verify_packet_commitment(
                    client_state,
                    port_id,
                    channel_id,
                    sequence,
                    commitment,
                    proof,
                )
            }
        }
    }

    fn verify_packet_acknowledgement(
        &self,
        client_state: &AnyClientState,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        ack_commitment: &AcknowledgementCommitment,
        proof: &[u8],
    ) -> Result<(), Error> {
        match self {
            Self::Solomachine(client) => {
                let AnyClientState::Solomachine(client_state) = client_state;

                client.verify_packet_acknowledgement(
                    client_state,
                    port_id,
                    channel_id,
                    sequence,
                    ack_commitment,
                    proof,
                )
            }
        }
    }
}
