use flex_error::{define_error, TraceError};

use crate::core::ics24_host::error::ValidationError;
use crate::core::ics24_host::identifier::ClientId;
use crate::signer::SignerError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        UnknownClientType
            { client_type: String }
            | e | { format_args!("unknown client type: {0}", e.client_type) },

        ClientAlreadyExists
            { client_id: ClientId }
            | e | { format_args!("client already exists: {0}", e.client_id) },

        ClientNotFound
            { client_id: ClientId }
            | e | { format_args!("client not found: {0}", e.client_id) },

        ClientFrozen
            { client_id: ClientId }
            | e | { format_args!("client is frozen: {0}", e.client_id) },

        HeaderVerificationFailure
            { reason: String }
            | e | { format_args!("header verification failed: {0}", e.reason) },

        MisbehaviourVerificationFailure
            { reason: String }
            | e | { format_args!("misbehaviour verification failed: {0}", e.reason) },

        UnknownClientStateType
            { client_state_type: String }
            | e | { format_args!("unknown client state type: {0}", e.client_state_type) },

        UnknownConsensusStateType
            { consensus_state_type: String }
            | e | { format_args!("unknown client consensus state type: {0}", e.consensus_state_type) },

        UnknownHeaderType
            { header_type: String }
            | e | { format_args!("unknown header type: {0}", e.header_type) },

        UnknownMisbehaviourType
            { misbehaviour_type: String }
            | e | { format_args!("unknown misbehaviour type: {0}", e.misbehaviour_type) },

        MissingRawConsensusState
            | _ | { "missing raw client consensus state" },

        MissingRawHeader
            | _ | { "missing raw header" },

        MissingRawMisbehaviour
            | _ | { "missing raw misbehaviour" },

        Decode
            [ TraceError<prost::DecodeError> ]
            | _ | { "decode error" },

        InvalidClientIdentifier
            [ ValidationError ]
            | _ | { "invalid client identifier" },

        Signer
            [ SignerError ]
            | _ | { "failed to parse signer" },

        ClientSpecific
            { description: String }
            | e | { format_args!("client specific error: {0}", e.description) },
    }
}
