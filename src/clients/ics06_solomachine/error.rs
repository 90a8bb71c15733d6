use flex_error::{define_error, TraceError};

use crate::core::ics02_client::error::Error as Ics02Error;
use crate::core::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        InvalidClientIdentifier
            [ ValidationError ]
            | _ | { "invalid client identifier" },

        ZeroSequence
            | _ | { "sequence cannot be 0" },

        EmptyPublicKey
            | _ | { "public key cannot be empty" },

        InvalidPublicKeyLength
            { length: usize }
            | e | { format_args!("public key must be 32 bytes, got {0}", e.length) },

        InvalidPublicKey
            [ TraceError<ed25519_dalek::SignatureError> ]
            | _ | { "public key is not a valid ed25519 point" },

        BlankDiversifier
            | _ | { "diversifier cannot contain only spaces" },

        EmptySignature
            | _ | { "signature cannot be empty" },

        MalformedSignature
            [ TraceError<ed25519_dalek::SignatureError> ]
            | _ | { "signature is malformed" },

        SignatureVerification
            | _ | { "signature verification failed" },

        SequenceMismatch
            { expected: u64, actual: u64 }
            | e | { format_args!("sequence mismatch: expected {0}, got {1}", e.expected, e.actual) },

        EvidenceSequenceMismatch
            { one: u64, two: u64 }
            | e | { format_args!("sequence mismatch between evidence statements: {0} != {1}", e.one, e.two) },

        EmptyEvidenceData
            | _ | { "evidence statement data cannot be empty" },

        EvidenceNotConflicting
            | _ | { "evidence statements are not conflicting: signed payloads are identical" },

        Encode
            [ TraceError<serde_json::Error> ]
            | _ | { "cannot encode canonical sign bytes" },

        MissingConsensusState
            | _ | { "missing consensus state" },

        MissingSignatureAndData
            | _ | { "missing evidence statement" },
    }
}

impl From<Error> for Ics02Error {
    fn from(e: Error) -> Self {
        Self::client_specific(e.to_string())
    }
}
