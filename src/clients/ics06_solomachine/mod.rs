//! The solo machine light client: a client tracking a single signing
//! authority rather than a multi-validator chain. Trust is a public key, a
//! strictly increasing sequence, and a diversifier; updates rotate the key,
//! misbehaviour evidence freezes the client permanently.

pub mod client_def;
pub mod client_state;
pub mod consensus_state;
pub mod error;
pub mod header;
pub mod misbehaviour;
pub mod public_key;
pub mod sign_bytes;

#[cfg(test)]
pub mod test_utils;
