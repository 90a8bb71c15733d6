//! Hand-maintained protobuf message structs for the wire and storage
//! encodings. These mirror the upstream `.proto` definitions; field numbers
//! are part of the network-wide encoding agreement and must not change.

pub mod channel;
pub mod client;
pub mod solomachine;

pub use prost_types::Any;
