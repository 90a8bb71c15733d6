//! ICS 04: Packet semantics — the packet data entity, its structural
//! validation, and the commitment digests persisted in its place.

pub mod commitment;
pub mod error;
pub mod packet;
