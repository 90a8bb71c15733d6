#![allow(clippy::large_enum_variant)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! This library implements the packet/commitment layer and the solo machine
//! light client of the InterBlockchain Communication (IBC) protocol in Rust.
//! IBC lets two independent, mutually distrusting chains exchange opaque
//! application data through ordered channels, and lets one chain
//! cryptographically verify claims made about the other's state through a
//! lightweight "client" abstraction rather than by re-executing the remote
//! chain's consensus.
//!
//! The layout of this crate mirrors the classification of the Interchain
//! Standards. `core` holds the chain-agnostic pieces: the client interface
//! and its message handlers (ICS 2), packets and their commitment digests
//! (ICS 4), and identifier/path conventions (ICS 24). `clients` holds
//! concrete client verification logic, here the solo machine client (ICS 6),
//! which tracks a single signing authority through a rotating public key and
//! a strictly increasing sequence number.

pub mod clients;
pub mod core;
pub mod events;
pub mod handler;
pub mod keys;
pub mod proto;
pub mod serializers;
pub mod signer;
pub mod timestamp;
pub mod tx_msg;

mod height;

pub use height::Height;

#[cfg(any(test, feature = "mocks"))]
pub mod mock;
