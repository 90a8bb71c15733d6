//! ICS 24: Host requirements — identifier formats and store paths shared by
//! all participants.

pub mod error;
pub mod identifier;
pub mod path;
pub mod validate;
