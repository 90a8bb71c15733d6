//! Concrete light client implementations.

pub mod ics06_solomachine;
