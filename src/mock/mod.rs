//! In-memory host implementations backing the handler tests.

pub mod context;
