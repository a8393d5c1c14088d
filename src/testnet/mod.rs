//! Test fixtures for address and key testing
//!
//! Known secret key / public key / address / WIF vectors and a
//! deterministic key provider for injection.

pub mod test_utils;

pub use test_utils::*;
