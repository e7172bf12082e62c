// File: crates/api/src/error/mod.rs

//! Error handling for the pqcore API boundary
//!
//! The taxonomy distinguishes caller-contract violations (wrong seed, key,
//! or ciphertext sizes) from padding violations detected inside an
//! otherwise well-formed buffer. Decode failure during decapsulation is
//! deliberately *not* represented here: it is absorbed by implicit
//! rejection and never surfaces as an error.

mod types;

pub use types::{Error, Result};
