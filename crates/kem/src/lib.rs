// File: crates/kem/src/lib.rs

//! Key encapsulation mechanisms
//!
//! Implementations of the [`pqcore_api::Kem`] trait. The flagship scheme is
//! [`mceliece::McEliece6960119`], a constant-time Classic McEliece KEM at
//! NIST security level 5 with implicit rejection.

pub mod mceliece;

pub use mceliece::McEliece6960119;
