//! Shared cryptographic primitives for the pqcore library
//!
//! This crate collects the low-level building blocks the algorithm crates
//! are assembled from:
//!
//! - [`field`]: constant-time binary extension field arithmetic
//! - [`xof`]: SHAKE256 stream expansion (seed in, arbitrary bytes out)
//! - [`drbg`]: the AES-256-CTR deterministic random-bit generator used for
//!   reproducible encapsulation test vectors
//! - [`ct`]: branchless mask and select helpers for secret-dependent
//!   conditionals

pub mod ct;
pub mod drbg;
pub mod field;
pub mod xof;
