//! # pqcore
//!
//! A modular library of post-quantum cryptographic primitives behind a
//! common capability interface.
//!
//! The centerpiece is a Classic McEliece key-encapsulation mechanism with
//! constant-time field arithmetic, a Benes permutation network, and a
//! Berlekamp-Massey syndrome decoder.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - `pqcore-api`: capability traits (`Kem`, `KemScheme`, `Signature`),
//!   serialization traits, and the error taxonomy
//! - `pqcore-params`: parameter-set constants
//! - `pqcore-algorithms`: shared primitives (binary-field arithmetic,
//!   SHAKE256 stream expansion, the NIST AES-CTR DRBG)
//! - `pqcore-kem`: key-encapsulation mechanisms
//!
//! ## Example
//!
//! Key generation builds a megabyte-scale key and takes a few seconds, so
//! the example is compile-checked but not executed by the doctest runner.
//!
//! ```no_run
//! use pqcore::api::{Kem, KemScheme};
//! use pqcore::kem::McEliece6960119;
//!
//! let seed = [0u8; 32];
//! let (pk, sk) = McEliece6960119::derive_keypair(&seed).unwrap();
//! let mut rng = rand::rngs::OsRng;
//! let (ct, ss_sender) = McEliece6960119::encapsulate(&mut rng, &pk).unwrap();
//! let ss_recipient = McEliece6960119::decapsulate(&sk, &ct).unwrap();
//! assert_eq!(ss_sender.as_bytes(), ss_recipient.as_bytes());
//! ```

pub use pqcore_algorithms as algorithms;
pub use pqcore_api as api;
pub use pqcore_kem as kem;
pub use pqcore_params as params;

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use crate::api::{Kem, KemScheme, Serialize, SerializeSecret};
    pub use crate::kem::McEliece6960119;
}
