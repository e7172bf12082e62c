// File: crates/api/src/traits/mod.rs

//! Capability traits implemented by pqcore algorithm families.

pub mod kem;
pub mod serialize;
pub mod signature;

pub use kem::{Kem, KemScheme};
pub use serialize::{Serialize, SerializeSecret};
pub use signature::Signature;
