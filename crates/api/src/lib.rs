//! Public API traits and types for the pqcore library
//!
//! This crate provides the public API surface for the pqcore ecosystem:
//! the capability traits implemented by every algorithm family, the
//! serialization contracts for key material, and the common error taxonomy.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Kem, KemScheme, Serialize, SerializeSecret, Signature};

// Re-export trait modules for direct access
pub use traits::{kem, serialize, signature};
