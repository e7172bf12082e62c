// File: crates/api/src/traits/kem.rs

//! Trait definitions for Key Encapsulation Mechanisms (KEM) with enhanced
//! type safety
//!
//! This module provides a type-safe interface for key encapsulation
//! mechanisms, which are used for secure key exchange in public-key
//! cryptography.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
///
/// # Security Design
///
/// This trait enforces strong type safety and clear contracts for
/// serialization, preventing common security vulnerabilities.
pub trait Kem {
    /// Public key type with appropriate constraints.
    type PublicKey: Clone + Serialize;

    /// Secret key type with security guarantees.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` to guarantee safe `from_bytes` and
    ///   `to_bytes_zeroizing` methods.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type with security guarantees.
    ///
    /// # Security Note
    /// Should be converted to application keys immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for efficient storage of related keys. It is an
    /// intermediate type and does not require a serialization contract.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    /// - Keys must be generated according to the algorithm specification.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    ///
    /// # Security Note
    /// The returned secret key should be protected and zeroized after use.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// # Security Requirements
    /// - Must validate the public key internally.
    /// - Must use fresh randomness from the provided RNG.
    /// - Must be resistant to side-channel attacks.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    ///
    /// # Security Requirements
    /// - Must be constant-time.
    /// - Should use implicit rejection for IND-CCA2 security where
    ///   applicable: a malformed ciphertext yields a pseudorandom shared
    ///   secret, never an error.
    /// - Must not leak information about the secret key.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}

/// Fixed-size scheme surface of a KEM: declared buffer sizes and the
/// deterministic (seeded) entry points.
///
/// Every buffer a [`KemScheme`] produces or consumes has a length fixed by
/// the parameter set; `unmarshal`-style constructors must reject any other
/// length.
pub trait KemScheme: Kem {
    /// Public key size in bytes.
    const PUBLIC_KEY_SIZE: usize;
    /// Secret key size in bytes.
    const SECRET_KEY_SIZE: usize;
    /// Ciphertext size in bytes.
    const CIPHERTEXT_SIZE: usize;
    /// Shared secret size in bytes.
    const SHARED_SECRET_SIZE: usize;
    /// Key-generation seed size in bytes.
    const SEED_SIZE: usize;
    /// Deterministic-encapsulation seed size in bytes.
    const ENCAPSULATION_SEED_SIZE: usize;

    /// Deterministically derive a keypair from a seed of exactly
    /// [`Self::SEED_SIZE`] bytes.
    ///
    /// Calling this twice with the same seed must yield byte-identical
    /// keys. A seed of any other length is a caller-contract violation
    /// reported as [`crate::Error::WrongSeedSize`].
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Deterministic encapsulation for reproducible test vectors.
    ///
    /// The seed must be exactly [`Self::ENCAPSULATION_SEED_SIZE`] bytes; it
    /// is expanded through a deterministic random-bit generator, discarding
    /// one generator block before use.
    fn encapsulate_deterministic(
        public_key: &Self::PublicKey,
        seed: &[u8],
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;
}
