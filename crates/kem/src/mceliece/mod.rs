// File: crates/kem/src/mceliece/mod.rs

//! Classic McEliece key encapsulation (mceliece6960119 parameter set)
//!
//! IND-CCA2 secure KEM from the round-4 NIST submission, built on binary
//! Goppa codes over GF(2^13) with n = 6960 and t = 119. Key generation is
//! seeded and retries internally until the parity-check matrix reaches
//! systematic form; decapsulation uses implicit rejection, so a ciphertext
//! that fails to decode still produces a shared secret derived from a
//! secret string rather than an error.
//!
//! Secret key layout: `seed(32) || pivots(8) || irr(238) || control
//! bits(12800) || s(870)`. The public key is the row-major systematic
//! block of the parity-check matrix.

use pqcore_api::{Error, Kem, KemScheme, Result, Serialize, SerializeSecret};
use pqcore_algorithms::drbg::AesCtrDrbg;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

mod benes;
mod controlbits;
mod decrypt;
mod encrypt;
mod keygen;
mod poly;
mod sort;
mod util;

#[cfg(test)]
mod tests;

/// Field degree: arithmetic is over GF(2^13).
pub const GF_BITS: usize = 13;
/// Code length.
pub const SYS_N: usize = 6960;
/// Error correction capability (degree of the Goppa polynomial).
pub const SYS_T: usize = 119;

/// Rows of the parity-check matrix, m * t.
pub const PK_NROWS: usize = SYS_T * GF_BITS;
/// Columns of the non-identity block.
pub const PK_NCOLS: usize = SYS_N - PK_NROWS;
/// Bytes per stored public-key row.
pub const PK_ROW_BYTES: usize = (PK_NCOLS + 7) / 8;
/// Syndrome length in bytes.
pub const SYND_BYTES: usize = (PK_NROWS + 7) / 8;
/// Packed Benes-network control bits, (2m - 1) * 2^(m-4) bytes.
pub const COND_BYTES: usize = (1 << (GF_BITS - 4)) * (2 * GF_BITS - 1);
/// Stored Goppa polynomial, 2t bytes.
pub const IRR_BYTES: usize = SYS_T * 2;

/// Public key size in bytes.
pub const PUBLIC_KEY_SIZE: usize = PK_NROWS * PK_ROW_BYTES;
/// Secret key size in bytes.
pub const SECRET_KEY_SIZE: usize = 32 + 8 + IRR_BYTES + COND_BYTES + SYS_N / 8;
/// Ciphertext size in bytes.
pub const CIPHERTEXT_SIZE: usize = SYND_BYTES;
/// Shared secret size in bytes.
pub const SHARED_SECRET_SIZE: usize = 32;
/// Key-generation seed size in bytes.
pub const SEED_SIZE: usize = 32;
/// Deterministic-encapsulation seed size in bytes.
pub const ENCAPSULATION_SEED_SIZE: usize = 48;

// keep the local constants in lockstep with the published parameter record
const _: () = {
    use pqcore_params::pqc::mceliece::MCELIECE_6960119 as P;
    assert!(P.m == GF_BITS);
    assert!(P.n == SYS_N);
    assert!(P.t == SYS_T);
    assert!(P.public_key_size == PUBLIC_KEY_SIZE);
    assert!(P.secret_key_size == SECRET_KEY_SIZE);
    assert!(P.ciphertext_size == CIPHERTEXT_SIZE);
    assert!(P.shared_secret_size == SHARED_SECRET_SIZE);
    assert!(P.seed_size == SEED_SIZE);
    assert!(P.encapsulation_seed_size == ENCAPSULATION_SEED_SIZE);
    assert!(P.cond_bytes == COND_BYTES);
    assert!(P.irr_bytes == IRR_BYTES);
};

const CONTEXT: &str = "mceliece6960119";

/// An mceliece6960119 public key.
#[derive(Clone)]
pub struct PublicKey(Vec<u8>);

/// An mceliece6960119 secret key. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

/// A 32-byte shared secret. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_SIZE]);

/// An mceliece6960119 ciphertext (194-byte syndrome).
#[derive(Clone)]
pub struct Ciphertext([u8; CIPHERTEXT_SIZE]);

impl PublicKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl SecretKey {
    /// The 32-byte generation seed, a compressed form of the whole key:
    /// feeding it back to [`McEliece6960119::derive_keypair`] reproduces
    /// the keypair bit for bit.
    pub fn seed(&self) -> [u8; SEED_SIZE] {
        let mut seed = [0u8; SEED_SIZE];
        seed.copy_from_slice(&self.0[..SEED_SIZE]);
        seed
    }

    /// Recomputes the matching public key from the stored seed.
    pub fn public_key(&self) -> PublicKey {
        let seed = Zeroizing::new(self.seed());
        let (pk, _) = keygen::derive_keypair(&seed);
        PublicKey(pk.into_vec())
    }

    /// The secret-key body the decoder consumes: irr polynomial, control
    /// bits, and the implicit-rejection string.
    fn body(&self) -> &[u8] {
        &self.0[40..]
    }
}

impl SharedSecret {
    /// Raw secret bytes. Convert to application keys promptly.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Ciphertext {
    /// Raw ciphertext bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}
impl Eq for PublicKey {}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}
impl Eq for SecretKey {}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}
impl Eq for SharedSecret {}

impl PartialEq for Ciphertext {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}
impl Eq for Ciphertext {}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(Error::WrongKeySize {
                context: CONTEXT,
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for SecretKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(Error::WrongKeySize {
                context: CONTEXT,
                expected: SECRET_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl SerializeSecret for SharedSecret {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SHARED_SECRET_SIZE {
            return Err(Error::WrongKeySize {
                context: CONTEXT,
                expected: SHARED_SECRET_SIZE,
                actual: bytes.len(),
            });
        }
        let mut ss = [0u8; SHARED_SECRET_SIZE];
        ss.copy_from_slice(bytes);
        Ok(Self(ss))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }
}

impl Serialize for Ciphertext {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CIPHERTEXT_SIZE {
            return Err(Error::WrongCiphertextSize {
                context: CONTEXT,
                expected: CIPHERTEXT_SIZE,
                actual: bytes.len(),
            });
        }
        let mut ct = [0u8; CIPHERTEXT_SIZE];
        ct.copy_from_slice(bytes);
        Ok(Self(ct))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// The mceliece6960119 KEM (NIST security level 5).
pub struct McEliece6960119;

impl Kem for McEliece6960119 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type SharedSecret = SharedSecret;
    type Ciphertext = Ciphertext;
    type KeyPair = (PublicKey, SecretKey);

    fn name() -> &'static str {
        "mceliece6960119"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
        rng.try_fill_bytes(&mut *seed)
            .map_err(|_| Error::RandomGeneration { context: CONTEXT })?;
        let (pk, sk) = keygen::derive_keypair(&seed);
        Ok((PublicKey(pk.into_vec()), SecretKey(sk.into_vec())))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)> {
        let mut ct = [0u8; CIPHERTEXT_SIZE];
        let mut ss = [0u8; SHARED_SECRET_SIZE];
        let padding = encrypt::encapsulate(&mut ct, &mut ss, &public_key.0, rng);
        if padding != 0 {
            return Err(Error::Padding { context: CONTEXT });
        }
        Ok((Ciphertext(ct), SharedSecret(ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret> {
        let mut ss = [0u8; SHARED_SECRET_SIZE];
        let padding = decrypt::decapsulate(&mut ss, &ciphertext.0, secret_key.body());
        if padding != 0 {
            return Err(Error::Padding { context: CONTEXT });
        }
        Ok(SharedSecret(ss))
    }
}

impl KemScheme for McEliece6960119 {
    const PUBLIC_KEY_SIZE: usize = PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = SECRET_KEY_SIZE;
    const CIPHERTEXT_SIZE: usize = CIPHERTEXT_SIZE;
    const SHARED_SECRET_SIZE: usize = SHARED_SECRET_SIZE;
    const SEED_SIZE: usize = SEED_SIZE;
    const ENCAPSULATION_SEED_SIZE: usize = ENCAPSULATION_SEED_SIZE;

    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair> {
        if seed.len() != SEED_SIZE {
            return Err(Error::WrongSeedSize {
                context: CONTEXT,
                expected: SEED_SIZE,
                actual: seed.len(),
            });
        }
        let mut entropy = Zeroizing::new([0u8; SEED_SIZE]);
        entropy.copy_from_slice(seed);
        let (pk, sk) = keygen::derive_keypair(&entropy);
        Ok((PublicKey(pk.into_vec()), SecretKey(sk.into_vec())))
    }

    fn encapsulate_deterministic(
        public_key: &Self::PublicKey,
        seed: &[u8],
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)> {
        if seed.len() != ENCAPSULATION_SEED_SIZE {
            return Err(Error::WrongSeedSize {
                context: CONTEXT,
                expected: ENCAPSULATION_SEED_SIZE,
                actual: seed.len(),
            });
        }
        let mut entropy = Zeroizing::new([0u8; ENCAPSULATION_SEED_SIZE]);
        entropy.copy_from_slice(seed);

        let mut drbg = AesCtrDrbg::new(&entropy);
        let mut waste = [0u8; 32];
        drbg.fill(&mut waste);

        Self::encapsulate(&mut drbg, public_key)
    }
}
