// File: crates/kem/src/mceliece/tests.rs

//! End-to-end tests for the mceliece6960119 KEM
//!
//! Key generation is expensive, so the tests share one keypair derived
//! from a fixed seed.

use std::sync::OnceLock;

use pqcore_api::{Error, Kem, KemScheme, Serialize, SerializeSecret};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::*;

fn fixed_seed() -> [u8; SEED_SIZE] {
    let mut seed = [0u8; SEED_SIZE];
    for (i, b) in seed.iter_mut().enumerate() {
        *b = i as u8;
    }
    seed
}

fn test_keypair() -> &'static (PublicKey, SecretKey) {
    static KEYPAIR: OnceLock<(PublicKey, SecretKey)> = OnceLock::new();
    KEYPAIR.get_or_init(|| {
        McEliece6960119::derive_keypair(&fixed_seed()).unwrap()
    })
}

#[test]
fn derived_keys_have_declared_sizes() {
    let (pk, sk) = test_keypair();
    assert_eq!(pk.as_bytes().len(), PUBLIC_KEY_SIZE);
    assert_eq!(sk.to_bytes_zeroizing().len(), SECRET_KEY_SIZE);
}

#[test]
fn public_key_padding_is_clean() {
    let (pk, _) = test_keypair();
    assert_eq!(encrypt::check_pk_padding(pk.as_bytes()), 0);
}

#[test]
fn secret_key_stores_its_seed() {
    let (_, sk) = test_keypair();
    assert_eq!(sk.seed(), fixed_seed());
}

#[test]
fn round_trip() {
    let (pk, sk) = test_keypair();
    let mut rng = ChaCha20Rng::seed_from_u64(100);
    let (ct, ss_sender) = McEliece6960119::encapsulate(&mut rng, pk).unwrap();
    assert_eq!(ct.as_bytes().len(), CIPHERTEXT_SIZE);
    let ss_receiver = McEliece6960119::decapsulate(sk, &ct).unwrap();
    assert!(ss_sender == ss_receiver);
}

#[test]
fn tampered_ciphertext_is_implicitly_rejected() {
    let (pk, sk) = test_keypair();
    let mut rng = ChaCha20Rng::seed_from_u64(101);
    let (ct, ss) = McEliece6960119::encapsulate(&mut rng, pk).unwrap();

    let mut bytes = ct.to_bytes();
    bytes[0] ^= 1;
    let tampered = Ciphertext::from_bytes(&bytes).unwrap();

    // no error, just a different secret
    let ss_bad = McEliece6960119::decapsulate(sk, &tampered).unwrap();
    assert!(ss != ss_bad);
}

#[test]
fn deterministic_encapsulation_reproduces() {
    let (pk, sk) = test_keypair();
    let seed = [0x42u8; ENCAPSULATION_SEED_SIZE];

    let (ct1, ss1) = McEliece6960119::encapsulate_deterministic(pk, &seed).unwrap();
    let (ct2, ss2) = McEliece6960119::encapsulate_deterministic(pk, &seed).unwrap();
    assert!(ct1 == ct2);
    assert!(ss1 == ss2);

    let other = [0x43u8; ENCAPSULATION_SEED_SIZE];
    let (ct3, _) = McEliece6960119::encapsulate_deterministic(pk, &other).unwrap();
    assert!(ct1 != ct3);

    let ss = McEliece6960119::decapsulate(sk, &ct1).unwrap();
    assert!(ss == ss1);
}

#[test]
fn derivation_is_deterministic() {
    let (pk, sk) = test_keypair();
    let (pk2, sk2) = McEliece6960119::derive_keypair(&fixed_seed()).unwrap();
    assert!(*pk == pk2);
    assert!(*sk == sk2);
}

#[test]
fn public_key_regenerates_from_secret_seed() {
    let (pk, sk) = test_keypair();
    assert!(*pk == sk.public_key());
}

#[test]
fn ciphertext_with_padding_bits_is_reported() {
    let (_, sk) = test_keypair();
    let mut bytes = vec![0u8; CIPHERTEXT_SIZE];
    bytes[CIPHERTEXT_SIZE - 1] = 0x80;
    let ct = Ciphertext::from_bytes(&bytes).unwrap();
    assert!(matches!(
        McEliece6960119::decapsulate(sk, &ct),
        Err(Error::Padding { .. })
    ));
}

#[test]
fn wrong_seed_sizes_are_rejected() {
    assert!(matches!(
        McEliece6960119::derive_keypair(&[0u8; 16]),
        Err(Error::WrongSeedSize { expected: 32, actual: 16, .. })
    ));

    let (pk, _) = test_keypair();
    assert!(matches!(
        McEliece6960119::encapsulate_deterministic(pk, &[0u8; 32]),
        Err(Error::WrongSeedSize { expected: 48, actual: 32, .. })
    ));
}

#[test]
fn wrong_buffer_lengths_are_rejected() {
    assert!(Ciphertext::from_bytes(&[0u8; CIPHERTEXT_SIZE - 1]).is_err());
    assert!(PublicKey::from_bytes(&[0u8; 100]).is_err());
    assert!(SecretKey::from_bytes(&[0u8; SECRET_KEY_SIZE + 1]).is_err());
    assert!(SharedSecret::from_bytes(&[0u8; 31]).is_err());
}
