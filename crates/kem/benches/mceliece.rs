// File: crates/kem/benches/mceliece.rs
//! Benchmarks for mceliece6960119 KEM operations
//!
//! This benchmark suite measures the performance of:
//! - Seeded key generation
//! - Encapsulation (random and deterministic)
//! - Decapsulation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pqcore_api::{Kem, KemScheme};
use pqcore_kem::mceliece::McEliece6960119;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_keypair_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("McEliece6960119/Keypair");
    group.sample_size(10);

    group.bench_function("derive", |b| {
        let seed = [7u8; 32];
        b.iter(|| {
            let keypair = McEliece6960119::derive_keypair(&seed).unwrap();
            black_box(keypair);
        });
    });

    group.finish();
}

fn bench_encapsulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("McEliece6960119/Encapsulate");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    let (recipient_pk, _) = McEliece6960119::derive_keypair(&[7u8; 32]).unwrap();

    group.bench_function("ChaCha20Rng", |b| {
        b.iter(|| {
            let (ciphertext, shared_secret) =
                McEliece6960119::encapsulate(&mut rng, &recipient_pk).unwrap();
            black_box((ciphertext, shared_secret));
        });
    });

    group.bench_function("deterministic", |b| {
        let seed = [9u8; 48];
        b.iter(|| {
            let (ciphertext, shared_secret) =
                McEliece6960119::encapsulate_deterministic(&recipient_pk, &seed).unwrap();
            black_box((ciphertext, shared_secret));
        });
    });

    group.finish();
}

fn bench_decapsulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("McEliece6960119/Decapsulate");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    let (recipient_pk, recipient_sk) = McEliece6960119::derive_keypair(&[7u8; 32]).unwrap();
    let (ciphertext, _) = McEliece6960119::encapsulate(&mut rng, &recipient_pk).unwrap();

    group.bench_function("default", |b| {
        b.iter(|| {
            let shared_secret =
                McEliece6960119::decapsulate(&recipient_sk, &ciphertext).unwrap();
            black_box(shared_secret);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_encapsulation,
    bench_decapsulation
);

criterion_main!(benches);
