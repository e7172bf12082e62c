// File: crates/algorithms/src/xof/mod.rs

//! SHAKE256 stream expansion
//!
//! Thin wrappers over the `sha3` crate. Key derivation treats SHAKE256 as
//! a pseudorandom byte stream: absorb a domain-separated seed, then squeeze
//! as many bytes as the caller needs, possibly across multiple reads.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256, Shake256Reader,
};

/// An incremental SHAKE256 output stream.
///
/// Created by [`Shake256Xof::new`]; successive [`read`](Shake256Xof::read)
/// calls continue the same stream.
pub struct Shake256Xof {
    reader: Shake256Reader,
}

impl Shake256Xof {
    /// Absorbs `input` and finalizes the sponge for squeezing.
    pub fn new(input: &[u8]) -> Self {
        let mut hasher = Shake256::default();
        hasher.update(input);
        Self {
            reader: hasher.finalize_xof(),
        }
    }

    /// Squeezes the next `out.len()` bytes of the stream into `out`.
    pub fn read(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}

/// One-shot SHAKE256: fills `output` from `input`.
pub fn shake256(output: &mut [u8], input: &[u8]) {
    Shake256Xof::new(input).read(output);
}

/// Expands `input` to a fresh `len`-byte vector.
pub fn expand(input: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    shake256(&mut out, input);
    out
}
