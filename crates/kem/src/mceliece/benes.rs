// File: crates/kem/src/mceliece/benes.rs

//! Benes network application and support generation
//!
//! The secret key stores the support permutation as control bits for a
//! Benes network. Applying the network to a bit vector `r` produces the
//! permuted vector `r'` with `r'[i] = r[pi[i]]`, entirely through
//! branchless conditional swaps.

use pqcore_algorithms::field::Gf;

use super::util::bitrev;
use super::{COND_BYTES, GF_BITS, SYS_N};

const EXP: usize = 1 << GF_BITS;

#[inline]
fn get_bit(r: &[u8], pos: usize) -> u8 {
    (r[pos >> 3] >> (pos & 7)) & 1
}

#[inline]
fn xor_bit(r: &mut [u8], pos: usize, b: u8) {
    r[pos >> 3] ^= b << (pos & 7);
}

/// Routes the 2^13-bit vector `r` through the Benes network driven by the
/// packed control bits `cond` ([`COND_BYTES`] of them).
pub fn apply_benes(r: &mut [u8; EXP / 8], cond: &[u8]) {
    debug_assert_eq!(cond.len(), COND_BYTES);
    let layers = 2 * GF_BITS - 1;
    let layer_bits = EXP / 2;

    for i in 0..layers {
        let gap = 1usize << i.min(layers - 1 - i);
        let base = i * layer_bits;
        for j in 0..layer_bits {
            let pos = (j % gap) + 2 * gap * (j / gap);
            let c = get_bit(cond, base + j);
            let d = (get_bit(r, pos) ^ get_bit(r, pos + gap)) & c;
            xor_bit(r, pos, d);
            xor_bit(r, pos + gap, d);
        }
    }
}

/// Recovers the support `s` from the control bits `c`: `s[i]` is the
/// bit-reversed image of `pi(i)` for the secret permutation `pi`.
///
/// Each of the 13 bit planes of the bit-reversed index sequence is pushed
/// through the network independently, then the planes are reassembled into
/// field elements.
pub fn support_gen(s: &mut [Gf; SYS_N], c: &[u8]) {
    let mut planes = [[0u8; EXP / 8]; GF_BITS];
    for i in 0..EXP {
        let a = bitrev(i as Gf);
        for (j, plane) in planes.iter_mut().enumerate() {
            plane[i / 8] |= (((a >> j) & 1) as u8) << (i % 8);
        }
    }

    for plane in planes.iter_mut() {
        apply_benes(plane, c);
    }

    for (i, si) in s.iter_mut().enumerate() {
        *si = 0;
        for j in (0..GF_BITS).rev() {
            *si <<= 1;
            *si |= ((planes[j][i / 8] >> (i % 8)) & 1) as u16;
        }
    }
}
