// File: crates/kem/src/mceliece/util.rs

//! Little-endian load/store helpers and bit utilities

use pqcore_algorithms::field::{Gf, GF_MASK};

use super::GF_BITS;

/// Loads a field element from the first 2 bytes of `src`.
#[inline]
pub fn load_gf(src: &[u8]) -> Gf {
    let a = (src[1] as u16) << 8 | src[0] as u16;
    a & GF_MASK
}

/// Stores field element `a` in the first 2 bytes of `dest`.
#[inline]
pub fn store_gf(dest: &mut [u8], a: Gf) {
    dest[0] = (a & 0xFF) as u8;
    dest[1] = (a >> 8) as u8;
}

/// Loads a 32-bit little-endian integer from `src`.
#[inline]
pub fn load4(src: &[u8]) -> u32 {
    u32::from_le_bytes([src[0], src[1], src[2], src[3]])
}

/// Stores a 64-bit integer to `dest` in little-endian order.
#[inline]
pub fn store8(dest: &mut [u8], a: u64) {
    dest[..8].copy_from_slice(&a.to_le_bytes());
}

/// Reverses the bit order of the field element `a`.
#[inline]
pub fn bitrev(a: Gf) -> Gf {
    let mut a = a;
    a = ((a & 0x00FF) << 8) | ((a & 0xFF00) >> 8);
    a = ((a & 0x0F0F) << 4) | ((a & 0xF0F0) >> 4);
    a = ((a & 0x3333) << 2) | ((a & 0xCCCC) >> 2);
    a = ((a & 0x5555) << 1) | ((a & 0xAAAA) >> 1);
    a >> (16 - GF_BITS)
}
