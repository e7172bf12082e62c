// File: crates/algorithms/src/field/gf2e13.rs

//! GF(2^13) arithmetic modulo x^13 + x^4 + x^3 + x + 1
//!
//! Elements are 13-bit values carried in a `u16`. Products are accumulated
//! in a `u64` schoolbook loop and folded back below the modulus with two
//! reduction passes, one for bits 16..26 and one for bits 13..16.

/// A field element. Only the low [`GF_BITS`] bits are significant.
pub type Gf = u16;

/// Field degree: elements live in GF(2^13).
pub const GF_BITS: usize = 13;

/// Mask selecting the significant bits of a [`Gf`].
pub const GF_MASK: u16 = (1 << GF_BITS) - 1;

/// Field addition (carryless, so just XOR).
#[inline]
pub fn add(a: Gf, b: Gf) -> Gf {
    a ^ b
}

/// Field multiplication.
#[inline]
pub fn mul(a: Gf, b: Gf) -> Gf {
    let t0 = a as u64;
    let t1 = b as u64;

    let mut tmp = t0 * (t1 & 1);
    for i in 1..GF_BITS {
        tmp ^= t0 * (t1 & (1 << i));
    }

    // fold bits 16..26, then bits 13..16, down through the modulus
    let t = tmp & 0x1FF_0000;
    tmp ^= (t >> 9) ^ (t >> 10) ^ (t >> 12) ^ (t >> 13);

    let t = tmp & 0x000_E000;
    tmp ^= (t >> 9) ^ (t >> 10) ^ (t >> 12) ^ (t >> 13);

    (tmp as u16) & GF_MASK
}

/// Field squaring.
#[inline]
pub fn sqr(a: Gf) -> Gf {
    mul(a, a)
}

/// Field inversion: `a^(2^13 - 2)`, so `inv(0) == 0`.
pub fn inv(a: Gf) -> Gf {
    let a3 = mul(sqr(a), a); // a^3
    let a15 = {
        let t = sqr(sqr(a3)); // a^12
        mul(t, a3) // a^15
    };
    let a255 = {
        let mut t = a15;
        for _ in 0..4 {
            t = sqr(t);
        }
        mul(t, a15) // a^255
    };
    let a4095 = {
        let mut t = a255;
        for _ in 0..4 {
            t = sqr(t);
        }
        mul(t, a15) // a^4095
    };
    sqr(a4095) // a^8190 = a^(2^13 - 2)
}

/// Field division `num / den`. Returns 0 when `den == 0`.
#[inline]
pub fn div(num: Gf, den: Gf) -> Gf {
    mul(num, inv(den))
}

/// Returns `0x1FFF` if `a == 0`, `0` otherwise.
#[inline]
pub fn is_zero_mask(a: Gf) -> Gf {
    let t = (a as u32).wrapping_sub(1);
    ((t >> 19) as u16) & GF_MASK
}
