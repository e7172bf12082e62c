// File: crates/algorithms/src/ct/mod.rs

//! Branchless helpers for secret-dependent conditionals
//!
//! Every conditional that depends on secret data must be expressed as an
//! arithmetic mask (all bits set or all bits clear) combined with AND/OR/
//! XOR, never as a branch. These helpers are the vocabulary for that:
//! compute a mask, then select.

/// Returns `0xFFFF` if `x == 0`, `0` otherwise.
#[inline]
pub fn is_zero_mask16(x: u16) -> u16 {
    let t = (x as u32).wrapping_sub(1);
    (t >> 16) as u16
}

/// Returns `0xFF` if `x == y`, `0` otherwise.
#[inline]
pub fn same_mask16(x: u16, y: u16) -> u8 {
    let mut mask = (x ^ y) as u32;
    mask = mask.wrapping_sub(1);
    mask >>= 31;
    mask = mask.wrapping_neg();
    (mask & 0xFF) as u8
}

/// Selects `a` where `mask` bits are set, `b` where they are clear.
///
/// `mask` must be all-ones or all-zero.
#[inline]
pub fn select8(mask: u8, a: u8, b: u8) -> u8 {
    (a & mask) | (b & !mask)
}

/// Selects `a` where `mask` bits are set, `b` where they are clear.
///
/// `mask` must be all-ones or all-zero.
#[inline]
pub fn select16(mask: u16, a: u16, b: u16) -> u16 {
    (a & mask) | (b & !mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mask_is_all_or_nothing() {
        assert_eq!(is_zero_mask16(0), 0xFFFF);
        for x in [1u16, 2, 0x1FFF, 0x8000, 0xFFFF] {
            assert_eq!(is_zero_mask16(x), 0);
        }
    }

    #[test]
    fn same_mask_detects_equality() {
        assert_eq!(same_mask16(0, 0), 0xFF);
        assert_eq!(same_mask16(1234, 1234), 0xFF);
        assert_eq!(same_mask16(1234, 1235), 0);
        assert_eq!(same_mask16(0, 0x8000), 0);
    }

    #[test]
    fn select_picks_by_mask() {
        assert_eq!(select8(0xFF, 0xAA, 0x55), 0xAA);
        assert_eq!(select8(0x00, 0xAA, 0x55), 0x55);
        assert_eq!(select16(0xFFFF, 0xAAAA, 0x5555), 0xAAAA);
        assert_eq!(select16(0x0000, 0xAAAA, 0x5555), 0x5555);
    }
}
