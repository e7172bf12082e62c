// File: crates/kem/src/mceliece/keygen.rs

//! Key generation
//!
//! Seeded key generation: one SHAKE256 expansion of the current seed
//! supplies the random string `r` holding (from the top) the next seed,
//! the Goppa polynomial candidate, the permutation candidate, and the
//! implicit-rejection string `s`. Either candidate can be rejected, in
//! which case the whole round retries with the next seed.

use pqcore_algorithms::field::{self, Gf, GF_MASK};
use pqcore_algorithms::xof;

use super::controlbits::control_bits_from_permutation;
use super::poly::{eval, minimal_polynomial};
use super::sort::uint64_sort;
use super::util::{bitrev, load4, load_gf, store8, store_gf};
use super::{
    COND_BYTES, GF_BITS, IRR_BYTES, PK_NROWS, PK_ROW_BYTES, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE,
    SEED_SIZE, SYS_N, SYS_T,
};

const EXP: usize = 1 << GF_BITS;

// layout of the expanded random string r
const PERM_INDEX: usize = SYS_N / 8;
const IRR_INDEX: usize = PERM_INDEX + EXP * 4;
const SEED_INDEX: usize = IRR_INDEX + SYS_T * 2;
const R_LEN: usize = SEED_INDEX + SEED_SIZE;

// secret key layout offsets
const SK_PIVOTS: usize = 32;
const SK_IRR: usize = SK_PIVOTS + 8;
const SK_COND: usize = SK_IRR + IRR_BYTES;
const SK_S: usize = SK_COND + COND_BYTES;

/// Builds the systematic-form public key from the Goppa polynomial in
/// `irr` and the permutation candidate `perm`.
///
/// On success fills `pk` and the reduced permutation `pi` and returns
/// `true`. Returns `false` when `perm` has duplicates or the parity-check
/// matrix fails to reach systematic form.
fn pk_gen(pk: &mut [u8], irr: &[u8], perm: &[u32], pi: &mut [i16]) -> bool {
    let mut g = [0 as Gf; SYS_T + 1];
    g[SYS_T] = 1;
    for i in 0..SYS_T {
        g[i] = load_gf(&irr[2 * i..]);
    }

    // sort field elements with their index attached; equal high halves
    // mean a repeated element, which would make the support degenerate
    let mut buf = vec![0u64; EXP];
    for (i, b) in buf.iter_mut().enumerate() {
        *b = (perm[i] as u64) << 31 | i as u64;
    }
    uint64_sort(&mut buf);
    for i in 1..EXP {
        if buf[i - 1] >> 31 == buf[i] >> 31 {
            return false;
        }
    }
    for (i, p) in pi.iter_mut().enumerate() {
        *p = (buf[i] & GF_MASK as u64) as i16;
    }

    let mut l = [0 as Gf; SYS_N];
    for i in 0..SYS_N {
        l[i] = bitrev(pi[i] as Gf);
    }

    let mut inv = [0 as Gf; SYS_N];
    for i in 0..SYS_N {
        inv[i] = field::inv(eval(&g, l[i]));
    }

    // parity-check matrix H: PK_NROWS rows of SYS_N bit columns, row
    // i*GF_BITS + k holding bit k of g(L_j)^-1 * L_j^i
    let mut mat = vec![[0u8; SYS_N / 8]; PK_NROWS];
    for i in 0..SYS_T {
        for j in (0..SYS_N).step_by(8) {
            for k in 0..GF_BITS {
                let mut b = ((inv[j + 7] >> k) & 1) as u8;
                for x in (0..7).rev() {
                    b <<= 1;
                    b |= ((inv[j + x] >> k) & 1) as u8;
                }
                mat[i * GF_BITS + k][j / 8] = b;
            }
        }
        for j in 0..SYS_N {
            inv[j] = field::mul(inv[j], l[j]);
        }
    }

    // Gaussian elimination to systematic form
    for i in 0..(PK_NROWS + 7) / 8 {
        for j in 0..8 {
            let row = i * 8 + j;
            if row >= PK_NROWS {
                break;
            }

            for k in row + 1..PK_NROWS {
                let mut mask = mat[row][i] ^ mat[k][i];
                mask >>= j;
                mask &= 1;
                mask = mask.wrapping_neg();
                let (top, bottom) = mat.split_at_mut(k);
                for (a, b) in top[row].iter_mut().zip(bottom[0].iter()) {
                    *a ^= b & mask;
                }
            }

            if (mat[row][i] >> j) & 1 == 0 {
                return false;
            }

            for k in 0..PK_NROWS {
                if k == row {
                    continue;
                }
                let mut mask = mat[k][i] >> j;
                mask &= 1;
                mask = mask.wrapping_neg();
                let (a, b): (&mut [u8; SYS_N / 8], &[u8; SYS_N / 8]) = if k < row {
                    let (top, bottom) = mat.split_at_mut(row);
                    (&mut top[k], &bottom[0])
                } else {
                    let (top, bottom) = mat.split_at_mut(k);
                    (&mut bottom[0], &top[row])
                };
                for (x, y) in a.iter_mut().zip(b.iter()) {
                    *x ^= y & mask;
                }
            }
        }
    }

    // the identity block ends mid-byte; shift the remaining PK_NCOLS bits
    // down to a byte boundary while extracting each row
    let tail = PK_NROWS % 8;
    for (i, row) in mat.iter().enumerate() {
        let pk_row = &mut pk[i * PK_ROW_BYTES..(i + 1) * PK_ROW_BYTES];
        let src = &row[PK_NROWS / 8..];
        for j in 0..PK_ROW_BYTES - 1 {
            pk_row[j] = (src[j] >> tail) | (src[j + 1] << (8 - tail));
        }
        pk_row[PK_ROW_BYTES - 1] = src[PK_ROW_BYTES - 1] >> tail;
    }

    true
}

/// Deterministically generates a keypair from a 32-byte seed.
///
/// The secret key layout is
/// `seed(32) || pivots(8) || irr(2t) || control bits || s(n/8)`
/// and the public key is the row-major systematic block of the
/// parity-check matrix, `PK_NROWS * PK_ROW_BYTES` bytes.
pub(super) fn derive_keypair(entropy: &[u8; SEED_SIZE]) -> (Box<[u8]>, Box<[u8]>) {
    let mut pk = vec![0u8; PUBLIC_KEY_SIZE].into_boxed_slice();
    let mut sk = vec![0u8; SECRET_KEY_SIZE].into_boxed_slice();

    let mut seed = [0u8; 33];
    seed[0] = 64;
    seed[1..].copy_from_slice(entropy);

    let mut r = vec![0u8; R_LEN];
    let mut f = [0 as Gf; SYS_T];
    let mut irr = [0 as Gf; SYS_T];
    let mut perm = vec![0u32; EXP];
    let mut pi = vec![0i16; EXP];
    let pivots: u64 = 0xFFFF_FFFF;

    loop {
        // expand and advance the seed chain
        xof::shake256(&mut r, &seed);
        sk[..32].copy_from_slice(&seed[1..]);
        seed[1..].copy_from_slice(&r[R_LEN - 32..]);

        for (i, v) in f.iter_mut().enumerate() {
            *v = load_gf(&r[IRR_INDEX + 2 * i..]);
        }
        if !minimal_polynomial(&mut irr, &f) {
            continue;
        }
        for (i, &v) in irr.iter().enumerate() {
            store_gf(&mut sk[SK_IRR + 2 * i..], v);
        }

        for (i, p) in perm.iter_mut().enumerate() {
            *p = load4(&r[PERM_INDEX + 4 * i..]);
        }
        if !pk_gen(&mut pk, &sk[SK_IRR..SK_IRR + IRR_BYTES], &perm, &mut pi) {
            continue;
        }

        control_bits_from_permutation(&mut sk[SK_COND..SK_COND + COND_BYTES], &pi);
        sk[SK_S..SK_S + SYS_N / 8].copy_from_slice(&r[..SYS_N / 8]);
        store8(&mut sk[SK_PIVOTS..], pivots);
        return (pk, sk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants_are_consistent() {
        assert_eq!(R_LEN, 33908);
        assert_eq!(SK_S + SYS_N / 8, SECRET_KEY_SIZE);
        assert_eq!(PK_NROWS * PK_ROW_BYTES, PUBLIC_KEY_SIZE);
    }

    #[test]
    fn pk_gen_rejects_duplicate_permutation_entries() {
        let irr = [0u8; IRR_BYTES];
        let perm = vec![0u32; EXP];
        let mut pi = vec![0i16; EXP];
        let mut pk = vec![0u8; PUBLIC_KEY_SIZE];
        assert!(!pk_gen(&mut pk, &irr, &perm, &mut pi));
    }
}
