// File: crates/kem/src/mceliece/encrypt.rs

//! Encapsulation
//!
//! Samples a weight-t error vector, computes its syndrome against the
//! public key, and hashes `1 || e || c` into the shared secret. Malformed
//! public-key padding is detected up front; the outputs are masked to zero
//! in that case, with the masking applied unconditionally.

use pqcore_algorithms::ct::same_mask16;
use pqcore_algorithms::xof;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::util::load_gf;
use super::{
    PK_NCOLS, PK_NROWS, PK_ROW_BYTES, SHARED_SECRET_SIZE, SYND_BYTES, SYS_N, SYS_T,
};

/// Samples a uniform weight-t error vector into `e`.
///
/// Rejection sampling: draw 2t field elements, keep those below n, retry
/// the whole batch on shortage or duplicates. The final spread into the
/// bit vector runs over every (byte, index) pair so the positions never
/// drive memory accesses.
fn gen_e<R: CryptoRng + RngCore>(e: &mut [u8; SYS_N / 8], rng: &mut R) {
    let mut ind = [0u16; SYS_T];
    let mut buf = [0u8; SYS_T * 4];

    'outer: loop {
        rng.fill_bytes(&mut buf);

        let mut count = 0;
        for i in 0..SYS_T * 2 {
            if count >= SYS_T {
                break;
            }
            let num = load_gf(&buf[2 * i..]);
            if (num as usize) < SYS_N {
                ind[count] = num;
                count += 1;
            }
        }
        if count < SYS_T {
            continue;
        }

        for i in 1..SYS_T {
            for j in 0..i {
                if ind[i] == ind[j] {
                    continue 'outer;
                }
            }
        }
        break;
    }

    let mut val = [0u8; SYS_T];
    for (v, &pos) in val.iter_mut().zip(ind.iter()) {
        *v = 1 << (pos & 7);
    }

    for (i, byte) in e.iter_mut().enumerate() {
        *byte = 0;
        for j in 0..SYS_T {
            let mask = same_mask16(i as u16, ind[j] >> 3);
            *byte |= val[j] & mask;
        }
    }

    ind.zeroize();
    val.zeroize();
    buf.zeroize();
}

/// Computes the syndrome `s = H e` for the systematic parity-check matrix
/// `H = (I | T)` encoded row-wise in `pk`.
fn syndrome(s: &mut [u8; SYND_BYTES], pk: &[u8], e: &[u8; SYS_N / 8]) {
    let tail = PK_NROWS % 8;
    let mut row = [0u8; SYS_N / 8];

    for b in s.iter_mut() {
        *b = 0;
    }

    for i in 0..PK_NROWS {
        for b in row.iter_mut() {
            *b = 0;
        }
        let pk_row = &pk[i * PK_ROW_BYTES..(i + 1) * PK_ROW_BYTES];
        row[SYS_N / 8 - PK_ROW_BYTES..].copy_from_slice(pk_row);

        // realign the stored row to its true column positions
        for j in (SYS_N / 8 - PK_ROW_BYTES..SYS_N / 8).rev() {
            row[j] = (row[j] << tail) | (row[j - 1] >> (8 - tail));
        }
        row[i / 8] |= 1 << (i % 8);

        let mut b = 0u8;
        for (r, v) in row.iter().zip(e.iter()) {
            b ^= r & v;
        }
        b ^= b >> 4;
        b ^= b >> 2;
        b ^= b >> 1;
        b &= 1;

        s[i / 8] |= b << (i % 8);
    }
}

/// Returns `0` when every public-key row has clean padding bits, `0xFF`
/// otherwise.
pub(super) fn check_pk_padding(pk: &[u8]) -> u8 {
    let mut b = 0u8;
    for i in 0..PK_NROWS {
        b |= pk[i * PK_ROW_BYTES + PK_ROW_BYTES - 1];
    }
    b >>= PK_NCOLS % 8;
    b = b.wrapping_sub(1);
    b >>= 7;
    b.wrapping_sub(1)
}

/// Encapsulates against `pk`, writing the ciphertext into `c` and the
/// shared secret into `key`. Returns the padding mask: `0` on success,
/// `0xFF` when the public key had stray padding bits (outputs zeroed).
pub(super) fn encapsulate<R: CryptoRng + RngCore>(
    c: &mut [u8; SYND_BYTES],
    key: &mut [u8; SHARED_SECRET_SIZE],
    pk: &[u8],
    rng: &mut R,
) -> u8 {
    let padding_ok = check_pk_padding(pk);

    let mut e = [0u8; SYS_N / 8];
    gen_e(&mut e, rng);
    syndrome(c, pk, &e);

    let mut one_ec = [0u8; 1 + SYS_N / 8 + SYND_BYTES];
    one_ec[0] = 1;
    one_ec[1..1 + SYS_N / 8].copy_from_slice(&e);
    one_ec[1 + SYS_N / 8..].copy_from_slice(&c[..]);

    xof::shake256(key, &one_ec);

    let mask = padding_ok ^ 0xFF;
    for b in c.iter_mut() {
        *b &= mask;
    }
    for b in key.iter_mut() {
        *b &= mask;
    }

    e.zeroize();
    one_ec.zeroize();

    padding_ok
}
