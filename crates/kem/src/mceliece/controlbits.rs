// File: crates/kem/src/mceliece/controlbits.rs

//! Control bits for the Benes permutation network
//!
//! Converts a permutation of 2^m elements into the (2m - 1) * 2^(m-1)
//! condition bits that route the network, using the merge-based recursion
//! from Bernstein's "Verified fast formulas for control bits". All the
//! permutation composition steps go through a constant-time sort so the
//! secret permutation never drives a data-dependent memory access.

use super::sort::int32_sort;

/// Computes `c ∘ pi^-1`: entry `x` becomes `c[y]` for the `y` with
/// `pi[y] == x`.
///
/// Implemented by sorting (key, value) pairs packed into one `i32` each;
/// `pi` must be a permutation of `0..c.len()` and all values must fit in
/// 16 bits.
fn composeinv(c: &[i32], pi: &[i32]) -> Vec<i32> {
    let mut t: Vec<i32> = pi
        .iter()
        .zip(c.iter())
        .map(|(&p, &v)| (p << 16) | v)
        .collect();
    int32_sort(&mut t);
    t.iter().map(|&v| v & 0xFFFF).collect()
}

#[inline]
fn min_i32(a: i32, b: i32) -> i32 {
    b ^ ((a ^ b) & (a.wrapping_sub(b) >> 31))
}

/// Returns the control bits for `pi` as one value per bit, in layer order:
/// first layer, interleaved middle layers, last layer.
fn controlbits(pi: &[i32]) -> Vec<u8> {
    let n = pi.len();
    debug_assert!(n.is_power_of_two() && n >= 2);
    if n == 2 {
        return vec![(pi[0] & 1) as u8];
    }
    let m = n.trailing_zeros() as usize;

    let pn: Vec<i32> = (0..n).map(|x| pi[x ^ 1]).collect();
    let qn: Vec<i32> = (0..n).map(|x| pi[x] ^ 1).collect();
    let range: Vec<i32> = (0..n as i32).collect();
    let piinv = composeinv(&range, pi);

    let mut p = composeinv(&pn, &qn);
    let mut q = composeinv(&qn, &pn);

    let mut c: Vec<i32> = (0..n).map(|x| min_i32(x as i32, p[x])).collect();
    let (np, nq) = (composeinv(&p, &q), composeinv(&q, &p));
    p = np;
    q = nq;

    for _ in 1..m - 1 {
        let cp = composeinv(&c, &q);
        let (np, nq) = (composeinv(&p, &q), composeinv(&q, &p));
        p = np;
        q = nq;
        for x in 0..n {
            c[x] = min_i32(c[x], cp[x]);
        }
    }

    let f: Vec<u8> = (0..n / 2).map(|j| (c[2 * j] & 1) as u8).collect();
    let fx: Vec<i32> = (0..n).map(|x| x as i32 ^ f[x / 2] as i32).collect();
    let fpi = composeinv(&fx, &piinv);

    let l: Vec<u8> = (0..n / 2).map(|k| (fpi[2 * k] & 1) as u8).collect();
    let ly: Vec<i32> = (0..n).map(|y| y as i32 ^ l[y / 2] as i32).collect();
    let mperm = composeinv(&fpi, &ly);

    // split the remaining permutation into the two half-size subnetworks
    let sub0: Vec<i32> = (0..n / 2).map(|j| mperm[2 * j] >> 1).collect();
    let sub1: Vec<i32> = (0..n / 2).map(|j| mperm[2 * j + 1] >> 1).collect();
    let z0 = controlbits(&sub0);
    let z1 = controlbits(&sub1);

    let mut out = f;
    out.reserve(z0.len() * 2 + n / 2);
    for (b0, b1) in z0.iter().zip(z1.iter()) {
        out.push(*b0);
        out.push(*b1);
    }
    out.extend_from_slice(&l);
    out
}

/// Writes the packed control bits for permutation `pi` of `0..2^m` into
/// `out`, which must hold exactly `(2m - 1) * 2^(m-4)` bytes. Bits are
/// packed least-significant first.
pub fn control_bits_from_permutation(out: &mut [u8], pi: &[i16]) {
    let n = pi.len();
    debug_assert_eq!(out.len() * 8, (2 * n.trailing_zeros() as usize - 1) * (n / 2));

    let pi32: Vec<i32> = pi.iter().map(|&x| x as i32).collect();
    let bits = controlbits(&pi32);

    for b in out.iter_mut() {
        *b = 0;
    }
    for (k, bit) in bits.iter().enumerate() {
        out[k / 8] |= bit << (k % 8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    // applies the network layer by layer to the identity sequence; the
    // result must equal pi
    fn permutation_from_bits(bits: &[u8], m: usize) -> Vec<i32> {
        let n = 1usize << m;
        let mut p: Vec<i32> = (0..n as i32).collect();
        let mut next = 0;
        for i in 0..2 * m - 1 {
            let gap = 1usize << i.min(2 * m - 2 - i);
            for j in 0..n / 2 {
                let pos = (j % gap) + 2 * gap * (j / gap);
                if bits[next] != 0 {
                    p.swap(pos, pos + gap);
                }
                next += 1;
            }
        }
        assert_eq!(next, bits.len());
        p
    }

    #[test]
    fn identity_permutation_needs_no_swaps() {
        let pi: Vec<i32> = (0..16).collect();
        let bits = controlbits(&pi);
        assert_eq!(permutation_from_bits(&bits, 4), pi);
    }

    #[test]
    fn network_reproduces_small_permutations() {
        for m in 1..=6usize {
            let n = 1usize << m;
            let mut rng = ChaCha20Rng::seed_from_u64(m as u64);
            for _ in 0..10 {
                let mut pi: Vec<i32> = (0..n as i32).collect();
                pi.shuffle(&mut rng);
                let bits = controlbits(&pi);
                assert_eq!(bits.len(), (2 * m - 1) * n / 2);
                assert_eq!(permutation_from_bits(&bits, m), pi, "m = {m}");
            }
        }
    }

    #[test]
    fn reversal_permutation_m3() {
        let pi: Vec<i32> = (0..8).rev().collect();
        let bits = controlbits(&pi);
        assert_eq!(permutation_from_bits(&bits, 3), pi);
    }

    #[test]
    fn packed_output_matches_bit_list() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut pi: Vec<i16> = (0..256).collect();
        pi.shuffle(&mut rng);

        // m = 8: (2m - 1) * 2^(m-1) bits
        let mut packed = vec![0u8; 15 * 128 / 8];
        control_bits_from_permutation(&mut packed, &pi);

        let pi32: Vec<i32> = pi.iter().map(|&x| x as i32).collect();
        let bits = controlbits(&pi32);
        for (k, bit) in bits.iter().enumerate() {
            assert_eq!((packed[k / 8] >> (k % 8)) & 1, *bit);
        }
    }
}
