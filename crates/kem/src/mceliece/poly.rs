// File: crates/kem/src/mceliece/poly.rs

//! Polynomial arithmetic over GF(2^13)
//!
//! Dense degree-t polynomials, plus the minimal-polynomial computation key
//! generation uses to turn a random field element of F_q^t into a monic
//! irreducible Goppa polynomial.

use pqcore_algorithms::field::{self, Gf};

use super::{SYS_N, SYS_T};

/// Evaluates `f` (degree t, t+1 coefficients) at `a` by Horner's rule.
pub fn eval(f: &[Gf; SYS_T + 1], a: Gf) -> Gf {
    let mut r = f[SYS_T];
    for i in (0..SYS_T).rev() {
        r = field::mul(r, a);
        r = field::add(r, f[i]);
    }
    r
}

/// Evaluates `f` at every support element, `out[i] = f(l[i])`.
pub fn root(out: &mut [Gf; SYS_N], f: &[Gf; SYS_T + 1], l: &[Gf; SYS_N]) {
    for (o, &a) in out.iter_mut().zip(l.iter()) {
        *o = eval(f, a);
    }
}

/// Multiplies `a` and `b` in F_q^t = F_q[y]/(y^t + y^8 + 1), the
/// extension the minimal-polynomial search works in.
pub fn poly_mul(out: &mut [Gf; SYS_T], a: &[Gf; SYS_T], b: &[Gf; SYS_T]) {
    let mut product = [0 as Gf; SYS_T * 2 - 1];
    for i in 0..SYS_T {
        for j in 0..SYS_T {
            product[i + j] ^= field::mul(a[i], b[j]);
        }
    }

    for i in (SYS_T..=(SYS_T - 1) * 2).rev() {
        product[i - SYS_T + 8] ^= product[i];
        product[i - SYS_T] ^= product[i];
    }

    out.copy_from_slice(&product[..SYS_T]);
}

/// Computes the minimal polynomial of `f` over F_q and stores its low t
/// coefficients in `out` (the polynomial is monic of degree t).
///
/// Returns `false` when the Gaussian elimination hits a zero pivot, in
/// which case the caller retries with fresh randomness.
pub fn minimal_polynomial(out: &mut [Gf; SYS_T], f: &[Gf; SYS_T]) -> bool {
    // mat[i] holds f^i; rows are the power basis, columns the coordinates
    let mut mat = vec![[0 as Gf; SYS_T]; SYS_T + 1];
    mat[0][0] = 1;
    mat[1] = *f;
    for i in 2..=SYS_T {
        let (lo, hi) = mat.split_at_mut(i);
        poly_mul(&mut hi[0], &lo[i - 1], f);
    }

    for j in 0..SYS_T {
        for k in j + 1..SYS_T {
            let mask = field::is_zero_mask(mat[j][j]);
            for c in j..=SYS_T {
                mat[c][j] ^= mat[c][k] & mask;
            }
        }

        if mat[j][j] == 0 {
            return false;
        }

        let inv = field::inv(mat[j][j]);
        for c in 0..=SYS_T {
            mat[c][j] = field::mul(mat[c][j], inv);
        }

        for k in 0..SYS_T {
            if k != j {
                let t = mat[j][k];
                for c in 0..=SYS_T {
                    mat[c][k] ^= field::mul(mat[c][j], t);
                }
            }
        }
    }

    out.copy_from_slice(&mat[SYS_T]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_constant_and_linear() {
        let mut f = [0 as Gf; SYS_T + 1];
        f[0] = 7;
        assert_eq!(eval(&f, 123), 7);

        // f(x) = x
        f[0] = 0;
        f[1] = 1;
        assert_eq!(eval(&f, 0x1ABC), 0x1ABC);
    }

    #[test]
    fn poly_mul_by_one() {
        let mut one = [0 as Gf; SYS_T];
        one[0] = 1;
        let mut a = [0 as Gf; SYS_T];
        for (i, v) in a.iter_mut().enumerate() {
            *v = ((i * 37 + 5) as u16) & 0x1FFF;
        }
        let mut out = [0 as Gf; SYS_T];
        poly_mul(&mut out, &a, &one);
        assert_eq!(out, a);
    }

    #[test]
    fn poly_mul_commutes() {
        let mut a = [0 as Gf; SYS_T];
        let mut b = [0 as Gf; SYS_T];
        for i in 0..SYS_T {
            a[i] = ((i * 31 + 1) as u16) & 0x1FFF;
            b[i] = ((i * i + 3) as u16) & 0x1FFF;
        }
        let mut ab = [0 as Gf; SYS_T];
        let mut ba = [0 as Gf; SYS_T];
        poly_mul(&mut ab, &a, &b);
        poly_mul(&mut ba, &b, &a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn minimal_polynomial_annihilates_f() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha20Rng;

        // draw candidates until the elimination succeeds; failure happens
        // with probability roughly 1/q per draw
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let mut f = [0 as Gf; SYS_T];
        let mut g = [0 as Gf; SYS_T];
        let mut found = false;
        for _ in 0..16 {
            for v in f.iter_mut() {
                *v = rng.gen::<u16>() & 0x1FFF;
            }
            if minimal_polynomial(&mut g, &f) {
                found = true;
                break;
            }
        }
        assert!(found);

        // g(f) = f^t + sum g[i] f^i must vanish in F_q^t
        let mut powers = vec![[0 as Gf; SYS_T]; SYS_T + 1];
        powers[0][0] = 1;
        powers[1] = f;
        for i in 2..=SYS_T {
            let (lo, hi) = powers.split_at_mut(i);
            poly_mul(&mut hi[0], &lo[i - 1], &f);
        }
        let mut acc = powers[SYS_T];
        for i in 0..SYS_T {
            for c in 0..SYS_T {
                acc[c] ^= field::mul(g[i], powers[i][c]);
            }
        }
        assert_eq!(acc, [0 as Gf; SYS_T]);
    }

    #[test]
    fn minimal_polynomial_rejects_degenerate_input() {
        // f = 0 has minimal polynomial x, degree 1 < t, so the full-rank
        // elimination must fail
        let f = [0 as Gf; SYS_T];
        let mut g = [0 as Gf; SYS_T];
        assert!(!minimal_polynomial(&mut g, &f));
    }
}
