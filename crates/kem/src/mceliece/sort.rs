// File: crates/kem/src/mceliece/sort.rs

//! Constant-time sorting networks
//!
//! Data-oblivious merge sort over power-of-two strides: the sequence of
//! compare-exchange positions depends only on the input length, so sorting
//! secret-derived values leaks nothing through the memory access pattern.

#[inline]
fn minmax_i32(a: &mut i32, b: &mut i32) {
    let ab = *b ^ *a;
    let mut c = (*b).wrapping_sub(*a);
    c ^= ab & (c ^ *b);
    c >>= 31;
    c &= ab;
    *a ^= c;
    *b ^= c;
}

#[inline]
fn minmax_u64(a: &mut u64, b: &mut u64) {
    // borrow out of b - a, correct over the full range (the plain
    // difference sign misorders operands more than 2^63 apart)
    let d = (*b).wrapping_sub(*a);
    let mut c = (!*b & *a) | ((!*b | *a) & d);
    c >>= 63;
    c = c.wrapping_neg();
    c &= *a ^ *b;
    *a ^= c;
    *b ^= c;
}

/// Sorts `x` ascending in constant time.
pub fn int32_sort(x: &mut [i32]) {
    let n = x.len();
    if n < 2 {
        return;
    }
    let mut top = 1;
    while top < n - top {
        top += top;
    }

    let mut p = top;
    while p > 0 {
        for i in 0..n - p {
            if i & p == 0 {
                let (lo, hi) = x.split_at_mut(i + p);
                minmax_i32(&mut lo[i], &mut hi[0]);
            }
        }
        let mut i = 0;
        let mut q = top;
        while q > p {
            while i < n - q {
                if i & p == 0 {
                    let mut a = x[i + p];
                    let mut r = q;
                    while r > p {
                        minmax_i32(&mut a, &mut x[i + r]);
                        r >>= 1;
                    }
                    x[i + p] = a;
                }
                i += 1;
            }
            q >>= 1;
        }
        p >>= 1;
    }
}

/// Sorts `x` ascending in constant time.
pub fn uint64_sort(x: &mut [u64]) {
    let n = x.len();
    if n < 2 {
        return;
    }
    let mut top = 1;
    while top < n - top {
        top += top;
    }

    let mut p = top;
    while p > 0 {
        for i in 0..n - p {
            if i & p == 0 {
                let (lo, hi) = x.split_at_mut(i + p);
                minmax_u64(&mut lo[i], &mut hi[0]);
            }
        }
        let mut i = 0;
        let mut q = top;
        while q > p {
            while i < n - q {
                if i & p == 0 {
                    let mut a = x[i + p];
                    let mut r = q;
                    while r > p {
                        minmax_u64(&mut a, &mut x[i + r]);
                        r >>= 1;
                    }
                    x[i + p] = a;
                }
                i += 1;
            }
            q >>= 1;
        }
        p >>= 1;
    }
}
