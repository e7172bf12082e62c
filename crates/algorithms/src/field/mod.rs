// File: crates/algorithms/src/field/mod.rs

//! Binary extension field arithmetic
//!
//! All operations are constant time: no secret-dependent branches, no
//! secret-indexed table lookups. Inversion is a fixed square-and-multiply
//! chain rather than extended Euclid for that reason.

pub mod gf2e13;

pub use gf2e13::{add, div, inv, is_zero_mask, mul, sqr, Gf, GF_BITS, GF_MASK};
