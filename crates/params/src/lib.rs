//! Parameter-set constants for the pqcore library
//!
//! This crate holds nothing but numbers: the published parameter sets of
//! the algorithm families implemented (or planned) elsewhere in the
//! workspace. Keeping them in one dependency-free crate lets every other
//! crate agree on sizes without pulling in code.

pub mod pqc;
