//! Constants for the Classic McEliece key encapsulation mechanism
//!
//! Sizes follow the round-4 NIST submission. The secret key layout behind
//! `secret_key_size` is
//! `seed(32) || pivots(8) || irr(2t) || control bits || padding(n/8)`.

/// Parameters of one Classic McEliece parameter set
pub struct McElieceParams {
    /// Field degree m (field is GF(2^m))
    pub m: usize,

    /// Code length n
    pub n: usize,

    /// Error correction capability t (Goppa polynomial degree)
    pub t: usize,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Secret key size in bytes
    pub secret_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,

    /// Key-generation seed size in bytes
    pub seed_size: usize,

    /// Deterministic-encapsulation seed size in bytes
    pub encapsulation_seed_size: usize,

    /// Size of the Benes-network control bits in bytes:
    /// `(2m - 1) * 2^(m-4)`
    pub cond_bytes: usize,

    /// Size of the stored irreducible polynomial in bytes: `2t`
    pub irr_bytes: usize,
}

/// McEliece-348864 parameters (NIST security level 1)
pub const MCELIECE_348864: McElieceParams = McElieceParams {
    m: 12,
    n: 3488,
    t: 64,
    public_key_size: 261120,
    secret_key_size: 6492,
    ciphertext_size: 96,
    shared_secret_size: 32,
    seed_size: 32,
    encapsulation_seed_size: 48,
    cond_bytes: 5888,
    irr_bytes: 128,
};

/// McEliece-460896 parameters (NIST security level 3)
pub const MCELIECE_460896: McElieceParams = McElieceParams {
    m: 13,
    n: 4608,
    t: 96,
    public_key_size: 524160,
    secret_key_size: 13608,
    ciphertext_size: 156,
    shared_secret_size: 32,
    seed_size: 32,
    encapsulation_seed_size: 48,
    cond_bytes: 12800,
    irr_bytes: 192,
};

/// McEliece-6960119 parameters (NIST security level 5)
pub const MCELIECE_6960119: McElieceParams = McElieceParams {
    m: 13,
    n: 6960,
    t: 119,
    public_key_size: 1047319,
    secret_key_size: 13948,
    ciphertext_size: 194,
    shared_secret_size: 32,
    seed_size: 32,
    encapsulation_seed_size: 48,
    cond_bytes: 12800,
    irr_bytes: 238,
};
