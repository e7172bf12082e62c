// File: crates/api/src/error/types.rs

//! Error type definitions for cryptographic operations

/// Primary error type for capability-interface operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key or ciphertext passed to a scheme it does not belong to.
    ///
    /// Rust's type system prevents this within a single crate; the variant
    /// exists for adapter layers that erase scheme types at runtime.
    TypeMismatch {
        context: &'static str,
    },

    /// Seed of incorrect length passed to a deterministic operation.
    ///
    /// This is a caller-contract violation, not a recoverable runtime
    /// condition.
    WrongSeedSize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Key buffer of incorrect length.
    WrongKeySize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Ciphertext buffer of incorrect length.
    WrongCiphertextSize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Nonzero bits outside the declared structure of a public key or
    /// ciphertext.
    ///
    /// Operations reporting this error still produce a defined, masked
    /// output; the masking arithmetic executes unconditionally so that
    /// padding validity cannot be observed through timing.
    Padding {
        context: &'static str,
    },

    /// The ambient randomness source failed to produce bytes.
    RandomGeneration {
        context: &'static str,
    },

    /// Serialization or deserialization failure.
    Serialization {
        context: &'static str,
    },
}

/// Result type for capability-interface operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TypeMismatch { context } => {
                write!(f, "{}: key does not belong to this scheme", context)
            }
            Self::WrongSeedSize {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: wrong seed size (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::WrongKeySize {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: wrong key size (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::WrongCiphertextSize {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: wrong ciphertext size (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::Padding { context } => {
                write!(f, "{}: padding bits outside declared structure", context)
            }
            Self::RandomGeneration { context } => {
                write!(f, "{}: randomness source failure", context)
            }
            Self::Serialization { context } => {
                write!(f, "{}: serialization error", context)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_and_sizes() {
        let err = Error::WrongSeedSize {
            context: "kem",
            expected: 32,
            actual: 16,
        };
        assert_eq!(err.to_string(), "kem: wrong seed size (expected 32, got 16)");

        let err = Error::Padding { context: "ct" };
        assert!(err.to_string().contains("padding"));
    }
}
