//! Error type shared by every lattice stage.
//!
//! All failures are deterministic: the same input always produces the same
//! error, so nothing here is retryable.

/// Error type for lattice construction, labelling and export.
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    /// Caller supplied something the core cannot work with.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
    /// Number of inputs exceeds the configured ceiling.
    #[error("Too many inputs: {inputs} (maximum {max})")]
    TooManyInputs {
        /// Requested number of source variables.
        inputs: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// The order relation is not a partial order, or the finished lattice
    /// lacks a structural guarantee. Always an internal bug.
    #[error("Invariant violation: {reason}")]
    InvariantViolation {
        /// Description of the violated invariant.
        reason: String,
    },
    /// Two distinct atoms rendered to the same label.
    #[error("Label collision: {label}")]
    LabelCollision {
        /// The label both atoms produced.
        label: String,
    },
    /// A lattice atom has no value in the supplied decomposition.
    #[error("Missing value for atom: {label}")]
    MissingValue {
        /// Label of the atom without a value.
        label: String,
    },
    /// A supplied value names no atom of the lattice.
    #[error("Unknown atom label: {label}")]
    UnknownAtom {
        /// The unrecognised label.
        label: String,
    },
    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LatticeError {
    /// Create an invalid input error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an invariant violation error.
    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}
