use core::fmt;

/// Result alias for `signmod`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the modularity optimizers.
///
/// Every variant is fatal for the call that produced it: the optimizers never
/// return a partial partition.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input matrix was empty.
    EmptyInput,

    /// Length mismatch between a label vector and a matrix.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Shape mismatch (string description).
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Unrecognized modularity variant name.
    InvalidConfiguration {
        /// The rejected variant name.
        qtype: String,
    },

    /// Matrix is not symmetric at the given entry (only raised when a symmetry
    /// tolerance has been configured).
    Asymmetric {
        /// Row of the first offending entry.
        row: usize,
        /// Column of the first offending entry.
        col: usize,
    },

    /// The local-moving pass loop did not settle.
    LocalMovingDiverged {
        /// Number of passes attempted.
        passes: usize,
    },

    /// The level loop exceeded its cap.
    HierarchyOverflow {
        /// Number of levels attempted.
        levels: usize,
    },
}

impl Error {
    /// True for the two iteration-cap failures. A caller may retry these with
    /// a different seed; every other error is deterministic.
    pub fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            Error::LocalMovingDiverged { .. } | Error::HierarchyOverflow { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, actual {actual}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::InvalidConfiguration { qtype } => {
                write!(
                    f,
                    "unknown modularity type '{qtype}' (expected one of: standard, \
                     positive-only, simple, gja, negative-only)"
                )
            }
            Error::Asymmetric { row, col } => {
                write!(f, "matrix is not symmetric at ({row}, {col})")
            }
            Error::LocalMovingDiverged { passes } => {
                write!(
                    f,
                    "local moving did not converge after {passes} passes; \
                     this is usually caused by a directed (asymmetric) matrix"
                )
            }
            Error::HierarchyOverflow { levels } => {
                write!(
                    f,
                    "modularity hierarchy exceeded {levels} levels (infinite loop)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
