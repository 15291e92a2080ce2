//! # signmod
//!
//! Community detection for signed, weighted networks: a multi-level Louvain
//! optimizer for signed modularity, returning 1-based community labels and
//! the modularity reached.
//!
//! Each call is self-contained (its own working matrices and its own random
//! generator), so cohorts of matrices can be processed in parallel by the
//! caller without coordination.

pub mod community;
/// Error types used across `signmod`.
pub mod error;

pub use community::{
    optimize, signed_modularity, CommunityDetection, Louvain, ModularityVariant, Partition,
    SignedLouvain,
};
pub use error::{Error, Result};
