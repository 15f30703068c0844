//! FabError: Unified error type for fab-cast public APIs
//!
//! Every precondition of the cast kernel and of the checked array accessors
//! maps to one variant here. Checks run before any write, so an `Err` means
//! the destination was left untouched.

use thiserror::Error;

/// Which array of a two-array operation a component check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The array values are read from.
    Source,
    /// The array values are written to.
    Destination,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

/// Unified error type for fab-cast operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FabError {
    /// The iteration region is not contained in an array's domain.
    #[error("region {region} is not contained in {side} domain {domain}")]
    OutOfRange {
        side: Side,
        region: String,
        domain: String,
    },
    /// `offset + count` exceeds the component extent of an array.
    #[error("{side} components [{offset}, {offset}+{count}) exceed component extent {ncomp}")]
    ComponentOverflow {
        side: Side,
        offset: usize,
        count: usize,
        ncomp: usize,
    },
    /// A single spatial index lies outside the array domain.
    #[error("index {index} is outside domain {domain}")]
    IndexOutOfRange { index: String, domain: String },
    /// A single component index is not below the component extent.
    #[error("component {comp} is out of range for {ncomp} components")]
    ComponentOutOfRange { comp: usize, ncomp: usize },
    /// `num_pts * ncomp` does not fit in `usize`.
    #[error("size overflow: domain {domain} with {ncomp} components exceeds usize")]
    SizeOverflow { domain: String, ncomp: usize },
    /// Backing storage does not hold exactly `num_pts * ncomp` values.
    #[error("storage length mismatch: expected {expected}, found {found}")]
    StorageLengthMismatch { expected: usize, found: usize },
}
