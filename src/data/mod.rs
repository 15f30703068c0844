//! Data module: storage and typed arrays
#![warn(missing_docs)]

pub mod storage;
pub mod typed_array;

pub use crate::debug_invariants::DebugInvariants;

pub use storage::{Storage, VecStorage};
pub use typed_array::TypedArray;

/// Alias for the common Vec-backed array.
pub type CpuArray<T, const D: usize> = typed_array::TypedArray<T, D, VecStorage<T>>;
