#![cfg_attr(docsrs, feature(doc_cfg))]
//! # fab-cast
//!
//! fab-cast provides the type-converting copy kernel of a structured-grid
//! array library: given a destination and a source multi-component array over
//! integer index boxes, it converts a sub-box of selected component channels
//! from one element type to another.
//!
//! ## Features
//! - [`IndexBox`](index::IndexBox): inclusive 1-3 dimensional index ranges with a
//!   deterministic traversal order (axis 0 fastest)
//! - [`SrcComp`](index::SrcComp), [`DestComp`](index::DestComp) and
//!   [`NumComps`](index::NumComps): non-interchangeable component newtypes
//! - [`TypedArray`](data::TypedArray): dense, component-major arrays with
//!   checked and unchecked accessors
//! - [`cast`](algs::cast::cast) / [`cast_with`](algs::cast::cast_with): the
//!   converting sweep, validated up front and scheduled on a pluggable
//!   [`Executor`](algs::executor::Executor) (serial or Rayon)
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fab-cast = "0.1.0"
//! # Optional features:
//! # features = ["rayon", "check-invariants"]
//! ```
//!
//! ## Determinism
//! Every destination cell in the swept set is written exactly once from a
//! source cell that is never written, so serial and parallel executors give
//! bit-identical results.

pub mod algs;
pub mod data;
pub mod debug_invariants;
pub mod fab_error;
pub mod index;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::cast::{cast, cast_with, validate_cast};
    #[cfg(feature = "rayon")]
    pub use crate::algs::executor::RayonExecutor;
    pub use crate::algs::executor::{DefaultExecutor, Executor, Serial};
    pub use crate::data::{CpuArray, Storage, TypedArray, VecStorage};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::fab_error::{FabError, Side};
    pub use crate::index::{
        Box1, Box2, Box3, ComponentSelector, DestComp, IndexBox, NumComps, SrcComp,
    };
}
