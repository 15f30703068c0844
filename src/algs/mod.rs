//! Re-export public algorithms.

pub mod cast;
pub mod executor;

pub use cast::{cast, cast_with, validate_cast};
#[cfg(feature = "rayon")]
pub use executor::RayonExecutor;
pub use executor::{DefaultExecutor, Executor, Serial};
