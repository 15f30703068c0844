//! Index module: boxes and component selectors
#![warn(missing_docs)]

pub mod components;
pub mod index_box;

pub use components::{ComponentSelector, DestComp, NumComps, SrcComp};
pub use index_box::{Box1, Box2, Box3, BoxIter, IndexBox};
