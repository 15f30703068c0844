//! Strongly typed component offsets and counts.
//!
//! A multi-component array stores several numeric channels per grid index.
//! Operations between two arrays name a source channel offset, a destination
//! channel offset and a channel count. Each is its own `#[repr(transparent)]`
//! newtype so the three cannot be swapped at a call site.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// First component read from the source array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SrcComp(pub usize);

/// First component written in the destination array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DestComp(pub usize);

/// Number of consecutive components processed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NumComps(pub usize);

impl fmt::Display for SrcComp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DestComp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for NumComps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which channels a two-array operation reads and writes.
///
/// Construction never fails. Bounds against concrete arrays are checked by
/// the consuming operation, see [`validate_cast`](crate::algs::cast::validate_cast).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentSelector {
    src: SrcComp,
    dest: DestComp,
    count: NumComps,
}

impl ComponentSelector {
    /// Read `count` channels from `src` on, write them from `dest` on.
    #[inline]
    pub const fn new(src: SrcComp, dest: DestComp, count: NumComps) -> Self {
        ComponentSelector { src, dest, count }
    }

    /// Select components `0..n` on both sides.
    #[inline]
    pub const fn all(n: usize) -> Self {
        Self::new(SrcComp(0), DestComp(0), NumComps(n))
    }

    /// First source component.
    #[inline]
    pub const fn src(&self) -> SrcComp {
        self.src
    }

    /// First destination component.
    #[inline]
    pub const fn dest(&self) -> DestComp {
        self.dest
    }

    /// Number of components on each side.
    #[inline]
    pub const fn count(&self) -> NumComps {
        self.count
    }

    /// Source channels `src..src+count`, or `None` on overflow.
    #[inline]
    pub fn src_range(&self) -> Option<Range<usize>> {
        comp_range(self.src.0, self.count.0)
    }

    /// Destination channels `dest..dest+count`, or `None` on overflow.
    #[inline]
    pub fn dest_range(&self) -> Option<Range<usize>> {
        comp_range(self.dest.0, self.count.0)
    }
}

pub(crate) fn comp_range(offset: usize, count: usize) -> Option<Range<usize>> {
    offset.checked_add(count).map(|end| offset..end)
}

impl From<(SrcComp, DestComp, NumComps)> for ComponentSelector {
    fn from((src, dest, count): (SrcComp, DestComp, NumComps)) -> Self {
        Self::new(src, dest, count)
    }
}

impl fmt::Display for ComponentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "src {} -> dest {} x {}", self.src, self.dest, self.count)
    }
}

#[cfg(test)]
mod layout_tests {
    //! The newtypes must stay zero-cost wrappers around `usize`.
    use super::*;
    use static_assertions::{assert_eq_size, assert_not_impl_any};

    assert_eq_size!(SrcComp, usize);
    assert_eq_size!(DestComp, usize);
    assert_eq_size!(NumComps, usize);
    assert_not_impl_any!(SrcComp: From<DestComp>, From<NumComps>);
    assert_not_impl_any!(DestComp: From<SrcComp>, From<NumComps>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_ranges() {
        let sel = ComponentSelector::new(SrcComp(2), DestComp(0), NumComps(3));
        assert_eq!(sel.src(), SrcComp(2));
        assert_eq!(sel.dest(), DestComp(0));
        assert_eq!(sel.count(), NumComps(3));
        assert_eq!(sel.src_range(), Some(2..5));
        assert_eq!(sel.dest_range(), Some(0..3));
    }

    #[test]
    fn overflowing_range_is_none() {
        let sel = ComponentSelector::new(SrcComp(usize::MAX), DestComp(0), NumComps(1));
        assert_eq!(sel.src_range(), None);
        assert_eq!(sel.dest_range(), Some(0..1));
    }

    #[test]
    fn all_and_tuple_conversion() {
        let from_tuple: ComponentSelector = (SrcComp(0), DestComp(0), NumComps(4)).into();
        assert_eq!(ComponentSelector::all(4), from_tuple);
    }

    #[test]
    fn display() {
        let sel = ComponentSelector::new(SrcComp(1), DestComp(3), NumComps(2));
        assert_eq!(sel.to_string(), "src 1 -> dest 3 x 2");
    }
}
