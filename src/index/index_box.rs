//! `IndexBox`: an axis-aligned, inclusive range of integer grid indices.
//!
//! A box is the iteration domain of every sweep in this crate and the spatial
//! extent of every [`TypedArray`](crate::data::typed_array::TypedArray).
//! Boxes are plain `Copy` values; none of the operations here allocate.
//!
//! # Traversal order
//! [`IndexBox::iter`] visits indices lexicographically with axis 0 varying
//! fastest, then axis 1, then axis 2. The same ordering defines the linear
//! layout returned by [`IndexBox::offset_of`], so iteration order and memory
//! order coincide.
//!
//! # Empty boxes
//! A box with `hi[d] < lo[d]` on any axis is empty. Empty boxes are legal
//! everywhere: they contain no index, iterate zero times and are contained in
//! every other box.

use std::fmt;

/// Inclusive box `[lo, hi]` in `D` dimensions (`D` in `1..=3`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct IndexBox<const D: usize> {
    lo: [i64; D],
    hi: [i64; D],
}

/// One-dimensional box.
pub type Box1 = IndexBox<1>;
/// Two-dimensional box.
pub type Box2 = IndexBox<2>;
/// Three-dimensional box.
pub type Box3 = IndexBox<3>;

impl<const D: usize> IndexBox<D> {
    const DIM_OK: () = assert!(D >= 1 && D <= 3, "IndexBox supports 1 to 3 dimensions");

    /// Build the box `[lo, hi]`. Never fails; `hi < lo` on any axis gives an
    /// empty box.
    #[inline]
    pub const fn new(lo: [i64; D], hi: [i64; D]) -> Self {
        let () = Self::DIM_OK;
        IndexBox { lo, hi }
    }

    /// Canonical empty box `[0, -1]` on every axis.
    #[inline]
    pub const fn empty() -> Self {
        Self::new([0; D], [-1; D])
    }

    /// Lower corner.
    #[inline]
    pub const fn lo(&self) -> [i64; D] {
        self.lo
    }

    /// Upper corner (inclusive).
    #[inline]
    pub const fn hi(&self) -> [i64; D] {
        self.hi
    }

    /// Number of indices along `dim`, zero if the axis is inverted,
    /// saturating at `usize::MAX`.
    ///
    /// # Panics
    /// Panics if `dim >= D`.
    #[inline]
    pub fn length(&self, dim: usize) -> usize {
        self.checked_length(dim).unwrap_or(usize::MAX)
    }

    /// Number of indices along `dim`, or `None` if it does not fit in `usize`.
    ///
    /// # Panics
    /// Panics if `dim >= D`.
    #[inline]
    pub fn checked_length(&self, dim: usize) -> Option<usize> {
        let len = i128::from(self.hi[dim]) - i128::from(self.lo[dim]) + 1;
        usize::try_from(len.max(0)).ok()
    }

    /// Number of indices along every axis.
    #[inline]
    pub fn lengths(&self) -> [usize; D] {
        std::array::from_fn(|d| self.length(d))
    }

    /// True if some axis is inverted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo.iter().zip(&self.hi).any(|(l, h)| h < l)
    }

    /// Total number of indices in the box, saturating at `usize::MAX`.
    #[inline]
    pub fn num_pts(&self) -> usize {
        self.checked_num_pts().unwrap_or(usize::MAX)
    }

    /// Total number of indices in the box, or `None` if it does not fit in `usize`.
    pub fn checked_num_pts(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        (0..D).try_fold(1usize, |acc, d| acc.checked_mul(self.checked_length(d)?))
    }

    /// True iff `idx` lies inside the box.
    #[inline]
    pub fn contains(&self, idx: [i64; D]) -> bool {
        (0..D).all(|d| self.lo[d] <= idx[d] && idx[d] <= self.hi[d])
    }

    /// True iff every index of `other` lies inside `self`.
    ///
    /// An empty `other` is contained in any box, including an empty one.
    pub fn contains_box(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        (0..D).all(|d| self.lo[d] <= other.lo[d] && other.hi[d] <= self.hi[d])
    }

    /// Largest box contained in both `self` and `other` (possibly empty).
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(
            std::array::from_fn(|d| self.lo[d].max(other.lo[d])),
            std::array::from_fn(|d| self.hi[d].min(other.hi[d])),
        )
    }

    /// Grow by `n` cells on every side. Negative `n` shrinks and may empty the box.
    pub fn grow(&self, n: i64) -> Self {
        Self::new(self.lo.map(|l| l - n), self.hi.map(|h| h + n))
    }

    /// Translate along `dim` by `n`.
    ///
    /// # Panics
    /// Panics if `dim >= D`.
    pub fn shift(&self, dim: usize, n: i64) -> Self {
        let mut shifted = *self;
        shifted.lo[dim] += n;
        shifted.hi[dim] += n;
        shifted
    }

    /// Linear position of `idx` in the box, axis 0 fastest.
    ///
    /// The caller must ensure `self.contains(idx)`; otherwise the result is
    /// meaningless (checked with `debug_assert!`).
    #[inline]
    pub fn offset_of(&self, idx: [i64; D]) -> usize {
        debug_assert!(self.contains(idx), "index {idx:?} outside {self}");
        let mut offset = 0usize;
        let mut stride = 1usize;
        for d in 0..D {
            offset += (idx[d] - self.lo[d]) as usize * stride;
            stride *= self.length(d);
        }
        offset
    }

    /// Iterate over every index, axis 0 fastest.
    #[inline]
    pub fn iter(&self) -> BoxIter<D> {
        BoxIter::new(*self)
    }

    /// First index of every axis-0 row, in traversal order.
    pub(crate) fn row_starts(&self) -> BoxIter<D> {
        let mut face = *self;
        if !face.is_empty() {
            face.hi[0] = face.lo[0];
        }
        face.iter()
    }
}

fn fmt_corner(f: &mut fmt::Formatter<'_>, corner: &[i64]) -> fmt::Result {
    f.write_str("(")?;
    for (d, c) in corner.iter().enumerate() {
        if d > 0 {
            f.write_str(",")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str(")")
}

/// Prints `((lo...) (hi...))`, e.g. `((0,0) (3,7))`.
impl<const D: usize> fmt::Display for IndexBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt_corner(f, &self.lo)?;
        f.write_str(" ")?;
        fmt_corner(f, &self.hi)?;
        f.write_str(")")
    }
}

impl<const D: usize> IntoIterator for &IndexBox<D> {
    type Item = [i64; D];
    type IntoIter = BoxIter<D>;

    fn into_iter(self) -> BoxIter<D> {
        self.iter()
    }
}

/// Iterator over the indices of an [`IndexBox`], axis 0 fastest.
#[derive(Clone, Debug)]
pub struct BoxIter<const D: usize> {
    bx: IndexBox<D>,
    next: Option<[i64; D]>,
    remaining: usize,
}

impl<const D: usize> BoxIter<D> {
    fn new(bx: IndexBox<D>) -> Self {
        let remaining = bx.num_pts();
        let next = (remaining > 0).then_some(bx.lo);
        BoxIter {
            bx,
            next,
            remaining,
        }
    }
}

impl<const D: usize> Iterator for BoxIter<D> {
    type Item = [i64; D];

    fn next(&mut self) -> Option<[i64; D]> {
        let current = self.next?;
        self.remaining = self.remaining.saturating_sub(1);

        // odometer step: bump axis 0, carry into higher axes
        let mut succ = current;
        self.next = None;
        for d in 0..D {
            if succ[d] < self.bx.hi[d] {
                succ[d] += 1;
                self.next = Some(succ);
                break;
            }
            succ[d] = self.bx.lo[d];
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const D: usize> ExactSizeIterator for BoxIter<D> {}

impl<const D: usize> std::iter::FusedIterator for BoxIter<D> {}
