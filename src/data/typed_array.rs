//! TypedArray: dense multi-component data over an index box.
//!
//! A `TypedArray<T, D>` couples an [`IndexBox`] domain with a component count
//! and a flat buffer of `num_pts * ncomp` values. Component `n` occupies the
//! contiguous slab `[n * num_pts, (n + 1) * num_pts)`; inside a slab the
//! layout follows [`IndexBox::offset_of`] (axis 0 fastest).
//!
//! Unchecked accessors ([`get`](TypedArray::get), indexing) panic on an
//! out-of-range index. The `try_*` variants return a [`FabError`] instead.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};

use crate::data::storage::{Storage, VecStorage};
use crate::debug_invariants::DebugInvariants;
use crate::fab_error::{FabError, Side};
use crate::index::components::{DestComp, NumComps, comp_range};
use crate::index::index_box::IndexBox;

/// Number of values an array over `domain` with `ncomp` components holds.
fn storage_len<const D: usize>(domain: &IndexBox<D>, ncomp: usize) -> Result<usize, FabError> {
    domain
        .checked_num_pts()
        .and_then(|npts| npts.checked_mul(ncomp))
        .ok_or_else(|| FabError::SizeOverflow {
            domain: domain.to_string(),
            ncomp,
        })
}

/// Dense `D`-dimensional array with `ncomp` values of type `T` per index.
#[derive(Clone)]
pub struct TypedArray<T, const D: usize, S = VecStorage<T>> {
    domain: IndexBox<D>,
    ncomp: usize,
    /// Cached `domain.num_pts()`; the stride between component slabs.
    npts: usize,
    data: S,
    _pd: PhantomData<T>,
}

impl<T, const D: usize, S: Storage<T>> std::fmt::Debug for TypedArray<T, D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedArray")
            .field("domain", &self.domain)
            .field("ncomp", &self.ncomp)
            .field("data", &self.data)
            .finish()
    }
}

impl<T, const D: usize, S: Storage<T>> TypedArray<T, D, S> {
    /// Allocate an array over `domain` with `ncomp` components, every value
    /// set to `T::default()`.
    pub fn new(domain: IndexBox<D>, ncomp: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::filled(domain, ncomp, T::default())
    }

    /// Allocate an array over `domain` with every value set to `value`.
    ///
    /// # Panics
    /// Panics if `domain.num_pts() * ncomp` overflows `usize`.
    pub fn filled(domain: IndexBox<D>, ncomp: usize, value: T) -> Self
    where
        T: Clone,
    {
        let len = match storage_len(&domain, ncomp) {
            Ok(len) => len,
            Err(e) => panic!("{e}"),
        };
        log::trace!("allocating TypedArray over {domain} with {ncomp} components");
        let arr = TypedArray {
            domain,
            ncomp,
            npts: domain.num_pts(),
            data: S::with_len(len, value),
            _pd: PhantomData,
        };
        arr.debug_assert_invariants();
        arr
    }

    /// Allocate an array whose value at `(idx, n)` is `f(idx, n)`.
    ///
    /// `f` is called in memory order: component-major, axis 0 fastest.
    ///
    /// # Panics
    /// Panics if `domain.num_pts() * ncomp` overflows `usize`.
    pub fn from_fn<F>(domain: IndexBox<D>, ncomp: usize, mut f: F) -> Self
    where
        S: From<Vec<T>>,
        F: FnMut([i64; D], usize) -> T,
    {
        let len = match storage_len(&domain, ncomp) {
            Ok(len) => len,
            Err(e) => panic!("{e}"),
        };
        log::trace!("allocating TypedArray over {domain} with {ncomp} components");
        let mut values = Vec::with_capacity(len);
        for n in 0..ncomp {
            values.extend(domain.iter().map(|idx| f(idx, n)));
        }
        let arr = TypedArray {
            domain,
            ncomp,
            npts: domain.num_pts(),
            data: S::from(values),
            _pd: PhantomData,
        };
        arr.debug_assert_invariants();
        arr
    }

    /// Wrap an existing buffer laid out as described in the module docs.
    ///
    /// # Errors
    /// `SizeOverflow` if `domain.num_pts() * ncomp` overflows `usize`,
    /// `StorageLengthMismatch` if `data.len()` differs from that product.
    pub fn from_storage(domain: IndexBox<D>, ncomp: usize, data: S) -> Result<Self, FabError> {
        let expected = storage_len(&domain, ncomp)?;
        if data.len() != expected {
            return Err(FabError::StorageLengthMismatch {
                expected,
                found: data.len(),
            });
        }
        let arr = TypedArray {
            domain,
            ncomp,
            npts: domain.num_pts(),
            data,
            _pd: PhantomData,
        };
        arr.debug_assert_invariants();
        Ok(arr)
    }

    /// Spatial extent.
    #[inline]
    pub fn domain(&self) -> &IndexBox<D> {
        &self.domain
    }

    /// Number of components per index.
    #[inline]
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Number of spatial indices.
    #[inline]
    pub fn num_pts(&self) -> usize {
        self.npts
    }

    #[inline]
    fn linear(&self, idx: [i64; D], n: usize) -> usize {
        n * self.npts + self.domain.offset_of(idx)
    }

    #[inline]
    fn assert_in_range(&self, idx: [i64; D], n: usize) {
        assert!(
            self.domain.contains(idx) && n < self.ncomp,
            "({idx:?}, {n}) out of range for domain {} with {} components",
            self.domain,
            self.ncomp
        );
    }

    fn check_index(&self, idx: [i64; D], n: usize) -> Result<usize, FabError> {
        if !self.domain.contains(idx) {
            return Err(FabError::IndexOutOfRange {
                index: format!("{idx:?}"),
                domain: self.domain.to_string(),
            });
        }
        if n >= self.ncomp {
            return Err(FabError::ComponentOutOfRange {
                comp: n,
                ncomp: self.ncomp,
            });
        }
        Ok(self.linear(idx, n))
    }

    /// Read-only access to the value at `(idx, n)`.
    ///
    /// # Panics
    /// Panics if `idx` is outside the domain or `n >= ncomp`.
    #[inline]
    pub fn get(&self, idx: [i64; D], n: usize) -> &T {
        self.assert_in_range(idx, n);
        &self.data.as_slice()[self.linear(idx, n)]
    }

    /// Mutable access to the value at `(idx, n)`.
    ///
    /// # Panics
    /// Panics if `idx` is outside the domain or `n >= ncomp`.
    #[inline]
    pub fn get_mut(&mut self, idx: [i64; D], n: usize) -> &mut T {
        self.assert_in_range(idx, n);
        let at = self.linear(idx, n);
        &mut self.data.as_mut_slice()[at]
    }

    /// Checked read-only access.
    ///
    /// # Errors
    /// `IndexOutOfRange` or `ComponentOutOfRange`.
    pub fn try_get(&self, idx: [i64; D], n: usize) -> Result<&T, FabError> {
        let at = self.check_index(idx, n)?;
        Ok(&self.data.as_slice()[at])
    }

    /// Checked mutable access.
    ///
    /// # Errors
    /// `IndexOutOfRange` or `ComponentOutOfRange`.
    pub fn try_get_mut(&mut self, idx: [i64; D], n: usize) -> Result<&mut T, FabError> {
        let at = self.check_index(idx, n)?;
        Ok(&mut self.data.as_mut_slice()[at])
    }

    /// The contiguous slab of component `n`.
    ///
    /// # Panics
    /// Panics if `n >= ncomp`.
    pub fn component(&self, n: usize) -> &[T] {
        assert!(n < self.ncomp, "component {n} out of range for {} components", self.ncomp);
        &self.data.as_slice()[n * self.npts..(n + 1) * self.npts]
    }

    /// Entire buffer in layout order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Entire mutable buffer in layout order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Backing storage.
    #[inline]
    pub fn storage(&self) -> &S {
        &self.data
    }

    /// Give back the backing storage.
    pub fn into_storage(self) -> S {
        self.data
    }

    /// Set every value of components `[dcomp, dcomp + ncomp)` inside `region`
    /// to `value`. Nothing else is touched.
    ///
    /// # Errors
    /// `ComponentOverflow` if the component range does not fit, `OutOfRange`
    /// if a non-empty `region` leaves the domain (only checked when
    /// `ncomp > 0`). On error nothing is written.
    pub fn set_val(
        &mut self,
        value: T,
        region: &IndexBox<D>,
        dcomp: DestComp,
        ncomp: NumComps,
    ) -> Result<(), FabError>
    where
        T: Clone,
    {
        let comps = self.check_components(Side::Destination, dcomp.0, ncomp.0)?;
        if comps.is_empty() || region.is_empty() {
            return Ok(());
        }
        self.check_region(Side::Destination, region)?;
        for row in self.rows_mut(region, comps) {
            row.fill(value.clone());
        }
        Ok(())
    }

    /// Component range `[offset, offset + count)` if it fits this array.
    pub(crate) fn check_components(
        &self,
        side: Side,
        offset: usize,
        count: usize,
    ) -> Result<Range<usize>, FabError> {
        match comp_range(offset, count) {
            Some(comps) if comps.end <= self.ncomp => Ok(comps),
            _ => {
                log::debug!(
                    "rejecting {side} components {offset}+{count} on array with {} components",
                    self.ncomp
                );
                Err(FabError::ComponentOverflow {
                    side,
                    offset,
                    count,
                    ncomp: self.ncomp,
                })
            }
        }
    }

    pub(crate) fn check_region(&self, side: Side, region: &IndexBox<D>) -> Result<(), FabError> {
        if self.domain.contains_box(region) {
            return Ok(());
        }
        log::debug!("rejecting region {region} outside {side} domain {}", self.domain);
        Err(FabError::OutOfRange {
            side,
            region: region.to_string(),
            domain: self.domain.to_string(),
        })
    }

    /// `(offset, len)` of every axis-0 row of `region` in `comps`, in
    /// increasing offset order. `region` must lie inside the domain.
    fn row_spans(
        &self,
        region: &IndexBox<D>,
        comps: Range<usize>,
    ) -> impl Iterator<Item = (usize, usize)> + use<T, D, S> {
        let (domain, npts, region) = (self.domain, self.npts, *region);
        let len = region.length(0);
        comps.flat_map(move |n| {
            region
                .row_starts()
                .map(move |start| (n * npts + domain.offset_of(start), len))
        })
    }

    /// Read-only axis-0 rows of `region` in `comps`, in layout order.
    pub(crate) fn rows<'a>(
        &'a self,
        region: &IndexBox<D>,
        comps: Range<usize>,
    ) -> impl Iterator<Item = &'a [T]> + use<'a, T, D, S> {
        let data = self.data.as_slice();
        self.row_spans(region, comps)
            .map(move |(offset, len)| &data[offset..offset + len])
    }

    /// Disjoint mutable axis-0 rows of `region` in `comps`, in layout order.
    pub(crate) fn rows_mut<'a>(
        &'a mut self,
        region: &IndexBox<D>,
        comps: Range<usize>,
    ) -> RowsMut<'a, T, impl Iterator<Item = (usize, usize)> + use<T, D, S>> {
        let spans = self.row_spans(region, comps);
        RowsMut {
            rest: self.data.as_mut_slice(),
            consumed: 0,
            spans,
        }
    }
}

/// Lazily carves disjoint mutable rows off a buffer from increasing spans.
pub(crate) struct RowsMut<'a, T, I> {
    rest: &'a mut [T],
    /// Buffer offset at which `rest` starts.
    consumed: usize,
    spans: I,
}

impl<'a, T, I: Iterator<Item = (usize, usize)>> Iterator for RowsMut<'a, T, I> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<&'a mut [T]> {
        let (offset, len) = self.spans.next()?;
        let tail = std::mem::take(&mut self.rest);
        let (_, tail) = tail.split_at_mut(offset - self.consumed);
        let (row, tail) = tail.split_at_mut(len);
        self.rest = tail;
        self.consumed = offset + len;
        Some(row)
    }
}

impl<T, const D: usize, S: Storage<T>> Index<([i64; D], usize)> for TypedArray<T, D, S> {
    type Output = T;

    #[inline]
    fn index(&self, (idx, n): ([i64; D], usize)) -> &T {
        self.get(idx, n)
    }
}

impl<T, const D: usize, S: Storage<T>> IndexMut<([i64; D], usize)> for TypedArray<T, D, S> {
    #[inline]
    fn index_mut(&mut self, (idx, n): ([i64; D], usize)) -> &mut T {
        self.get_mut(idx, n)
    }
}

impl<T, const D: usize, S: Storage<T>> DebugInvariants for TypedArray<T, D, S> {
    fn debug_assert_invariants(&self) {
        crate::fab_debug_assert_ok!(self.validate_invariants(), "TypedArray invalid");
    }

    fn validate_invariants(&self) -> Result<(), FabError> {
        let expected = storage_len(&self.domain, self.ncomp)?;
        if self.npts != self.domain.num_pts() || self.data.len() != expected {
            return Err(FabError::StorageLengthMismatch {
                expected,
                found: self.data.len(),
            });
        }
        Ok(())
    }
}
