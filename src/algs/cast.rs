//! Elementwise, type-converting copy between two typed arrays.
//!
//! [`cast_with`] reads `src(idx, n + scomp)` for every `idx` in a region and
//! every `n < ncomp`, converts it with Rust `as` semantics (via
//! [`num_traits::AsPrimitive`]) and writes `dest(idx, n + dcomp)`.
//!
//! # Conversion rules
//! - float to integer: truncate toward zero, saturate at the target bounds, NaN becomes 0
//!   (`3.7f64 -> 3i32`, `-3.7f64 -> -3i32`, `1e10f64 -> i32::MAX`).
//! - integer to integer: keep the low bits (`200i32 -> 200u8`, `300i32 -> 44u8`, `-1i32 -> 255u8`).
//! - integer to float and `f64 -> f32`: round to nearest.
//!
//! # Atomicity
//! Every precondition is checked by [`validate_cast`] before the first write;
//! an `Err` leaves the destination untouched.
//!
//! # Aliasing
//! `dest` is taken by `&mut` and `src` by `&`, so a cast from an array into
//! itself does not compile.

use std::ops::Range;

use num_traits::AsPrimitive;

use crate::algs::executor::{DefaultExecutor, Executor};
use crate::data::storage::Storage;
use crate::data::typed_array::TypedArray;
use crate::fab_error::{FabError, Side};
use crate::index::components::ComponentSelector;
use crate::index::index_box::IndexBox;

fn checked_ranges<Tto, Tfrom, const D: usize, SD, SS>(
    dest: &TypedArray<Tto, D, SD>,
    src: &TypedArray<Tfrom, D, SS>,
    region: &IndexBox<D>,
    sel: &ComponentSelector,
) -> Result<(Range<usize>, Range<usize>), FabError>
where
    SD: Storage<Tto>,
    SS: Storage<Tfrom>,
{
    let src_comps = src.check_components(Side::Source, sel.src().0, sel.count().0)?;
    let dest_comps = dest.check_components(Side::Destination, sel.dest().0, sel.count().0)?;
    if sel.count().0 > 0 && !region.is_empty() {
        src.check_region(Side::Source, region)?;
        dest.check_region(Side::Destination, region)?;
    }
    Ok((src_comps, dest_comps))
}

/// Check every precondition of a cast without writing anything.
///
/// Component ranges are always checked. The region is checked only when the
/// selector's count is non-zero and the region is non-empty, since otherwise
/// the sweep visits nothing.
///
/// # Errors
/// - `ComponentOverflow` if `scomp + ncomp` exceeds the source component
///   extent or `dcomp + ncomp` exceeds the destination's.
/// - `OutOfRange` if `region` is not inside both domains.
pub fn validate_cast<Tto, Tfrom, const D: usize, SD, SS>(
    dest: &TypedArray<Tto, D, SD>,
    src: &TypedArray<Tfrom, D, SS>,
    region: &IndexBox<D>,
    sel: ComponentSelector,
) -> Result<(), FabError>
where
    SD: Storage<Tto>,
    SS: Storage<Tfrom>,
{
    checked_ranges(dest, src, region, &sel).map(|_| ())
}

/// Converting copy of `region` x `sel` from `src` into `dest`, scheduled on `exec`.
///
/// The sweep is split into one task per axis-0 row and component. Rows of the
/// destination are disjoint, so every destination cell in the swept set is
/// written exactly once and the result is the same for every executor.
/// Cells outside the swept set are not modified; `src` is never mutated.
///
/// # Errors
/// See [`validate_cast`]. On error nothing is written.
pub fn cast_with<E, Tto, Tfrom, const D: usize, SD, SS>(
    exec: &E,
    dest: &mut TypedArray<Tto, D, SD>,
    src: &TypedArray<Tfrom, D, SS>,
    region: &IndexBox<D>,
    sel: ComponentSelector,
) -> Result<(), FabError>
where
    E: Executor,
    Tto: Copy + Send + 'static,
    Tfrom: AsPrimitive<Tto> + Sync,
    SD: Storage<Tto>,
    SS: Storage<Tfrom>,
{
    let (src_comps, dest_comps) = checked_ranges(dest, src, region, &sel)?;
    if dest_comps.is_empty() || region.is_empty() {
        return Ok(());
    }

    let tasks = dest
        .rows_mut(region, dest_comps)
        .zip(src.rows(region, src_comps));

    exec.for_each(tasks, |(to, from)| {
        for (t, &f) in to.iter_mut().zip(from) {
            *t = f.as_();
        }
    });
    Ok(())
}

/// [`cast_with`] on the [`DefaultExecutor`].
///
/// # Example
/// ```rust
/// use fab_cast::prelude::*;
///
/// let bx = Box2::new([0, 0], [1, 1]);
/// let src = CpuArray::<f64, 2>::filled(bx, 2, 3.7);
/// let mut dest = CpuArray::<i32, 2>::new(bx, 3);
/// let sel = ComponentSelector::new(SrcComp(1), DestComp(2), NumComps(1));
/// cast(&mut dest, &src, &bx, sel).unwrap();
/// assert_eq!(dest[([1, 0], 2)], 3);
/// assert_eq!(dest[([1, 0], 0)], 0);
/// ```
pub fn cast<Tto, Tfrom, const D: usize, SD, SS>(
    dest: &mut TypedArray<Tto, D, SD>,
    src: &TypedArray<Tfrom, D, SS>,
    region: &IndexBox<D>,
    sel: ComponentSelector,
) -> Result<(), FabError>
where
    Tto: Copy + Send + 'static,
    Tfrom: AsPrimitive<Tto> + Sync,
    SD: Storage<Tto>,
    SS: Storage<Tfrom>,
{
    cast_with(&DefaultExecutor::default(), dest, src, region, sel)
}

impl<T, const D: usize, S: Storage<T>> TypedArray<T, D, S> {
    /// New Vec-backed array over the same domain and components holding every
    /// value converted to `U`.
    pub fn converted<U>(&self) -> Result<TypedArray<U, D>, FabError>
    where
        T: AsPrimitive<U> + Sync,
        U: Copy + Default + Send + 'static,
    {
        let domain = *self.domain();
        let mut out = TypedArray::<U, D>::new(domain, self.ncomp());
        cast(&mut out, self, &domain, ComponentSelector::all(self.ncomp()))?;
        Ok(out)
    }
}
