#![allow(dead_code)]
use fab_cast::prelude::*;
use num_traits::AsPrimitive;

pub fn sel(src: usize, dest: usize, count: usize) -> ComponentSelector {
    ComponentSelector::new(SrcComp(src), DestComp(dest), NumComps(count))
}

/// 3-D ramp whose value encodes the cell: `n*1000 + k*100 + j*10 + i + 0.75`.
pub fn ramp3(domain: Box3, ncomp: usize) -> CpuArray<f64, 3> {
    CpuArray::from_fn(domain, ncomp, |[i, j, k], n| {
        (n as i64 * 1000 + k * 100 + j * 10 + i) as f64 + 0.75
    })
}

/// Executor that runs tasks last-to-first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed;

impl Executor for Reversed {
    fn for_each<It, F>(&self, tasks: It, body: F)
    where
        It: Iterator + Send,
        It::Item: Send,
        F: Fn(It::Item) + Send + Sync,
    {
        let tasks: Vec<_> = tasks.collect();
        tasks.into_iter().rev().for_each(body);
    }

    fn name(&self) -> &'static str {
        "reversed"
    }
}

/// Cell-by-cell model of a cast through the unchecked accessors.
pub fn reference_cast<Tto, Tfrom, const D: usize>(
    dest: &mut CpuArray<Tto, D>,
    src: &CpuArray<Tfrom, D>,
    region: &IndexBox<D>,
    sel: ComponentSelector,
) where
    Tto: Copy + 'static,
    Tfrom: AsPrimitive<Tto>,
{
    for idx in region {
        for n in 0..sel.count().0 {
            *dest.get_mut(idx, n + sel.dest().0) = src.get(idx, n + sel.src().0).as_();
        }
    }
}
