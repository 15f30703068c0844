//! Thin façade over serial or Rayon-parallel execution of independent tasks.
//!
//! A kernel such as [`cast_with`](crate::algs::cast::cast_with) splits its
//! sweep into tasks that touch disjoint memory and writes its body once as a
//! closure. The executor only decides *where* and *in what order* the tasks
//! run; results must not depend on that choice.

/// Pluggable execution strategy for a batch of independent tasks.
pub trait Executor: std::fmt::Debug + Send + Sync {
    /// Run `body` once per task. Returns after every task has finished.
    fn for_each<It, F>(&self, tasks: It, body: F)
    where
        It: Iterator + Send,
        It::Item: Send,
        F: Fn(It::Item) + Send + Sync;

    /// Short name for diagnostics.
    fn name(&self) -> &'static str;
}

/// In-order execution on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serial;

impl Executor for Serial {
    fn for_each<It, F>(&self, tasks: It, body: F)
    where
        It: Iterator + Send,
        It::Item: Send,
        F: Fn(It::Item) + Send + Sync,
    {
        tasks.for_each(body);
    }

    fn name(&self) -> &'static str {
        "serial"
    }
}

/// Execution on the Rayon global thread pool.
#[cfg(feature = "rayon")]
#[derive(Clone, Copy, Debug)]
pub struct RayonExecutor {
    /// Minimum number of tasks a Rayon job is split down to.
    pub min_len: usize,
}

#[cfg(feature = "rayon")]
impl Default for RayonExecutor {
    fn default() -> Self {
        RayonExecutor { min_len: 1 }
    }
}

#[cfg(feature = "rayon")]
impl Executor for RayonExecutor {
    fn for_each<It, F>(&self, tasks: It, body: F)
    where
        It: Iterator + Send,
        It::Item: Send,
        F: Fn(It::Item) + Send + Sync,
    {
        use rayon::prelude::*;
        // Indexed splitting needs the task count up front.
        tasks
            .collect::<Vec<_>>()
            .into_par_iter()
            .with_min_len(self.min_len.max(1))
            .for_each(body);
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}

/// Executor used by [`cast`](crate::algs::cast::cast): Rayon when the
/// `rayon` feature is enabled, serial otherwise.
#[cfg(feature = "rayon")]
pub type DefaultExecutor = RayonExecutor;
/// Executor used by [`cast`](crate::algs::cast::cast): Rayon when the
/// `rayon` feature is enabled, serial otherwise.
#[cfg(not(feature = "rayon"))]
pub type DefaultExecutor = Serial;
