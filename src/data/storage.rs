//! Pluggable storage for `TypedArray` buffers.
//!
//! This trait abstracts how an array's flat buffer is held. Arrays only need
//! contiguous slice access; sizing is fixed at construction since an array's
//! domain and component count never change.

use core::fmt::{self, Debug};

/// Contiguous, indexable storage for `V` with slice access.
pub trait Storage<V>: Debug {
    /// Construct a buffer of `len`, filled with `fill`.
    fn with_len(len: usize, fill: V) -> Self
    where
        V: Clone;

    /// Current length in elements.
    fn len(&self) -> usize;

    /// True if the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entire read-only buffer.
    fn as_slice(&self) -> &[V];

    /// Entire mutable buffer.
    fn as_mut_slice(&mut self) -> &mut [V];
}

/// `Vec`-backed storage (default).
#[derive(Clone, PartialEq)]
pub struct VecStorage<V>(pub(crate) Vec<V>);

impl<V> Debug for VecStorage<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecStorage")
            .field("len", &self.0.len())
            .finish()
    }
}

impl<V> Storage<V> for VecStorage<V> {
    fn with_len(len: usize, fill: V) -> Self
    where
        V: Clone,
    {
        Self(vec![fill; len])
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_slice(&self) -> &[V] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.0
    }
}

impl<V> From<Vec<V>> for VecStorage<V> {
    fn from(v: Vec<V>) -> Self {
        Self(v)
    }
}

impl<V> VecStorage<V> {
    /// Give back the underlying `Vec`.
    pub fn into_inner(self) -> Vec<V> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_len_fills() {
        let s = VecStorage::with_len(3, 7u8);
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_slice(), &[7, 7, 7]);
        assert!(!s.is_empty());
    }

    #[test]
    fn from_vec_round_trips() {
        let mut s = VecStorage::from(vec![1.0f32, 2.0]);
        s.as_mut_slice()[1] = 5.0;
        assert_eq!(s.into_inner(), vec![1.0, 5.0]);
    }

    #[test]
    fn debug_reports_len_only() {
        let s = VecStorage::from(vec![0i32; 4]);
        assert_eq!(format!("{s:?}"), "VecStorage { len: 4 }");
    }
}
