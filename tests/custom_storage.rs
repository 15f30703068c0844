use fab_cast::prelude::*;

/// Fixed-size boxed slice storage.
#[derive(Clone, Debug)]
struct Boxed<V>(Box<[V]>);

impl<V: std::fmt::Debug> Storage<V> for Boxed<V> {
    fn with_len(len: usize, fill: V) -> Self
    where
        V: Clone,
    {
        Boxed(vec![fill; len].into_boxed_slice())
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

#[test]
fn cast_between_storage_backends() {
    let bx = Box2::new([0, 0], [1, 2]);
    let raw: Box<[i8]> = (0..12).map(|v| v as i8 - 6).collect();
    let src = TypedArray::<i8, 2, Boxed<i8>>::from_storage(bx, 2, Boxed(raw)).unwrap();
    let mut dest = CpuArray::<f32, 2>::new(bx, 2);

    cast(&mut dest, &src, &bx, ComponentSelector::all(2)).unwrap();

    let want: Vec<f32> = (0..12).map(|v| (v - 6) as f32).collect();
    assert_eq!(dest.as_slice(), want.as_slice());
    assert!(src.validate_invariants().is_ok());
}

#[test]
fn custom_backend_as_destination() {
    let bx = Box1::new([-2], [2]);
    let src = CpuArray::<f64, 1>::from_fn(bx, 1, |[i], _| i as f64 * 1.5);
    let mut dest = TypedArray::<i16, 1, Boxed<i16>>::filled(bx, 1, 99);
    cast(&mut dest, &src, &Box1::new([-1], [1]), ComponentSelector::all(1)).unwrap();
    assert_eq!(dest.storage().as_slice(), &[99, -1, 0, 1, 99]);
    assert_eq!(dest.into_storage().0.len(), 5);
}
