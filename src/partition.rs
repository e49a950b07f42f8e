use core::convert::Infallible;

use tracing::trace;

use crate::{ArrayLike, Partitioned, Truthy};

/// Splits `source` into the elements `predicate` selects and the ones it
/// rejects, each in source order.
///
/// The length of `source` is read once, before the first call. Indices
/// `0..len` are then visited in ascending order; absent indices are skipped
/// and every present one is passed to `predicate` as `(value, index, source)`
/// exactly once.
///
/// # Examples
///
/// ```
/// use stable_partition::partition;
///
/// let p = partition(&[1, 2, 3, 4, 5][..], |v, _, _| v % 2 == 0);
/// assert_eq!(p.selected(), &[2, 4]);
/// assert_eq!(p.rejected(), &[1, 3, 5]);
/// ```
pub fn partition<S, P, R>(source: &S, mut predicate: P) -> Partitioned<S::Item>
where
    S: ArrayLike + ?Sized,
    P: FnMut(&S::Item, usize, &S) -> R,
    R: Truthy,
{
    into_ok(try_partition_with(source, &mut (), |_, value, index, source| {
        Ok(predicate(value, index, source))
    }))
}

/// Like [`partition`], with `this` passed to every call of `predicate` as its
/// receiver.
///
/// ```
/// use stable_partition::partition_with;
///
/// struct Threshold(i32);
///
/// let mut t = Threshold(15);
/// let p = partition_with(&[10, 20, 30][..], &mut t, |t, v, _, _| *v > t.0);
/// assert_eq!(p.selected(), &[20, 30]);
/// ```
pub fn partition_with<S, C, P, R>(
    source: &S,
    this: &mut C,
    mut predicate: P,
) -> Partitioned<S::Item>
where
    S: ArrayLike + ?Sized,
    C: ?Sized,
    P: FnMut(&mut C, &S::Item, usize, &S) -> R,
    R: Truthy,
{
    into_ok(try_partition_with(source, this, |this, value, index, source| {
        Ok(predicate(this, value, index, source))
    }))
}

/// Like [`partition`], for a predicate that can fail.
///
/// The first error stops the run and is returned as is; no further indices
/// are visited and the elements split so far are dropped.
///
/// ```
/// use stable_partition::try_partition;
///
/// let r = try_partition(&[1, 2, 3][..], |v, _, _| match *v {
///     3 => Err("three"),
///     v => Ok(v == 1),
/// });
/// assert_eq!(r, Err("three"));
/// ```
pub fn try_partition<S, P, R, E>(
    source: &S,
    mut predicate: P,
) -> Result<Partitioned<S::Item>, E>
where
    S: ArrayLike + ?Sized,
    P: FnMut(&S::Item, usize, &S) -> Result<R, E>,
    R: Truthy,
{
    try_partition_with(source, &mut (), |_, value, index, source| {
        predicate(value, index, source)
    })
}

/// Like [`try_partition`], with `this` passed to every call of `predicate` as
/// its receiver.
pub fn try_partition_with<S, C, P, R, E>(
    source: &S,
    this: &mut C,
    mut predicate: P,
) -> Result<Partitioned<S::Item>, E>
where
    S: ArrayLike + ?Sized,
    C: ?Sized,
    P: FnMut(&mut C, &S::Item, usize, &S) -> Result<R, E>,
    R: Truthy,
{
    // the bound is fixed here; growth or shrinkage during the run is not seen
    let len = source.length();
    trace!(len, "partitioning");

    let mut out = Partitioned::new();
    for index in 0..len {
        let Some(value) = source.get(index) else {
            continue;
        };

        if predicate(&mut *this, &value, index, source)?.is_truthy() {
            out.push_selected(value);
        } else {
            out.push_rejected(value);
        }
    }

    trace!(
        selected = out.selected().len(),
        rejected = out.rejected().len(),
        "partitioned"
    );
    Ok(out)
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Partitioning as a method on every [`ArrayLike`].
///
/// The blanket implementation makes these methods available on slices,
/// vectors, [`SparseVec`](crate::SparseVec)s and the rest. A type that
/// already has an inherent method of the same name keeps its own: inherent
/// methods win method resolution.
///
/// ```
/// use stable_partition::{PartitionExt, SparseVec};
///
/// let v: SparseVec<i32> = [Some(10), None, Some(20), None, Some(30)].into_iter().collect();
/// let (selected, rejected) = v.partition(|v, _, _| *v > 15).into_parts();
/// assert_eq!(selected, [20, 30]);
/// assert_eq!(rejected, [10]);
/// ```
pub trait PartitionExt: ArrayLike {
    /// See [`partition`](crate::partition()).
    fn partition<P, R>(&self, predicate: P) -> Partitioned<Self::Item>
    where
        P: FnMut(&Self::Item, usize, &Self) -> R,
        R: Truthy,
    {
        partition(self, predicate)
    }

    /// See [`partition_with`].
    fn partition_with<C, P, R>(&self, this: &mut C, predicate: P) -> Partitioned<Self::Item>
    where
        C: ?Sized,
        P: FnMut(&mut C, &Self::Item, usize, &Self) -> R,
        R: Truthy,
    {
        partition_with(self, this, predicate)
    }

    /// See [`try_partition`].
    fn try_partition<P, R, E>(&self, predicate: P) -> Result<Partitioned<Self::Item>, E>
    where
        P: FnMut(&Self::Item, usize, &Self) -> Result<R, E>,
        R: Truthy,
    {
        try_partition(self, predicate)
    }

    /// See [`try_partition_with`].
    fn try_partition_with<C, P, R, E>(
        &self,
        this: &mut C,
        predicate: P,
    ) -> Result<Partitioned<Self::Item>, E>
    where
        C: ?Sized,
        P: FnMut(&mut C, &Self::Item, usize, &Self) -> Result<R, E>,
        R: Truthy,
    {
        try_partition_with(self, this, predicate)
    }
}

impl<S: ArrayLike + ?Sized> PartitionExt for S {}
