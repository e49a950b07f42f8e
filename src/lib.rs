//! Split an array-like sequence into the elements a predicate selects and the
//! ones it rejects.
//!
//! [`partition()`] visits every present index of a source sequence once, in
//! ascending order, and returns a [`Partitioned<T>`]: the selected elements on
//! one side and the rejected ones on the other. **Both sides keep source
//! order.** Sources may have holes (see [`SparseVec<T>`]); an absent index
//! lands on neither side.
//!
//! ## Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use stable_partition::PartitionExt;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! // the predicate sees the value, its index and the whole source
//! let p = numbers.partition(|v, _index, _source| v % 2 == 0);
//!
//! assert_eq!(p.selected(), &[2, 4]);
//! assert_eq!(p.rejected(), &[1, 3, 5]);
//!
//! // the source is untouched
//! assert_eq!(numbers, [1, 2, 3, 4, 5]);
//! ```
//!
//! ### Sequences With Holes
//!
//! ```rust
//! use stable_partition::{PartitionExt, SparseVec};
//!
//! // length 5, only indices 0, 2 and 4 present
//! let mut readings = SparseVec::with_len(5);
//! readings.insert(0, 10);
//! readings.insert(2, 20);
//! readings.insert(4, 30);
//!
//! let mut visited = Vec::new();
//! let (high, low) = readings
//!     .partition(|v, index, _| {
//!         visited.push(index);
//!         *v > 15
//!     })
//!     .into_parts();
//!
//! assert_eq!(high, [20, 30]);
//! assert_eq!(low, [10]);
//! // holes are never handed to the predicate
//! assert_eq!(visited, [0, 2, 4]);
//! ```
//!
//! ### Context, Failure and Coercion
//!
//! ```rust
//! use stable_partition::{partition, partition_with, try_partition};
//!
//! #[derive(Default)]
//! struct Stats {
//!     calls: usize,
//! }
//!
//! // a binding context is passed to every call
//! let mut stats = Stats::default();
//! let p = partition_with(&["a", "", "b"][..], &mut stats, |stats, s, _, _| {
//!     stats.calls += 1;
//!     !s.is_empty()
//! });
//! assert_eq!(stats.calls, 3);
//! assert_eq!(p.rejected(), &[""]);
//!
//! // predicates may return anything truthy: here an Option
//! let p = partition(&["7", "x", "42"][..], |s, _, _| s.parse::<u32>().ok());
//! assert_eq!(p.selected(), &["7", "42"]);
//!
//! // a failing predicate stops the run and its error is returned unchanged
//! let r = try_partition(&[1, 2, 3][..], |v, _, _| {
//!     if *v == 2 { Err("bad value") } else { Ok(true) }
//! });
//! assert_eq!(r, Err("bad value"));
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

mod dynamic;
mod error;
mod partition;
mod source;
mod sparse;
mod truthy;

pub use dynamic::{Function, NativeFn, Value};
pub use error::PartitionError;
pub use partition::{PartitionExt, partition, partition_with, try_partition, try_partition_with};
pub use source::ArrayLike;
pub use sparse::SparseVec;
pub use truthy::Truthy;

/// The result of a partition: selected elements and rejected elements, each
/// in the order they appeared in the source.
///
/// # Examples
///
/// ```
/// use stable_partition::partition;
///
/// let p = partition(&[3, 1, 4, 1, 5][..], |v, _, _| *v > 2);
///
/// assert_eq!(p.selected(), &[3, 4, 5]);
/// assert_eq!(p.rejected(), &[1, 1]);
/// assert_eq!(p.len(), 5);
///
/// let [selected, rejected]: [Vec<i32>; 2] = p.into();
/// assert_eq!(selected.len() + rejected.len(), 5);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Partitioned<T> {
    selected: Vec<T>,
    rejected: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Partitioned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partitioned")
            .field("selected", &self.selected())
            .field("rejected", &self.rejected())
            .finish()
    }
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Partitioned<T> {
    /// Constructs a new, empty `Partitioned<T>`. It will not allocate until
    /// an element is appended to either side.
    pub(crate) const fn new() -> Self {
        Self {
            selected: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Appends an element to the selected side.
    pub(crate) fn push_selected(&mut self, value: T) {
        self.selected.push(value);
    }

    /// Appends an element to the rejected side.
    pub(crate) fn push_rejected(&mut self, value: T) {
        self.rejected.push(value);
    }

    /// Returns both sides as a tuple of slices, selected first.
    ///
    /// # Examples
    ///
    /// ```
    /// use stable_partition::partition;
    ///
    /// let p = partition(&[1, 2][..], |v, _, _| *v == 1);
    /// let (selected, rejected) = p.partitions();
    /// assert_eq!(selected, &[1]);
    /// assert_eq!(rejected, &[2]);
    /// ```
    pub fn partitions(&self) -> (&[T], &[T]) {
        (self.selected(), self.rejected())
    }

    /// Returns both sides as a tuple of mutable slices, selected first.
    pub fn partitions_mut(&mut self) -> (&mut [T], &mut [T]) {
        (self.selected.as_mut_slice(), self.rejected.as_mut_slice())
    }

    /// Returns the elements the predicate selected, in source order.
    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    /// Returns a mutable slice of the selected elements.
    pub fn selected_mut(&mut self) -> &mut [T] {
        &mut self.selected
    }

    /// Returns the elements the predicate rejected, in source order.
    pub fn rejected(&self) -> &[T] {
        &self.rejected
    }

    /// Returns a mutable slice of the rejected elements.
    pub fn rejected_mut(&mut self) -> &mut [T] {
        &mut self.rejected
    }

    /// Decomposes a `Partitioned<T>` into its selected and rejected vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use stable_partition::partition;
    ///
    /// let (evens, odds) = partition(&[1, 2, 3][..], |v, _, _| v % 2 == 0).into_parts();
    /// assert_eq!(evens, [2]);
    /// assert_eq!(odds, [1, 3]);
    /// ```
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.selected, self.rejected)
    }

    /// Returns the total number of elements on both sides.
    ///
    /// This equals the number of present indices the source had when it was
    /// partitioned.
    pub fn len(&self) -> usize {
        self.selected.len() + self.rejected.len()
    }

    /// Returns `true` if both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.rejected.is_empty()
    }
}

impl<T> From<Partitioned<T>> for (Vec<T>, Vec<T>) {
    fn from(p: Partitioned<T>) -> Self {
        p.into_parts()
    }
}

impl<T> From<Partitioned<T>> for [Vec<T>; 2] {
    fn from(p: Partitioned<T>) -> Self {
        [p.selected, p.rejected]
    }
}
