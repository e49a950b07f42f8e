use alloc::{collections::VecDeque, vec::Vec};
use core::cell::RefCell;

use crate::SparseVec;

/// An indexable sequence with a length, where any index below the length may
/// be absent.
///
/// [`get`](ArrayLike::get) is the presence check: it returns [`None`] for a
/// hole and `Some` for a present index, even when the stored value itself
/// means "nothing" (a `Some(None)` read from a `SparseVec<Option<T>>` is
/// present). Values are handed out by value, so dense sequences clone.
///
/// # Examples
///
/// ```
/// use stable_partition::{ArrayLike, SparseVec};
///
/// let dense = vec!['a', 'b'];
/// assert_eq!(dense.length(), 2);
/// assert_eq!(ArrayLike::get(&dense, 1), Some('b'));
///
/// let holey: SparseVec<char> = [None, Some('b')].into_iter().collect();
/// assert_eq!(holey.length(), 2);
/// assert!(!holey.contains_index(0));
/// ```
pub trait ArrayLike {
    type Item;

    /// The length of the sequence. Indices `0..length()` are visited.
    fn length(&self) -> usize;

    /// Reads the value at `index`, or [`None`] if the index is absent.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Returns `true` if `index` is present.
    fn contains_index(&self, index: usize) -> bool {
        self.get(index).is_some()
    }
}

impl<T: Clone> ArrayLike for [T] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }

    #[inline]
    fn contains_index(&self, index: usize) -> bool {
        index < self.len()
    }
}

impl<T: Clone> ArrayLike for Vec<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }

    #[inline]
    fn contains_index(&self, index: usize) -> bool {
        index < self.len()
    }
}

impl<T: Clone> ArrayLike for VecDeque<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        VecDeque::get(self, index).cloned()
    }

    #[inline]
    fn contains_index(&self, index: usize) -> bool {
        index < self.len()
    }
}

impl<T: Clone> ArrayLike for SparseVec<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        SparseVec::get(self, index).cloned()
    }

    #[inline]
    fn contains_index(&self, index: usize) -> bool {
        self.contains(index)
    }
}

/// A live view of a shared sequence.
///
/// Every call borrows the cell only for its own duration, so a predicate that
/// holds a handle to the same cell may mutate the sequence between visits.
/// The mutation is seen by later `get` calls.
///
/// # Panics
///
/// Panics if the cell is mutably borrowed while it is read.
impl<S: ArrayLike + ?Sized> ArrayLike for RefCell<S> {
    type Item = S::Item;

    fn length(&self) -> usize {
        self.borrow().length()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        self.borrow().get(index)
    }

    fn contains_index(&self, index: usize) -> bool {
        self.borrow().contains_index(index)
    }
}
