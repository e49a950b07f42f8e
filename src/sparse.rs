//! A sequence with holes.

use alloc::{collections::BTreeMap, vec::Vec};

/// An ordered, 0-indexed sequence in which any index below [`len`] may be
/// absent.
///
/// A `SparseVec<T>` keeps its length separately from the entries actually
/// stored, so `[10, <hole>, 20]` has length 3 but only two present indices.
/// Removing an element leaves a hole rather than shifting its successors.
///
/// [`len`]: SparseVec::len
///
/// # Examples
///
/// ```
/// use stable_partition::SparseVec;
///
/// let mut v: SparseVec<i32> = [Some(10), None, Some(20)].into_iter().collect();
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.present_count(), 2);
/// assert_eq!(v.get(1), None);
///
/// v.remove(0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.present_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SparseVec<T> {
    len: usize,
    entries: BTreeMap<usize, T>,
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseVec<T> {
    /// Constructs a new, empty `SparseVec<T>`.
    pub const fn new() -> Self {
        Self {
            len: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Constructs a `SparseVec<T>` of length `len` in which every index is a
    /// hole.
    ///
    /// ```
    /// use stable_partition::SparseVec;
    ///
    /// let v: SparseVec<u8> = SparseVec::with_len(4);
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v.present_count(), 0);
    /// ```
    pub const fn with_len(len: usize) -> Self {
        Self {
            len,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the length of the sequence, holes included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of present indices.
    pub fn present_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if `index` holds a value.
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Returns a reference to the value at `index`, or [`None`] if the index
    /// is a hole or out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(&index)
    }

    /// Returns a mutable reference to the value at `index`, or [`None`] if the
    /// index is a hole or out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(&index)
    }

    /// Stores `value` at `index` and returns the value previously there.
    ///
    /// Writing at or past the end grows the length to `index + 1`; any indices
    /// skipped over become holes.
    ///
    /// # Panics
    ///
    /// Panics if `index` is `usize::MAX`.
    ///
    /// ```
    /// use stable_partition::SparseVec;
    ///
    /// let mut v = SparseVec::new();
    /// v.insert(3, 'd');
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v.present_count(), 1);
    /// assert_eq!(v.insert(3, 'e'), Some('d'));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.len {
            self.len = index
                .checked_add(1)
                .unwrap_or_else(|| panic!("index {index} leaves no room for a length"));
        }
        self.entries.insert(index, value)
    }

    /// Appends `value` at index `len()`.
    pub fn push(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Removes the value at `index`, leaving a hole. The length is unchanged.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.entries.remove(&index)
    }

    /// Sets the length of the sequence.
    ///
    /// Shrinking drops every entry at or past `len`; growing appends holes.
    ///
    /// ```
    /// use stable_partition::SparseVec;
    ///
    /// let mut v = SparseVec::from(vec![1, 2, 3]);
    /// v.set_len(1);
    /// assert_eq!(v.present_count(), 1);
    /// v.set_len(5);
    /// assert_eq!(v.len(), 5);
    /// assert_eq!(v.get(2), None);
    /// ```
    pub fn set_len(&mut self, len: usize) {
        if len < self.len {
            // everything at or past `len` goes
            drop(self.entries.split_off(&len));
        }
        self.len = len;
    }

    /// Iterates over the present entries in ascending index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> + '_ {
        self.entries.iter().map(|(&index, value)| (index, value))
    }

    /// Iterates over the present values in ascending index order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.entries.values()
    }
}

impl<T> FromIterator<Option<T>> for SparseVec<T> {
    /// Builds a sequence where each `None` becomes a hole.
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let mut v = Self::new();
        for slot in iter {
            match slot {
                Some(value) => v.push(value),
                None => v.len += 1,
            }
        }
        v
    }
}

impl<T> From<Vec<T>> for SparseVec<T> {
    /// Builds a dense sequence: every index is present.
    fn from(values: Vec<T>) -> Self {
        Self {
            len: values.len(),
            entries: values.into_iter().enumerate().collect(),
        }
    }
}
