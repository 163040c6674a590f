use super::OSRBTreeSet;
use crate::compare::Natural;
use crate::raw::RawRBTree;

impl<T> OSRBTreeSet<T> {
    /// Creates an empty set in ascending order with capacity for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set: OSRBTreeSet<i32> = OSRBTreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OSRBTreeSet {
            tree: RawRBTree::with_capacity(capacity, Natural),
        }
    }
}

impl<T, C> OSRBTreeSet<T, C> {
    /// Creates an empty set ordered by `cmp` with capacity for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{OSRBTreeSet, Reverse};
    ///
    /// let mut set = OSRBTreeSet::with_capacity_and_comparator(8, Reverse);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        OSRBTreeSet {
            tree: RawRBTree::with_capacity(capacity, cmp),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set: OSRBTreeSet<i32> = OSRBTreeSet::with_capacity(32);
    /// assert_eq!(set.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
