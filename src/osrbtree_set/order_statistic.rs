use core::ops::Index;

use super::OSRBTreeSet;
use crate::Rank;
use crate::compare::Compare;

impl<T, C: Compare<T>> OSRBTreeSet<T, C> {
    /// Returns the value at position `rank` in sorted order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([50, 30, 70, 20, 40, 60, 80]);
    /// assert_eq!(set.get_by_rank(0), Some(&20));
    /// assert_eq!(set.get_by_rank(6), Some(&80));
    /// assert!(set.get_by_rank(7).is_none());
    /// ```
    #[doc(alias = "select")]
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.tree.select(rank)
    }

    /// Returns the first value not less than `bound` together with its rank.
    ///
    /// If every value is less than `bound`, returns `None` paired with [`len`](Self::len), which
    /// is still the number of values less than `bound`. Either way the rank counts the values
    /// that sort before `bound`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([50, 30, 70, 20, 40, 60, 80]);
    /// assert_eq!(set.lower_bound(&45), (Some(&50), 4));
    /// assert_eq!(set.lower_bound(&50), (Some(&50), 3));
    /// assert_eq!(set.lower_bound(&99), (None, 7));
    /// ```
    #[doc(alias = "bisect_left")]
    #[must_use]
    pub fn lower_bound(&self, bound: &T) -> (Option<&T>, usize) {
        self.tree.lower_bound(bound)
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeSet;
/// use osrb_tree::Rank;
///
/// let set = OSRBTreeSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(1)], 20);
/// ```
impl<T, C: Compare<T>> Index<Rank> for OSRBTreeSet<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
