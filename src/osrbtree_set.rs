use core::fmt;
use core::iter::FusedIterator;

use alloc::vec;

use crate::compare::{Compare, Natural};
use crate::raw::{RawIter, RawRBTree};

mod capacity;
mod order_statistic;

/// An ordered set based on a red-black tree augmented with subtree sizes.
///
/// Besides the usual set operations, every element can be reached by its rank (its zero-based
/// position in sorted order) and the rank of any bound can be computed, both in O(log n).
///
/// Elements are ordered by a comparator fixed at construction: [`Natural`] (ascending by
/// [`Ord`]) unless one is supplied with [`OSRBTreeSet::with_comparator`]. Elements equal under
/// the comparator are duplicates; inserting one leaves the set unchanged.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the comparator, changes while it is in the set. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OSRBTreeSet` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeSet;
///
/// let mut books = OSRBTreeSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// if !books.contains(&"The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.remove(&"The Odyssey");
///
/// // The second book in sorted order.
/// assert_eq!(books.get_by_rank(1), Some(&"The Great Gatsby"));
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `OSRBTreeSet` with a known list of items can be initialized from an array:
///
/// ```
/// use osrb_tree::OSRBTreeSet;
///
/// let set = OSRBTreeSet::from([1, 2, 3]);
/// ```
pub struct OSRBTreeSet<T, C = Natural> {
    tree: RawRBTree<T, C>,
}

/// An iterator over the items of a `OSRBTreeSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`OSRBTreeSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeSet;
///
/// let set = OSRBTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// ```
///
/// [`iter`]: OSRBTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: RawIter<'a, T>,
}

/// An owning iterator over the items of a `OSRBTreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`OSRBTreeSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: OSRBTreeSet#method.into_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> OSRBTreeSet<T> {
    /// Makes a new, empty `OSRBTreeSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> OSRBTreeSet<T> {
        OSRBTreeSet {
            tree: RawRBTree::new(Natural),
        }
    }
}

impl<T, C> OSRBTreeSet<T, C> {
    /// Makes a new, empty `OSRBTreeSet` ordered by `cmp`.
    ///
    /// `cmp` may be any [`Compare`] implementation, including a closure
    /// `Fn(&T, &T) -> Ordering`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.extend([10, 5, 15]);
    /// assert_eq!(set.first(), Some(&15));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        OSRBTreeSet {
            tree: RawRBTree::new(cmp),
        }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut v = OSRBTreeSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the first element in the set, if any. This element is always the minimum of all
    /// elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns the last element in the set, if any. This element is always the maximum of all
    /// elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Gets an iterator that visits the elements in the `OSRBTreeSet` in ascending order.
    ///
    /// The iterator is lazy and borrows the set; call `iter` again (or clone the iterator) to
    /// walk the elements another time.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; a full walk is O(n).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut a = OSRBTreeSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T, C: Compare<T>> OSRBTreeSet<T, C> {
    /// Returns `true` if the set contains a value equal to `value` under the comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains(&self, value: &T) -> bool {
        !self.tree.search(value).is_nil()
    }

    /// Returns a reference to the value in the set, if any, that is equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree.get(value)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is returned.
    /// - If the set already contained an equal value, `false` is returned, and the set is not
    ///   modified: the original value is not replaced, and the value passed as argument is
    ///   dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the set already holds the maximum number of elements (`u32::MAX - 1`).
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// If the set contains an element equal to the value, removes it from the set and drops it.
    /// Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.remove(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value)
    }
}

impl<T: PartialEq, C> PartialEq for OSRBTreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for OSRBTreeSet<T, C> {}

impl<T: Clone, C: Clone> Clone for OSRBTreeSet<T, C> {
    fn clone(&self) -> Self {
        OSRBTreeSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OSRBTreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for OSRBTreeSet<T, C> {
    fn default() -> Self {
        OSRBTreeSet::with_comparator(C::default())
    }
}

impl<T: Ord> FromIterator<T> for OSRBTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OSRBTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for OSRBTreeSet<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |elem| {
            self.insert(elem);
        });
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for OSRBTreeSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OSRBTreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, C> IntoIterator for OSRBTreeSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `OSRBTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.tree.into_sorted_vec().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OSRBTreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<alloc::vec::Vec<_>>()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `osrbtree_set::IntoIter`.
    ///
    /// ```
    /// # use osrb_tree::osrbtree_set;
    /// let iter: osrbtree_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: vec::IntoIter::default(),
        }
    }
}
