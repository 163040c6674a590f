use core::cmp::Ordering;

/// A total order over `T`, injected into a tree at construction.
///
/// The order must be consistent for the lifetime of the tree: reflexive, antisymmetric and
/// transitive. Violating this is a logic error with the same consequences as a broken [`Ord`]
/// implementation in `BTreeSet`.
///
/// Implemented for [`Natural`], [`Reverse`] and any `Fn(&T, &T) -> Ordering`.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeSet;
///
/// // Order strings by length, then lexically.
/// let mut set = OSRBTreeSet::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)));
/// set.extend(["banana", "fig", "apple", "kiwi"]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["fig", "kiwi", "apple", "banana"]);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Ascending order by [`Ord`]. The default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

/// Descending order by [`Ord`].
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeSet, Reverse};
///
/// let mut set = OSRBTreeSet::with_comparator(Reverse);
/// set.extend([10, 5, 15, 3]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [15, 10, 5, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

impl<T: ?Sized + Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized + Ord> Compare<T> for Reverse {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn natural_and_reverse_are_mirrors() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(Natural.compare("a", "a"), Ordering::Equal);
        assert_eq!(Reverse.compare("a", "a"), Ordering::Equal);
    }

    #[test]
    fn closures_compare() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
    }
}
