use super::handle::{Handle, RawHandle};

/// The number of live nodes in a subtree.
///
/// Stored with the same width as [`Handle`]; the arena never holds more than `Handle::MAX`
/// nodes, so no subtree can outgrow it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(RawHandle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(size as RawHandle)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// The size of a node whose children have sizes `left` and `right`.
    #[inline]
    pub(crate) const fn join(left: Self, right: Self) -> Self {
        Self::from_usize(left.to_usize() + right.to_usize() + 1)
    }
}
