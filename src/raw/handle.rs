#[cfg(test)]
pub(super) type RawHandle = u16;
#[cfg(not(test))]
pub(super) type RawHandle = u32;

/// An index into the node arena.
///
/// The raw value `0` is reserved for the sentinel, [`Handle::NIL`], which stands in for every
/// absent child and for the root's parent. Live nodes are stored at `raw - 1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(RawHandle);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;
    pub(crate) const NIL: Self = Self(0);

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        Self((index + 1) as RawHandle)
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        assert!(!self.is_nil(), "`Handle::to_index()` - the sentinel has no slot!");
        (self.0 - 1) as usize
    }

    #[inline]
    pub(crate) const fn is_nil(self) -> bool {
        self.0 == 0
    }
}
