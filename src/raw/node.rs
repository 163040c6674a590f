use super::handle::Handle;
use super::size::Size;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node. Every mirrored case of the balancing code is written once in terms of
/// a `Side` and its opposite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A red-black tree node augmented with the cardinality of its subtree.
///
/// Links are arena handles; an absent child or parent is [`Handle::NIL`].
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    key: K,
    color: Color,
    parent: Handle,
    left: Handle,
    right: Handle,
    // Live nodes in the subtree rooted here, including this one.
    size: Size,
}

impl<K> Node<K> {
    /// Creates a red leaf hanging under `parent`.
    pub(crate) const fn new_leaf(key: K, parent: Handle) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: Handle::NIL,
            right: Handle::NIL,
            size: Size::ONE,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Handle {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Handle) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Handle {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Handle {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Handle {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Handle) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns the side on which `child` hangs. `child` may be the sentinel, in which case the
    /// first empty side wins.
    #[inline]
    pub(crate) fn side_of(&self, child: Handle) -> Side {
        if self.left == child { Side::Left } else { Side::Right }
    }

    #[inline]
    pub(crate) const fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_leaf_is_red_and_childless() {
        let parent = Handle::from_index(3);
        let node = Node::new_leaf("k", parent);
        assert_eq!(node.color(), Color::Red);
        assert_eq!(node.parent(), parent);
        assert!(node.left().is_nil());
        assert!(node.right().is_nil());
        assert_eq!(node.size(), Size::ONE);
        assert_eq!(*node.key(), "k");
    }

    #[test]
    fn children_by_side() {
        let mut node = Node::new_leaf(0u8, Handle::NIL);
        let l = Handle::from_index(1);
        let r = Handle::from_index(2);
        node.set_child(Side::Left, l);
        node.set_child(Side::Right, r);
        assert_eq!(node.child(Side::Left), l);
        assert_eq!(node.child(Side::Right), r);
        assert_eq!(node.side_of(l), Side::Left);
        assert_eq!(node.side_of(r), Side::Right);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
