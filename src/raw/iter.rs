use core::iter::FusedIterator;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// Returns the leftmost (`Side::Left`) or rightmost node of the subtree at `handle`.
pub(super) fn edge<K>(nodes: &Arena<Node<K>>, mut handle: Handle, side: Side) -> Handle {
    loop {
        let next = nodes.get(handle).child(side);
        if next.is_nil() {
            return handle;
        }
        handle = next;
    }
}

/// Returns the in-order neighbour of `handle` toward `side`, or the sentinel.
fn step<K>(nodes: &Arena<Node<K>>, handle: Handle, side: Side) -> Handle {
    let child = nodes.get(handle).child(side);
    if !child.is_nil() {
        return edge(nodes, child, side.opposite());
    }

    let mut current = handle;
    let mut parent = nodes.get(current).parent();
    while !parent.is_nil() && nodes.get(parent).child(side) == current {
        current = parent;
        parent = nodes.get(parent).parent();
    }
    parent
}

/// An in-order walk over borrowed keys that follows parent links, so it needs no stack and
/// stays safe on any tree shape.
pub(crate) struct RawIter<'a, K> {
    nodes: &'a Arena<Node<K>>,
    front: Handle,
    back: Handle,
    remaining: usize,
}

impl<'a, K> RawIter<'a, K> {
    pub(crate) fn new(nodes: &'a Arena<Node<K>>, root: Handle, len: usize) -> Self {
        if root.is_nil() {
            return Self {
                nodes,
                front: Handle::NIL,
                back: Handle::NIL,
                remaining: 0,
            };
        }

        Self {
            nodes,
            front: edge(nodes, root, Side::Left),
            back: edge(nodes, root, Side::Right),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for RawIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = step(self.nodes, current, Side::Right);
        }
        Some(self.nodes.get(current).key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> DoubleEndedIterator for RawIter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = step(self.nodes, current, Side::Left);
        }
        Some(self.nodes.get(current).key())
    }
}

impl<K> ExactSizeIterator for RawIter<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for RawIter<'_, K> {}

impl<K> Clone for RawIter<'_, K> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::raw_rbtree::RawRBTree;
    use crate::compare::Natural;
    use alloc::vec::Vec;

    fn tree(keys: impl IntoIterator<Item = u32>) -> RawRBTree<u32, Natural> {
        let mut tree = RawRBTree::new(Natural);
        for key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn walks_both_ways() {
        let tree = tree([5, 1, 9, 3, 7]);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 7, 9]);
        assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), [9, 7, 5, 3, 1]);
    }

    #[test]
    fn ends_meet_in_the_middle() {
        let tree = tree(0..10);
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.len(), 8);
        let middle: Vec<_> = iter.by_ref().copied().collect();
        assert_eq!(middle, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn restarts_from_a_clone() {
        let tree = tree(0..100);
        let mut iter = tree.iter();
        assert_eq!(iter.nth(40), Some(&40));
        let resumed = iter.clone();
        assert_eq!(iter.count(), 59);
        assert_eq!(resumed.copied().next(), Some(41));
        assert_eq!(tree.iter().count(), 100);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = tree([]);
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().next_back(), None);
        assert_eq!(tree.iter().len(), 0);
    }
}
