use core::cmp::Ordering;

use alloc::vec::Vec;
use log::trace;
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::iter::{RawIter, edge};
use super::node::{Color, Node, Side};
use super::size::Size;
use crate::compare::Compare;

/// The red-black tree backing `OSRBTreeSet`.
///
/// Every node carries the size of its subtree, which turns rank selection and lower-bound
/// ranking into single root-to-leaf descents.
#[derive(Clone)]
pub(crate) struct RawRBTree<K, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// The root node, or the sentinel if the tree is empty.
    root: Handle,
    /// The total order over keys.
    cmp: C,
}

impl<K, C> RawRBTree<K, C> {
    /// Creates a new, empty tree ordered by `cmp`.
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: Handle::NIL,
            cmp,
        }
    }

    /// Creates a new tree with room for `capacity` keys before reallocating.
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: Handle::NIL,
            cmp,
        }
    }

    /// Returns the number of keys in the tree.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root).to_usize()
    }

    /// Returns true if the tree contains no keys.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Returns the capacity of the node arena.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Clears all keys from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = Handle::NIL;
    }

    /// Returns the key stored at `handle`, which must not be the sentinel.
    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.nodes.get(handle).key()
    }

    /// Returns a double-ended in-order iterator over the keys.
    pub(crate) fn iter(&self) -> RawIter<'_, K> {
        RawIter::new(&self.nodes, self.root, self.len())
    }

    /// Consumes the tree, returning its keys in ascending order.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        // Red-black height is at most 2 * log2(n + 1), so the stack stays inline.
        let mut stack: SmallVec<[Handle; 64]> = SmallVec::new();
        let mut current = self.root;

        loop {
            while !current.is_nil() {
                stack.push(current);
                current = self.node(current).left();
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            let node = self.nodes.take(handle);
            current = node.right();
            keys.push(node.into_key());
        }

        self.root = Handle::NIL;
        keys
    }

    /// Returns the leftmost (`Side::Left`) or rightmost node of the subtree at `handle`.
    fn edge(&self, handle: Handle, side: Side) -> Handle {
        edge(&self.nodes, handle, side)
    }

    // ─── Sentinel-aware accessors ────────────────────────────────────────────

    #[inline]
    fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node<K> {
        self.nodes.get_mut(handle)
    }

    /// The sentinel reads as black.
    #[inline]
    fn color(&self, handle: Handle) -> Color {
        if handle.is_nil() { Color::Black } else { self.node(handle).color() }
    }

    #[inline]
    fn is_red(&self, handle: Handle) -> bool {
        self.color(handle) == Color::Red
    }

    /// Recolors a node. The sentinel is black for good, so painting it black is a no-op.
    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        if handle.is_nil() {
            debug_assert_eq!(color, Color::Black, "the sentinel cannot be painted red");
            return;
        }
        self.node_mut(handle).set_color(color);
    }

    /// The sentinel reads as an empty subtree.
    #[inline]
    fn size_of(&self, handle: Handle) -> Size {
        if handle.is_nil() { Size::ZERO } else { self.node(handle).size() }
    }

    #[inline]
    fn parent(&self, handle: Handle) -> Handle {
        self.node(handle).parent()
    }

    #[inline]
    fn child(&self, handle: Handle, side: Side) -> Handle {
        self.node(handle).child(side)
    }

    // ─── Augmentation ────────────────────────────────────────────────────────

    /// Recomputes the subtree size of `handle` from its two children.
    fn refresh_count(&mut self, handle: Handle) {
        if handle.is_nil() {
            return;
        }
        let node = self.node(handle);
        let size = Size::join(self.size_of(node.left()), self.size_of(node.right()));
        self.node_mut(handle).set_size(size);
    }

    /// Refreshes `handle` and every ancestor up to the root, bottom-up.
    fn refresh_to_root(&mut self, mut handle: Handle) {
        while !handle.is_nil() {
            self.refresh_count(handle);
            handle = self.parent(handle);
        }
    }

    // ─── Structural primitives ───────────────────────────────────────────────

    /// Rotates around `pivot` toward `side`: the child on the opposite side is promoted into
    /// the pivot's place and the pivot becomes its `side` child.
    ///
    /// Only the pivot and the promoted node change subtree membership, so only their sizes are
    /// refreshed (pivot first, as it is now the child).
    fn rotate(&mut self, pivot: Handle, side: Side) {
        let promoted = self.child(pivot, side.opposite());
        debug_assert!(!promoted.is_nil(), "rotate: the promoted child must not be the sentinel");

        let inner = self.child(promoted, side);
        self.node_mut(pivot).set_child(side.opposite(), inner);
        if !inner.is_nil() {
            self.node_mut(inner).set_parent(pivot);
        }

        self.transplant(pivot, promoted);
        self.node_mut(promoted).set_child(side, pivot);
        self.node_mut(pivot).set_parent(promoted);

        self.refresh_count(pivot);
        self.refresh_count(promoted);
    }

    /// Puts `v` where `u` hangs: rewrites the link from `u`'s parent (or the root) and `v`'s
    /// parent. `u`'s own links are left untouched.
    fn transplant(&mut self, u: Handle, v: Handle) {
        let parent = self.parent(u);
        if parent.is_nil() {
            self.root = v;
        } else {
            let side = self.node(parent).side_of(u);
            self.node_mut(parent).set_child(side, v);
        }
        if !v.is_nil() {
            self.node_mut(v).set_parent(parent);
        }
    }
}

impl<K, C: Compare<K>> RawRBTree<K, C> {
    /// Descends to the node holding `key`, or returns the sentinel.
    pub(crate) fn search(&self, key: &K) -> Handle {
        let mut current = self.root;
        while !current.is_nil() {
            let node = self.node(current);
            match self.cmp.compare(key, node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return current,
            }
        }
        Handle::NIL
    }

    /// Returns the stored key equal to `key`, if any.
    pub(crate) fn get(&self, key: &K) -> Option<&K> {
        let handle = self.search(key);
        (!handle.is_nil()).then(|| self.key(handle))
    }

    /// Inserts `key`. Returns `false`, leaving the tree untouched, if an equal key is present.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let mut parent = Handle::NIL;
        let mut current = self.root;
        let mut side = Side::Left;

        while !current.is_nil() {
            parent = current;
            let node = self.node(current);
            match self.cmp.compare(&key, node.key()) {
                Ordering::Less => side = Side::Left,
                Ordering::Greater => side = Side::Right,
                Ordering::Equal => return false,
            }
            current = node.child(side);
        }

        let node = self.nodes.alloc(Node::new_leaf(key, parent));
        if parent.is_nil() {
            self.root = node;
        } else {
            self.node_mut(parent).set_child(side, node);
        }
        trace!("insert: attached {node:?} under {parent:?} on the {side:?}");

        self.refresh_to_root(parent);
        self.insert_fixup(node);
        true
    }

    /// Removes and returns the key equal to `key`, if any.
    pub(crate) fn remove(&mut self, key: &K) -> Option<K> {
        let target = self.search(key);
        if target.is_nil() {
            return None;
        }

        let left = self.child(target, Side::Left);
        let right = self.child(target, Side::Right);
        let mut removed_color = self.color(target);
        // `replacement` takes over the vacated position; it may be the sentinel, so its parent
        // is tracked alongside it.
        let replacement;
        let replacement_parent;

        if left.is_nil() {
            trace!("remove: {target:?} has no left child");
            replacement = right;
            replacement_parent = self.parent(target);
            self.transplant(target, right);
        } else if right.is_nil() {
            trace!("remove: {target:?} has no right child");
            replacement = left;
            replacement_parent = self.parent(target);
            self.transplant(target, left);
        } else {
            let successor = self.edge(right, Side::Left);
            trace!("remove: {target:?} has two children, relocating successor {successor:?}");
            removed_color = self.color(successor);
            replacement = self.child(successor, Side::Right);

            if self.parent(successor) == target {
                replacement_parent = successor;
            } else {
                replacement_parent = self.parent(successor);
                self.transplant(successor, replacement);
                self.node_mut(successor).set_child(Side::Right, right);
                self.node_mut(right).set_parent(successor);
            }

            self.transplant(target, successor);
            self.node_mut(successor).set_child(Side::Left, left);
            self.node_mut(left).set_parent(successor);
            let color = self.color(target);
            self.set_color(successor, color);
        }

        // A relocated successor lies on this path, so one walk refreshes it as well.
        self.refresh_to_root(replacement_parent);

        let removed = self.nodes.take(target);
        if removed_color == Color::Black {
            self.delete_fixup(replacement, replacement_parent);
        }
        debug_assert_eq!(self.len(), self.nodes.len(), "remove: root size disagrees with the arena");
        Some(removed.into_key())
    }

    /// Returns the key of in-order rank `rank`, or `None` if `rank >= len`.
    pub(crate) fn select(&self, rank: usize) -> Option<&K> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root;
        let mut remaining = rank;

        while !current.is_nil() {
            let node = self.node(current);
            let left_size = self.size_of(node.left()).to_usize();
            match remaining.cmp(&left_size) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node.key()),
                Ordering::Greater => {
                    remaining -= left_size + 1;
                    current = node.right();
                }
            }
        }

        // Only reachable if subtree sizes are stale.
        None
    }

    /// Finds the leftmost key `>= bound` and its rank. If every key is less than `bound`,
    /// returns `None` with the tree's length.
    pub(crate) fn lower_bound(&self, bound: &K) -> (Option<&K>, usize) {
        let mut current = self.root;
        // Number of keys known to precede `current`'s subtree.
        let mut offset = 0;
        let mut best: Option<(Handle, usize)> = None;

        while !current.is_nil() {
            let node = self.node(current);
            let left_size = self.size_of(node.left()).to_usize();
            if self.cmp.compare(node.key(), bound) == Ordering::Less {
                offset += left_size + 1;
                current = node.right();
            } else {
                let rank = offset + left_size;
                if best.is_none_or(|(_, best_rank)| rank < best_rank) {
                    best = Some((current, rank));
                }
                current = node.left();
            }
        }

        match best {
            Some((handle, rank)) => (Some(self.key(handle)), rank),
            None => (None, self.len()),
        }
    }

    // ─── Balancing ───────────────────────────────────────────────────────────

    /// Restores the red-black invariants after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, mut node: Handle) {
        while self.is_red(self.parent(node)) {
            let parent = self.parent(node);
            // A red parent is never the root, so the grandparent is a real node.
            let grandparent = self.parent(parent);
            let side = self.node(grandparent).side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.is_red(uncle) {
                trace!("insert_fixup: red uncle {uncle:?}, recoloring and climbing to {grandparent:?}");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if node == self.child(parent, side.opposite()) {
                trace!("insert_fixup: inner grandchild {node:?}, straightening");
                node = parent;
                self.rotate(node, side);
            }

            let parent = self.parent(node);
            let grandparent = self.parent(parent);
            trace!("insert_fixup: outer grandchild {node:?}, rotating {grandparent:?}");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Resolves the missing black on the path through `node`, whose parent is `parent`.
    ///
    /// `node` may be the sentinel, which is why its parent is passed explicitly.
    fn delete_fixup(&mut self, mut node: Handle, mut parent: Handle) {
        while node != self.root && !self.is_red(node) {
            let side = self.node(parent).side_of(node);
            let mut sibling = self.child(parent, side.opposite());

            if self.is_red(sibling) {
                trace!("delete_fixup: red sibling {sibling:?}, rotating {parent:?}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, side.opposite());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                trace!("delete_fixup: black nephews, moving the deficit up to {parent:?}");
                self.set_color(sibling, Color::Red);
                node = parent;
                parent = self.parent(node);
                continue;
            }

            if !self.is_red(far) {
                trace!("delete_fixup: red near nephew {near:?}, rotating {sibling:?}");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.child(parent, side.opposite());
            }

            trace!("delete_fixup: red far nephew, rotating {parent:?}");
            let color = self.color(parent);
            self.set_color(sibling, color);
            self.set_color(parent, Color::Black);
            let far = self.child(sibling, side.opposite());
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            node = self.root;
            parent = Handle::NIL;
        }

        self.set_color(node, Color::Black);
    }
}
