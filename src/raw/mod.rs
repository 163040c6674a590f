mod arena;
mod handle;
mod iter;
mod node;
mod raw_rbtree;
mod size;

pub(crate) use iter::RawIter;
pub(crate) use raw_rbtree::RawRBTree;
