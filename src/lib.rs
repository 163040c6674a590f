//! Order-statistic red-black tree for Rust.
//!
//! This crate provides [`OSRBTreeSet`], an ordered set backed by a red-black tree whose nodes
//! also count the elements beneath them. Alongside insertion, removal and lookup it answers two
//! order-statistic queries, all in guaranteed O(log n):
//!
//! - [`get_by_rank`](OSRBTreeSet::get_by_rank) - Get the element at a given sorted position
//! - [`lower_bound`](OSRBTreeSet::lower_bound) - Get the first element not less than a bound,
//!   together with its sorted position
//! - Indexing by [`Rank`] - e.g., `set[Rank(0)]` for the first element
//!
//! # Example
//!
//! ```
//! use osrb_tree::{OSRBTreeSet, Rank};
//!
//! let mut set = OSRBTreeSet::from([50, 30, 70, 20, 40, 60, 80]);
//!
//! // Standard set operations
//! assert!(set.contains(&40));
//! assert_eq!(set.len(), 7);
//!
//! // Order-statistic operations (O(log n))
//! assert_eq!(set.get_by_rank(0), Some(&20));
//! assert_eq!(set.lower_bound(&45), (Some(&50), 4));
//!
//! set.remove(&30);
//! assert_eq!(set[Rank(1)], 40);
//! ```
//!
//! Counting, for each element, how many smaller elements follow it:
//!
//! ```
//! use osrb_tree::OSRBTreeSet;
//!
//! let nums = [5, 2, 6, 1];
//! let mut seen = OSRBTreeSet::new();
//! let mut counts = vec![0; nums.len()];
//! for (i, n) in nums.iter().enumerate().rev() {
//!     counts[i] = seen.lower_bound(n).1;
//!     seen.insert(*n);
//! }
//! assert_eq!(counts, [2, 1, 1, 0]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Injected ordering** - Any [`Compare`] implementation, including closures
//! - **Arena storage** - Nodes live in one contiguous slot vector linked by indices
//!
//! # Implementation
//!
//! The set is a classic red-black tree with parent links and a shared black sentinel standing
//! in for every absent child. Each node stores the size of its subtree; insertion and removal
//! refresh the sizes along the path to the root and rotations refresh the two nodes they move.
//! Structural events are reported through the [`log`] facade at `trace` level.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod order_statistic;
mod raw;

pub mod osrbtree_set;

pub use compare::{Compare, Natural, Reverse};
pub use order_statistic::Rank;
pub use osrbtree_set::OSRBTreeSet;
