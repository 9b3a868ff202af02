//! An ordered set based on a red-black tree.
//!
//! Nodes live in an index arena owned by the set. Slot `0` of the arena is a
//! per-set sentinel that terminates every branch and acts as the root's parent,
//! so the rebalancing code never branches on a missing child.
//!
//! ```
//! let mut set: rbset::Set<_> = [5, 3, 8, 1, 4, 7, 9].into();
//! assert_eq!(set.iter().cloned().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! set.remove(&5);
//! assert!(set.find(&5) == set.end());
//! assert_eq!(set.lower_bound(&6).get(), Some(&7));
//! ```

#![deny(missing_docs)]

extern crate compare;
#[macro_use]
extern crate log;

mod balance;
mod error;
mod node;
#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;

pub mod set;

pub use error::{Error, Result};
pub use set::Set;
