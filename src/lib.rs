//! Vec-backed collections that keep their elements sorted.
//!
//! [SortedVec] is a sequence that stays sorted by a [Comparator] and may contain elements that
//! compare equal. [SortedVecSet] builds on it and rejects elements whose hash code is already
//! present. Both are backed by a [smallvec::SmallVec], so small collections live inline.
//!
//! ```
//! use sorted_collections::{Comparator, SortedVecSet};
//!
//! let descending = Comparator::natural().reversed();
//! let mut set: SortedVecSet<[u32; 4]> = SortedVecSet::with_comparator(descending);
//! set.insert_all(vec![1, 3, 2, 3]);
//! assert_eq!(set.as_slice(), &[3, 2, 1]);
//! assert_eq!(set.head_set(&2).unwrap().as_slice(), &[3, 2]);
//! ```
#![cfg_attr(sorted_collections_docsrs, feature(doc_cfg))]

#[cfg(test)]
#[macro_use]
extern crate maplit;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[cfg(test)]
#[macro_use]
mod test_macros;

#[macro_use]
mod macros;

mod error;
mod comparator;

mod sorted_vec;
mod sorted_vec_set;

mod fixed_priority_queue;
mod listener_list;

pub mod condition;
pub mod flag;
pub mod suffix;
pub mod text;

pub use error::*;
pub use comparator::*;
pub use sorted_vec::*;
pub use sorted_vec_set::*;
pub use fixed_priority_queue::*;
pub use listener_list::*;
