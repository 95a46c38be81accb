//! A dictionary-based spell checker backed by an ordered skiplist.
//!
//! The [`skiplist`] module is the index itself. The rest of the crate feeds
//! it: [`dictionary`] loads word lists, [`tokens`] splits text into words and
//! [`checker`] reports the words a dictionary doesn't know.

/// An ordered [`skip list`] generic over its items and their ordering.
///
/// [`skip list`]: https://en.wikipedia.org/wiki/Skip_list
pub mod skiplist;

pub mod checker;
pub mod cli;
pub mod comparator;
pub mod config;
pub mod dictionary;
pub mod errs;
pub mod profiler;
pub mod tokens;

pub use errs::Error;
