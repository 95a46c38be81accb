//! A skiplist which keeps its items ordered by a pluggable comparator and
//! allows `O(log n)` expected time insertion and lookup.
//!
//! SkipLists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! Most commonly, a geometric distribution is used whereby the chance that a
//! node occupies level `n` is `p` times the chance of occupying level `n-1`
//! (with `0 < p < 1`). Here `p` is `1/2` and a node never spans more than the
//! list's max height.
//!
//! It is very unlikely that this will need to be changed as the default should
//! suffice, but if need be custom level generators can be implemented.

mod level_generator;
mod ordered_skiplist;
mod skipnode;

pub use level_generator::{
    GeometricalLevelGenerator,
    LevelGenerator,
};
pub use ordered_skiplist::{
    IntoIter,
    Iter,
    OrderedSkipList,
};
