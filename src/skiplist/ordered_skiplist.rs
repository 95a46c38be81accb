// Copyright (c) Sienna Satterwhite, LexiSkip Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    iter::FusedIterator,
};

use tracing::{
    debug,
    instrument,
};

use crate::{
    comparator::{
        Comparator,
        NaturalOrder,
    },
    config::PROMOTION_PROBABILITY,
    errs::Error,
    skiplist::{
        level_generator::{
            GeometricalLevelGenerator,
            LevelGenerator,
        },
        skipnode::{
            NodeId,
            SkipNode,
        },
    },
};

/// Where a traversal currently stands: either the list's own head slots or a
/// node's forward links. Both are per-level link arrays, so once a walk has
/// moved past a node it keeps going from that node's links instead of
/// remembering every predecessor in a separate update vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Head,
    Node(NodeId),
}

/// An ordered multiset backed by a skiplist.
///
/// Items are kept sorted by the comparator `C`, duplicates are allowed and sit
/// next to each other. Insertion and lookup take `O(log n)` expected time.
/// Nodes live in an arena owned by the list and are only released all at once,
/// by [`OrderedSkipList::clear`] or when the list is dropped.
pub struct OrderedSkipList<T, C = NaturalOrder, G = GeometricalLevelGenerator> {
    // one slot per level, `heads[i]` is the first node on level `i`
    heads: Vec<Option<NodeId>>,
    nodes: Vec<SkipNode<T>>,
    // highest level index any node reaches, never above `heads.len() - 1`
    top_level: usize,
    compare: C,
    level_generator: G,
}

// ///////////////////////////////////////////////
// Constructors
// ///////////////////////////////////////////////

impl<T, C> OrderedSkipList<T, C, GeometricalLevelGenerator> {
    /// Create an empty list whose nodes span at most `max_height` levels,
    /// ordered by `compare`.
    ///
    /// Fails if `max_height` is `0`.
    pub fn new(max_height: usize, compare: C) -> Result<Self, Error> {
        let lg = GeometricalLevelGenerator::new(max_height, PROMOTION_PROBABILITY)?;
        Self::with_level_generator(compare, lg)
    }

    /// Same as [`OrderedSkipList::new`], but node heights are drawn from a
    /// generator seeded with `seed`, so the shape of the list is reproducible.
    pub fn with_seed(max_height: usize, compare: C, seed: u64) -> Result<Self, Error> {
        let lg = GeometricalLevelGenerator::with_seed(max_height, PROMOTION_PROBABILITY, seed)?;
        Self::with_level_generator(compare, lg)
    }
}

impl<T, C, G> OrderedSkipList<T, C, G>
where
    G: LevelGenerator,
{
    /// Create an empty list using a custom level generator. The list's max
    /// height is `level_generator.total()`.
    pub fn with_level_generator(compare: C, level_generator: G) -> Result<Self, Error> {
        let max_height = level_generator.total();
        if max_height == 0 {
            return Err(Error::InvalidMaxHeight(max_height));
        }

        let mut heads = Vec::new();
        heads.try_reserve_exact(max_height)?;
        heads.resize(max_height, None);

        Ok(OrderedSkipList {
            heads,
            nodes: Vec::new(),
            top_level: 0,
            compare,
            level_generator,
        })
    }
}

// ///////////////////////////////////////////////
// Public API
// ///////////////////////////////////////////////

impl<T, C, G> OrderedSkipList<T, C, G> {
    /// Number of items in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The most levels a single node may span.
    #[inline]
    pub fn max_height(&self) -> usize {
        self.heads.len()
    }

    /// Index of the highest level currently holding a node. It starts at `0`,
    /// only grows as items are inserted and is reset by
    /// [`OrderedSkipList::clear`].
    #[inline]
    pub fn top_level(&self) -> usize {
        self.top_level
    }

    /// The items in order, following the bottom level from start to end.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.heads[0],
            remaining: self.nodes.len(),
        }
    }

    /// How many levels each node spans, in item order.
    pub fn level_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.chain().map(move |id| self.nodes[id].level_count())
    }

    /// Release every item and return the list to its empty state. Returns the
    /// number of items released.
    ///
    /// Only the bottom level is walked, since every node sits on it exactly
    /// once, so nothing is released twice through a higher level.
    #[instrument(level = "debug", skip_all, fields(len = self.nodes.len()))]
    pub fn clear(&mut self) -> usize {
        let released = self.chain().count();
        debug_assert_eq!(released, self.nodes.len());

        self.nodes.clear();
        self.heads.fill(None);
        self.top_level = 0;

        debug!(released, "cleared skiplist");
        released
    }

    /// Node ids along the bottom level, in order.
    fn chain(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.heads[0], move |&id| self.nodes[id].next(0))
    }

    /// The link array at `cursor`, level `level`.
    #[inline]
    fn link(&self, cursor: Cursor, level: usize) -> Option<NodeId> {
        match cursor {
            | Cursor::Head => self.heads[level],
            | Cursor::Node(id) => self.nodes[id].forward[level],
        }
    }

    #[inline]
    fn set_link(&mut self, cursor: Cursor, level: usize, target: Option<NodeId>) {
        match cursor {
            | Cursor::Head => self.heads[level] = target,
            | Cursor::Node(id) => self.nodes[id].forward[level] = target,
        }
    }

    /// The one traversal step both `insert` and `search` are built from.
    ///
    /// Requires `cursor` to own `level`: the head always does, and a node does
    /// when `level < level_count`. Moves the cursor along level `level` for as
    /// long as the next node exists, owns `level` and satisfies `advance`.
    ///
    /// On return the cursor still owns `level` (and therefore every level
    /// below it), and its successor on `level` is either `None` or the first
    /// node that stopped the walk.
    fn advance_while<F>(&self, mut cursor: Cursor, level: usize, mut advance: F) -> Cursor
    where
        F: FnMut(&T) -> bool,
    {
        while let Some(next) = self.link(cursor, level) {
            let node = &self.nodes[next];
            if node.level_count() <= level || !advance(&node.payload) {
                break;
            }
            cursor = Cursor::Node(next);
        }
        cursor
    }
}

impl<T, C, G> OrderedSkipList<T, C, G>
where
    C: Comparator<T>,
    G: LevelGenerator,
{
    /// Insert `item` into the list. Items equal to ones already present are
    /// kept, and placed before their equals.
    ///
    /// The node is fully allocated before any link is touched, so a failed
    /// allocation leaves the list exactly as it was. The same holds when the
    /// level generator draws a count outside `1..=max_height`.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, item: T) -> Result<(), Error> {
        let level_count = self.level_generator.random();
        if !(1..=self.max_height()).contains(&level_count) {
            return Err(Error::InvalidLevel {
                level: level_count,
                max_height: self.max_height(),
            });
        }

        self.nodes.try_reserve(1)?;
        let new_id = self.nodes.len();
        self.nodes.push(SkipNode::new(item, level_count)?);

        if level_count - 1 > self.top_level {
            debug!(
                from = self.top_level,
                to = level_count - 1,
                "raising skiplist top level"
            );
            self.top_level = level_count - 1;
        }

        let mut cursor = Cursor::Head;
        for level in (0..=self.top_level).rev() {
            cursor = self.advance_while(cursor, level, |candidate| {
                self.compare.compare(candidate, &self.nodes[new_id].payload) == Ordering::Less
            });

            if level < level_count {
                let successor = self.link(cursor, level);
                self.nodes[new_id].forward[level] = successor;
                self.set_link(cursor, level, Some(new_id));
            }
        }

        Ok(())
    }
}

impl<T, C, G> OrderedSkipList<T, C, G> {
    /// Find an item comparing equal to `key`. When several items are equal to
    /// `key`, the first one in order is returned.
    ///
    /// The key may be any borrowed form of the item the comparator accepts,
    /// e.g. a `&str` for a list of `String`s.
    #[instrument(level = "trace", skip_all)]
    pub fn search<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        if self.is_empty() {
            return None;
        }

        let mut cursor = Cursor::Head;
        for level in (0..=self.top_level).rev() {
            cursor = self.advance_while(cursor, level, |candidate| {
                self.compare.compare(Borrow::<Q>::borrow(candidate), key) == Ordering::Less
            });
        }

        // the cursor is the last node before `key`, so its successor is the
        // first candidate at or after it
        let candidate = &self.nodes[self.link(cursor, 0)?].payload;
        match self.compare.compare(Borrow::<Q>::borrow(candidate), key) {
            | Ordering::Equal => Some(candidate),
            | _ => None,
        }
    }

    /// Whether an item comparing equal to `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.search(key).is_some()
    }
}

// ///////////////////////////////////////////////
// Trait implementations
// ///////////////////////////////////////////////

impl<T, C, G> fmt::Debug for OrderedSkipList<T, C, G>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, C, G> IntoIterator for &'a OrderedSkipList<T, C, G> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C, G> IntoIterator for OrderedSkipList<T, C, G> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    /// Consumes the list, yielding the items in order.
    fn into_iter(mut self) -> IntoIter<T> {
        let order: Vec<NodeId> = self.chain().collect();
        let mut slots: Vec<Option<SkipNode<T>>> = self.nodes.drain(..).map(Some).collect();
        let items = order
            .into_iter()
            .filter_map(|id| slots[id].take().map(SkipNode::into_inner))
            .collect::<Vec<_>>();
        IntoIter {
            inner: items.into_iter(),
        }
    }
}

// ///////////////////////////////////////////////
// Iterators
// ///////////////////////////////////////////////

/// Borrowing iterator over an [`OrderedSkipList`], in order.
pub struct Iter<'a, T> {
    nodes: &'a [SkipNode<T>],
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.next(0);
        self.remaining -= 1;
        Some(&node.payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`OrderedSkipList`], in order.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
