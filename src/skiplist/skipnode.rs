use crate::errs::Error;

/// Position of a node inside the list's arena.
pub(crate) type NodeId = usize;

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// SkipNodes make up the SkipList. The list owns every node through its
/// arena, and a node refers to its successors by [`NodeId`].
///
/// The node occupies `forward.len()` levels, decided once when it is created,
/// and `forward[i]` is the next node on level `i` (`None` at the end of that
/// level). The vector is never resized, so it must never be indexed at a level
/// the node doesn't own.
pub(crate) struct SkipNode<T> {
    pub(crate) payload: T,
    pub(crate) forward: Vec<Option<NodeId>>,
}

impl<T> SkipNode<T> {
    /// Create a node spanning `level_count` levels with every link unset.
    ///
    /// The link storage is reserved up front so an allocation failure is
    /// reported before the node is anywhere near the list.
    pub(crate) fn new(payload: T, level_count: usize) -> Result<Self, Error> {
        debug_assert!(level_count >= 1);
        let mut forward = Vec::new();
        forward.try_reserve_exact(level_count)?;
        forward.resize(level_count, None);
        Ok(SkipNode { payload, forward })
    }

    #[inline]
    pub(crate) fn level_count(&self) -> usize {
        self.forward.len()
    }

    /// The next node on `level`, or `None` when the node doesn't reach that
    /// level or is the last one on it.
    #[inline]
    pub(crate) fn next(&self, level: usize) -> Option<NodeId> {
        self.forward.get(level).copied().flatten()
    }

    pub(crate) fn into_inner(self) -> T {
        self.payload
    }
}
