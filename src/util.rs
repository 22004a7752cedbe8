use generational_arena::Index;

/// Where a node hangs in the tree. Deletion relinks whatever sits in this slot instead of
/// re-deriving the side by comparing the node against its parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The node is the root of the tree.
    Root,
    /// The node is the left child of the node at this index.
    Left(Index),
    /// The node is the right child of the node at this index.
    Right(Index),
}

impl Slot {
    /// The parent owning this slot, if any.
    pub(crate) fn parent(self) -> Option<Index> {
        match self {
            Slot::Root => None,
            Slot::Left(parent) | Slot::Right(parent) => Some(parent),
        }
    }
}
