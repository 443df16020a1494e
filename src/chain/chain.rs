use std::hash::{Hash, Hasher};
use std::mem;

use derive_more::IsVariant;

use super::{Length, Node, NodePtr, ONE};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::Throw;

/// Storage shared by every container in this crate: a chain of singly-linked
/// heap nodes with a tracked tail.
///
/// The variants are the two logical states of a container. Code holding a
/// `Full` value may rely on `head`, `tail` and `len` describing at least one
/// node, which keeps the empty-container edge cases in match arms instead of
/// runtime checks.
#[derive(PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum ChainState<T> {
    Empty,
    Full(ChainContents<T>),
}

use ChainState::*;

pub(crate) struct ChainContents<T> {
    pub(crate) len: Length,
    pub(crate) head: NodePtr<T>,
    pub(crate) tail: NodePtr<T>,
}

impl<T> ChainState<T> {
    pub(crate) const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    pub(crate) fn single(value: T) -> ChainState<T> {
        Full(ChainContents::wrap_one(value))
    }

    pub(crate) fn push_front(&mut self, value: T) {
        match self {
            Empty => *self = ChainState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    pub(crate) fn push_back(&mut self, value: T) {
        match self {
            Empty => *self = ChainState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        match self {
            Empty => None,
            Full(ChainContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The chain still holds `new_len >= 1` nodes,
                        // so the removed head had a successor.
                        *head = unsafe { node.next.unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => *self = Empty,
                }

                Some(node.value)
            },
        }
    }

    pub(crate) fn front(&self) -> Option<&T> {
        match self {
            Empty => None,
            Full(ChainContents { head, .. }) => Some(head.value()),
        }
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut T> {
        match self {
            Empty => None,
            Full(ChainContents { head, .. }) => Some(head.value_mut()),
        }
    }

    pub(crate) fn back(&self) -> Option<&T> {
        match self {
            Empty => None,
            Full(ChainContents { tail, .. }) => Some(tail.value()),
        }
    }

    pub(crate) fn back_mut(&mut self) -> Option<&mut T> {
        match self {
            Empty => None,
            Full(ChainContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Inserts `value` so that it ends up at `index`. `index == len` appends.
    /// On failure nothing is linked in.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len() {
            self.push_back(value);
            return Ok(());
        }

        let contents = self.checked_contents_mut(index)?;
        let prev = contents.seek(index - 1);

        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: *prev.next(),
        });
        *prev.next_mut() = Some(node);

        Ok(())
    }

    /// Unlinks and returns the node at `index`, relinking its predecessor to
    /// its successor. On failure the chain is untouched.
    pub(crate) fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index == 0 {
            return match self.pop_front() {
                Some(value) => Ok(value),
                None => Err(IndexOutOfBounds { index: 0, len: 0 }),
            };
        }

        let contents = self.checked_contents_mut(index)?;
        let prev = contents.seek(index - 1);

        // SAFETY: `index` is in bounds and nonzero, so the node before it has
        // a successor.
        let node = unsafe { prev.next().unwrap_unchecked() }.take_node();
        *prev.next_mut() = node.next;
        if node.next.is_none() {
            contents.tail = prev;
        }
        // SAFETY: At least two nodes were present because `index >= 1`.
        contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

        Ok(node.value)
    }

    /// Releases every node and resets to `Empty`.
    pub(crate) fn clear(&mut self) {
        if let Full(ChainContents { head, .. }) = mem::replace(self, Empty) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: Each node is reached exactly once, and nothing can
                // observe the chain again after the state was reset.
                unsafe { ptr.drop_node() };
            }
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents(index)?.seek(index))
    }

    pub(crate) fn checked_contents(
        &self,
        index: usize,
    ) -> Result<&ChainContents<T>, IndexOutOfBounds> {
        match self {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) fn checked_contents_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ChainContents<T>, IndexOutOfBounds> {
        match self {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the chain and asserts the structural invariants: `len` counts
    /// exactly the reachable nodes and `tail` is the last of them.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self {
            Empty => {},
            Full(ChainContents { len, head, tail }) => {
                let mut curr = *head;
                let mut reached = 1;
                while let Some(next) = curr.next() {
                    curr = *next;
                    reached += 1;
                }
                assert_eq!(
                    reached,
                    len.get(),
                    "len must count exactly the nodes reachable from head"
                );
                assert!(curr == *tail, "tail must point at the last reachable node");
            },
        }
    }
}

impl<T> ChainContents<T> {
    pub(crate) fn wrap_one(value: T) -> ChainContents<T> {
        let node = NodePtr::from_node(Node { value, next: None });

        ChainContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub(crate) fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        self.head = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });
    }

    pub(crate) fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node { value, next: None });
        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    /// Returns the node at `index`. The caller must have bounds-checked.
    #[allow(clippy::unwrap_used)]
    pub(crate) fn seek(&self, index: usize) -> NodePtr<T> {
        if index == self.last_index() {
            return self.tail;
        }

        let mut node = self.head;
        for _ in 0..index {
            // UNWRAP: The caller promises `index` is in bounds.
            node = node.next().unwrap();
        }
        node
    }

    pub(crate) const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> Default for ChainState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T: PartialEq> PartialEq for ChainContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut a = Some(self.head);
        let mut b = Some(other.head);
        while let (Some(node_a), Some(node_b)) = (a, b) {
            if node_a.value() != node_b.value() {
                return false;
            }
            a = *node_a.next();
            b = *node_b.next();
        }
        true
    }
}

impl<T: Eq> Eq for ChainContents<T> {}

impl<T: Hash> Hash for ChainContents<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Length-prefixing keeps chains of different lengths from hashing to
        // the same prefix sequence.
        self.len.hash(state);

        let mut curr = Some(self.head);
        while let Some(node) = curr {
            node.value().hash(state);
            curr = *node.next();
        }
    }
}

// Both clones alias the same nodes. This exists for the borrowing iterators,
// which walk a shallow copy and never free anything; containers deliberately
// do not implement Clone on top of it.
impl<T> Clone for ChainContents<T> {
    fn clone(&self) -> Self {
        ChainContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ChainState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}
