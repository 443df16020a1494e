use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

/// A copyable handle to a heap-allocated [`Node`]. All raw-pointer access in
/// the crate is confined to this type's methods.
///
/// The accessors return unbound lifetimes because the node outlives any one
/// borrow of a handle; callers must not hold a returned reference across the
/// node's removal.
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub(crate) fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of the heap, releasing its allocation.
    pub(crate) fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from `Box::leak` in `from_node`, and the
        // caller is unlinking the node, making this the sole reclaim.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Releases the node without reading its value.
    ///
    /// # Safety
    /// No copy of this handle may be dereferenced afterwards.
    pub(crate) unsafe fn drop_node(self) {
        // SAFETY: Per this function's contract, this is the final use of the
        // allocation created in `from_node`.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }

    pub(crate) fn value<'a>(&self) -> &'a T {
        // SAFETY: The node stays allocated for as long as a chain links to it.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub(crate) fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for `value`, and `&mut self` keeps this handle from
        // producing a second borrow.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for `value`.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for `value`; link surgery never holds two live mutable
        // borrows of the same node.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
