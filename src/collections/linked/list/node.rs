use std::ptr::NonNull;

/// A link to a neighbouring node, in either direction. Links never own the node they point to,
/// the list owns every node and frees each one exactly once.
pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A copyable handle to a heap allocated node.
///
/// All field access goes through raw places rather than references to the whole node, so that a
/// `&mut T` handed out for one node's value never overlaps a read of its links.
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Moves `value` onto the heap as an unlinked node. The node is leaked until it is passed to
    /// [`free`](NodeRef::free).
    pub fn alloc(value: T, prev: Link<T>, next: Link<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(Node { value, prev, next }))))
    }

    /// Frees the node, returning its value.
    ///
    /// # Safety
    /// The node must have come from [`alloc`](NodeRef::alloc), must not have been freed already and
    /// must no longer be reachable through any link that will be followed again.
    pub unsafe fn free(self) -> T {
        // SAFETY: The node was allocated by Box in alloc and the caller guarantees that this is the
        // only remaining use of it.
        unsafe { Box::from_raw(self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must be live, and no mutable reference to its value may exist for `'a`.
    pub const unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Upheld by the caller.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must be live, and no other reference to its value may exist for `'a`.
    pub const unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must be live.
    pub const unsafe fn next(self) -> Link<T> {
        // SAFETY: Upheld by the caller. Link is Copy, so only the field itself is read.
        unsafe { (*self.0.as_ptr()).next }
    }

    /// # Safety
    /// The node must be live.
    pub const unsafe fn prev(self) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).prev }
    }

    /// # Safety
    /// The node must be live and its links must not be borrowed elsewhere.
    pub unsafe fn set_next(self, next: Link<T>) {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).next = next; }
    }

    /// # Safety
    /// The node must be live and its links must not be borrowed elsewhere.
    pub unsafe fn set_prev(self, prev: Link<T>) {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).prev = prev; }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> std::fmt::Debug for NodeRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NodeRef").field(&self.0).finish()
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
