use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate_alloc::alloc;
use crate::error::TreeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`].
    ///
    /// [`Red`]: Color::Red
    #[must_use]
    pub(crate) fn is_red(&self) -> bool {
        matches!(self, Self::Red)
    }
}

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub(crate) fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) child: [Option<RawNode<T>>; 2],
    pub(crate) color: Color,
}

/// Wrapper around `NonNull<Node<T>>` to provide convenient methods in order
/// to make the balancing algorithms readable.
///
/// Nodes never know their parent. Whoever needs the ancestors of a node
/// carries them in a [`Path`](crate::path::Path).
#[derive(Debug)]
#[repr(transparent)]
pub(crate) struct RawNode<T> {
    ptr: NonNull<Node<T>>,
}

impl<T> Clone for RawNode<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawNode<T> {}

impl<T> PartialEq for RawNode<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T> Eq for RawNode<T> {}

impl<T> RawNode<T> {
    /// Allocates a childless node.
    ///
    /// Allocation failure is reported instead of aborting, so the callers can
    /// bail out before touching any link.
    pub(crate) fn new(data: T, color: Color) -> Result<Self, TreeError> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: `Node<T>` always holds two child links and a color, so the
        // layout is never zero sized.
        let raw = unsafe { alloc::alloc(layout) }.cast::<Node<T>>();
        let ptr = NonNull::new(raw).ok_or(TreeError::Alloc)?;
        // SAFETY: `ptr` is freshly allocated for exactly one `Node<T>`.
        unsafe {
            ptr.as_ptr().write(Node {
                data,
                child: [None, None],
                color,
            })
        };
        Ok(Self { ptr })
    }

    /// Frees the node and hands back its payload.
    ///
    /// # Safety
    ///
    /// The node must be unlinked from the tree and must not be used again.
    pub(crate) unsafe fn free(self) -> T {
        // SAFETY: the node was allocated by the global allocator with the
        // layout of `Node<T>`, which is the same layout `Box` uses.
        let node = unsafe { Box::from_raw(self.ptr.as_ptr()) };
        node.data
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut Node<T> {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) unsafe fn data<'a>(&self) -> &'a T {
        unsafe { &(*self.as_ptr()).data }
    }

    #[inline]
    pub(crate) unsafe fn data_mut<'a>(&mut self) -> &'a mut T {
        unsafe { &mut (*self.as_ptr()).data }
    }

    #[inline]
    pub(crate) unsafe fn child(&self, dir: Dir) -> Option<RawNode<T>> {
        unsafe { (*self.as_ptr()).child[dir.index()] }
    }

    #[inline]
    pub(crate) unsafe fn set_child(&mut self, dir: Dir, new_child: Option<RawNode<T>>) {
        unsafe { (*self.as_ptr()).child[dir.index()] = new_child }
    }

    #[inline]
    pub(crate) unsafe fn color(&self) -> Color {
        unsafe { (*self.as_ptr()).color }
    }

    #[inline]
    pub(crate) unsafe fn set_color(&mut self, new_color: Color) {
        unsafe { (*self.as_ptr()).color = new_color }
    }

    #[inline]
    pub(crate) unsafe fn is_red(&self) -> bool {
        unsafe { self.color().is_red() }
    }

    /// Rotates the subtree rooted at `self` so that `self` moves down into its
    /// `dir` side and its child on the other side takes its place. Returns the
    /// new subtree root, the caller must relink it into the parent.
    ///
    /// ```text
    ///  rotate(node, Left)             rotate(node, Right)
    ///
    ///   node              next              node           next
    ///  /    \            /    \            /    \         /    \
    /// a     next  -->  node    c        next     c  -->  a     node
    ///      /    \     /    \           /    \                 /    \
    ///     b      c   a      b         a      b               b      c
    /// ```
    pub(crate) unsafe fn rotate(mut self, dir: Dir) -> RawNode<T> {
        unsafe {
            let Some(mut next) = self.child(dir.flip()) else {
                debug_assert!(false, "rotation needs a child on the rising side");
                return self;
            };
            self.set_child(dir.flip(), next.child(dir));
            next.set_child(dir, Some(self));
            next
        }
    }
}

/// Missing children count as black.
#[inline]
pub(crate) unsafe fn is_red<T>(node: Option<RawNode<T>>) -> bool {
    match node {
        Some(node) => unsafe { node.is_red() },
        None => false,
    }
}
