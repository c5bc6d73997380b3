use core::cmp::Ordering;
use core::fmt;
use std::marker::PhantomData;

use crate::compare::Comparator;
use crate::error::TreeError;
use crate::iter::Iter;
use crate::node::{Color, Dir, Node, RawNode};

/// An ordered container balanced as a red-black tree.
///
/// The payload `T` carries its own key: the registered comparator decides
/// what part of the payload is compared. Nodes don't store parent links, the
/// engine rebuilds the root-to-node path it needs on every operation.
///
/// `'a` bounds whatever the comparator borrows.
pub struct RbTree<'a, T> {
    pub(crate) root: Option<RawNode<T>>,
    /// Number of black nodes on every root-to-leaf path.
    pub(crate) black_depth: usize,
    pub(crate) len: usize,
    pub(crate) cmp: Comparator<'a, T>,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Drop for RbTree<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for RbTree<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct TreeDebug<'a, 'b, T>(&'a RbTree<'b, T>);

        impl<T> fmt::Debug for TreeDebug<'_, '_, T>
        where
            T: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut f = f.debug_list();
                let mut iter = self.0.iter();
                while let Some((node, _)) = iter.current() {
                    let color = unsafe { node.color() };
                    f.entry(&(unsafe { node.data() }, color));
                    iter.next();
                }
                f.finish()
            }
        }

        f.debug_struct("RbTree")
            .field("len", &self.len)
            .field("black_depth", &self.black_depth)
            .field("comparator", &self.cmp)
            .field("nodes", &TreeDebug(self))
            .finish()
    }
}

impl<'a, T> Default for RbTree<'a, T>
where
    T: Ord + 'a,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> RbTree<'a, T> {
    /// Creates an empty tree ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self
    where
        T: Ord + 'a,
    {
        Self::with_comparator(T::cmp)
    }

    /// Creates an empty tree ordered by a total order on the payloads.
    pub fn with_comparator<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self::from_comparator(Comparator::total(cmp))
    }

    /// Creates an empty tree ordered by a comparator that may refuse to order
    /// two payloads by returning `None`.
    ///
    /// Operations that hit such a pair fail with
    /// [`TreeError::Incomparable`] and leave the tree untouched.
    pub fn with_fallible_comparator<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Option<Ordering> + 'a,
    {
        Self::from_comparator(Comparator::fallible(cmp))
    }

    pub(crate) fn from_comparator(cmp: Comparator<'a, T>) -> Self {
        Self {
            root: None,
            black_depth: 0,
            len: 0,
            cmp,
            marker: PhantomData,
        }
    }

    /// Number of elements in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of black nodes on every path from the root to an empty slot.
    #[inline]
    pub fn black_depth(&self) -> usize {
        self.black_depth
    }

    /// Returns the payload comparing equal to `key`.
    pub fn find(&self, key: &T) -> Result<Option<&T>, TreeError> {
        Ok(self.find_raw(key)?.map(|node| unsafe { node.data() }))
    }

    /// Returns `true` if a payload comparing equal to `key` is stored.
    pub fn contains(&self, key: &T) -> Result<bool, TreeError> {
        Ok(self.find_raw(key)?.is_some())
    }

    fn find_raw(&self, key: &T) -> Result<Option<RawNode<T>>, TreeError> {
        let mut x = self.root;
        while let Some(node) = x {
            x = match self.cmp.compare(key, unsafe { node.data() })? {
                Ordering::Less => unsafe { node.child(Dir::Left) },
                Ordering::Equal => return Ok(Some(node)),
                Ordering::Greater => unsafe { node.child(Dir::Right) },
            };
        }

        Ok(None)
    }

    /// Smallest element, without building an iterator.
    pub fn min(&self) -> Option<&T> {
        self.extreme(Dir::Left)
    }

    /// Greatest element.
    pub fn max(&self) -> Option<&T> {
        self.extreme(Dir::Right)
    }

    fn extreme(&self, dir: Dir) -> Option<&T> {
        let mut x = self.root?;
        while let Some(next) = unsafe { x.child(dir) } {
            x = next;
        }
        Some(unsafe { x.data() })
    }

    /// Removes every element, dropping the payloads.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Removes every element, handing each payload to `dispose` exactly once.
    ///
    /// Payloads are released in post-order: both subtrees before their root.
    pub fn clear_with<F>(&mut self, mut dispose: F)
    where
        F: FnMut(T),
    {
        let root = self.root.take();
        self.black_depth = 0;
        self.len = 0;
        if let Some(root) = root {
            unsafe { destroy_subtree(root, &mut dispose) };
        }
    }

    /// Restores a black root after a fix-up left it red. This is the only way
    /// the black depth of the tree grows.
    pub(crate) fn paint_root_black(&mut self) {
        if let Some(mut root) = self.root {
            unsafe {
                if root.is_red() {
                    root.set_color(Color::Black);
                    self.black_depth += 1;
                    log::trace!("black depth grew to {}", self.black_depth);
                }
            }
        }
    }
}

/// Frees `node` and everything below it, children first.
///
/// Recursion depth is bounded by the tree height.
pub(crate) unsafe fn destroy_subtree<T, F>(node: RawNode<T>, dispose: &mut F)
where
    F: FnMut(T),
{
    unsafe {
        if let Some(l) = node.child(Dir::Left) {
            destroy_subtree(l, dispose);
        }
        if let Some(r) = node.child(Dir::Right) {
            destroy_subtree(r, dispose);
        }
        dispose(node.free());
    }
}

impl<'a, T> IntoIterator for &'a RbTree<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
