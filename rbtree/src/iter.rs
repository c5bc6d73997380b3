use core::iter::FusedIterator;
use std::marker::PhantomData;

use crate::error::TreeError;
use crate::node::{Dir, RawNode};
use crate::path::{Path, Probe};
use crate::tree::RbTree;

/// In-order iterator over the payloads of an [`RbTree`].
///
/// The iterator keeps the path from the root to its current node, together
/// with the side every node was reached through. That is all it needs to
/// find the in-order successor: nodes have no parent links and nothing is
/// walked recursively. It borrows the tree, so the tree cannot be modified
/// while the iterator is alive.
pub struct Iter<'a, T> {
    path: Path<T>,
    marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    fn new(path: Path<T>) -> Self {
        Self {
            path,
            marker: PhantomData,
        }
    }

    /// Pushes `node` and then its leftmost descendants.
    fn descend_left(&mut self, mut node: RawNode<T>, dir: Dir) {
        self.path.push(node, dir);
        while let Some(left) = unsafe { node.child(Dir::Left) } {
            node = left;
            self.path.push(node, Dir::Left);
        }
    }

    /// The node the iterator will yield next, with its depth below the root.
    pub(crate) fn current(&self) -> Option<(RawNode<T>, usize)> {
        let top = self.path.top()?;
        Some((top.node, self.path.len() - 1))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.path.top()?.node;
        let data = unsafe { node.data() };

        //       +---------- 34 ---------+
        //       |                       |
        // +---- 2 ----+                 58 ----+
        // |           |                        |
        // 1      +--- 9 ----+              +-- 77 --+
        //        |          |              |        |
        //     +- 6       +- 20 -+      +- 71 -+     82
        //     |          |      |      |      |
        //     5         12 -+   24    67      75
        //                   |
        //                   13
        match unsafe { node.child(Dir::Right) } {
            // 9 -> 12, 2 -> 5, 58 -> 67: the successor is the minimum of the
            // right subtree.
            Some(right) => self.descend_left(right, Dir::Right),
            // 6 -> 9, 13 -> 20, 24 -> 34: climb while we come back from a
            // right child. The first node we come back to from its left side
            // is the successor. Climbing out of the root ends the iteration.
            None => {
                while let Some(elt) = self.path.pop() {
                    if elt.dir == Dir::Left {
                        break;
                    }
                }
            }
        }

        Some(data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> RbTree<'_, T> {
    /// Returns an iterator positioned at the smallest element.
    ///
    /// Fails only if the iterator's path stack cannot be allocated.
    pub fn first(&self) -> Result<Iter<'_, T>, TreeError> {
        let mut iter = Iter::new(Path::try_new(self.black_depth)?);
        if let Some(root) = self.root {
            iter.descend_left(root, Dir::Left);
        }
        Ok(iter)
    }

    /// Returns an iterator over the elements in key order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter::new(Path::new(self.black_depth));
        if let Some(root) = self.root {
            iter.descend_left(root, Dir::Left);
        }
        iter
    }

    /// Returns an iterator positioned at `key`, or at the smallest element
    /// greater than `key` if it is not in the tree.
    pub fn search(&self, key: &T) -> Result<Iter<'_, T>, TreeError> {
        let (path, probe) = self.probe(key)?;
        let mut iter = Iter::new(path);
        if let Probe::Vacant(Dir::Right) = probe {
            // the probe stopped at the greatest element smaller than `key`
            iter.next();
        }
        Ok(iter)
    }
}
