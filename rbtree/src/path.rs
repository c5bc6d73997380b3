use core::cmp::Ordering;

use crate::error::TreeError;
use crate::node::{Dir, RawNode};
use crate::tree::RbTree;

/// One level of a root-to-node path: the node and the side of its parent it
/// was reached through. The root is recorded as reached through the left.
#[derive(Debug)]
pub(crate) struct PathElt<T> {
    pub(crate) node: RawNode<T>,
    pub(crate) dir: Dir,
}

impl<T> Clone for PathElt<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PathElt<T> {}

/// Bounded stack of non-owning node references from the root downwards.
///
/// A red-black tree with black depth `b` is at most `2 * b` nodes high, so
/// `1 + 2 * b` entries always suffice for a probe followed by one insertion
/// or by a walk down to an in-order successor.
#[derive(Debug)]
pub(crate) struct Path<T> {
    elts: Vec<PathElt<T>>,
    bound: usize,
}

impl<T> Path<T> {
    #[inline]
    fn bound_for(black_depth: usize) -> usize {
        1 + 2 * black_depth
    }

    /// Allocates a path for a tree with the given black depth, aborting on
    /// allocation failure like the standard collections do.
    pub(crate) fn new(black_depth: usize) -> Self {
        let bound = Self::bound_for(black_depth);
        Self {
            elts: Vec::with_capacity(bound),
            bound,
        }
    }

    pub(crate) fn try_new(black_depth: usize) -> Result<Self, TreeError> {
        let bound = Self::bound_for(black_depth);
        let mut elts = Vec::new();
        elts.try_reserve_exact(bound)
            .map_err(|_| TreeError::Alloc)?;
        Ok(Self { elts, bound })
    }

    #[inline]
    pub(crate) fn bound(&self) -> usize {
        self.bound
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.elts.len()
    }

    #[inline]
    pub(crate) fn push(&mut self, node: RawNode<T>, dir: Dir) {
        debug_assert!(
            self.elts.len() < self.bound,
            "path is deeper than a red-black tree can be"
        );
        self.elts.push(PathElt { node, dir });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<PathElt<T>> {
        self.elts.pop()
    }

    #[inline]
    pub(crate) fn top(&self) -> Option<PathElt<T>> {
        self.elts.last().copied()
    }

    #[inline]
    pub(crate) fn get(&self, depth: usize) -> PathElt<T> {
        self.elts[depth]
    }
}

/// Where a probed key lives, or would live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The tree is empty, the path is too.
    Empty,
    /// The top of the path holds the key.
    Found,
    /// The key would become the `Dir` child of the top of the path.
    Vacant(Dir),
}

impl<T> RbTree<'_, T> {
    /// Walks from the root towards `key`, recording every node visited.
    ///
    /// Nothing is mutated, and if the comparator fails the walk is abandoned.
    pub(crate) fn probe(&self, key: &T) -> Result<(Path<T>, Probe), TreeError> {
        let mut path = Path::try_new(self.black_depth)?;
        let Some(mut node) = self.root else {
            return Ok((path, Probe::Empty));
        };

        let mut dir = Dir::Left;
        for _ in 0..path.bound() {
            path.push(node, dir);
            dir = match self.cmp.compare(key, unsafe { node.data() })? {
                Ordering::Equal => return Ok((path, Probe::Found)),
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
            };
            match unsafe { node.child(dir) } {
                Some(child) => node = child,
                None => return Ok((path, Probe::Vacant(dir))),
            }
        }

        unreachable!("tree is deeper than its black depth allows")
    }
}
