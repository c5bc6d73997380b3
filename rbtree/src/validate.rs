use core::cmp::Ordering;

use crate::error::Violation;
use crate::node::{Dir, RawNode};
use crate::tree::RbTree;

/// Deeper than any red-black tree that fits in memory. Only a corrupted tree
/// (a cycle, say) can reach it.
const MAX_HEIGHT: usize = 2 * usize::BITS as usize;

impl<T> RbTree<'_, T> {
    /// Checks every red-black invariant and returns the first breach.
    ///
    /// Nodes are visited in pre-order. Red-red and ordering breaches are
    /// reported before descending into a child, a black height mismatch only
    /// once both subtrees passed. The stored count is checked last.
    pub fn validate(&self) -> Result<(), Violation> {
        let result = self.check();
        if let Err(violation) = result {
            log::debug!("red-black tree failed validation: {violation}");
        }
        result
    }

    fn check(&self) -> Result<(), Violation> {
        let root = match (self.root, self.black_depth) {
            (None, 0) => {
                return match self.len {
                    0 => Ok(()),
                    _ => Err(Violation::Count),
                }
            }
            (None, _) | (Some(_), 0) => return Err(Violation::Depth),
            (Some(root), _) => root,
        };
        if unsafe { root.is_red() } {
            return Err(Violation::RedRoot);
        }

        let mut total = 0;
        let height = self.check_node(root, 1, &mut total)?;
        if height != self.black_depth {
            return Err(Violation::Depth);
        }
        if total != self.len {
            return Err(Violation::Count);
        }
        Ok(())
    }

    /// Returns the black height of the subtree, counting `node` itself.
    fn check_node(
        &self,
        node: RawNode<T>,
        depth: usize,
        total: &mut usize,
    ) -> Result<usize, Violation> {
        if depth > MAX_HEIGHT {
            return Err(Violation::Depth);
        }
        *total += 1;

        let mut heights = [0; 2];
        for (height, dir) in heights.iter_mut().zip([Dir::Left, Dir::Right]) {
            let Some(child) = (unsafe { node.child(dir) }) else {
                continue;
            };
            unsafe {
                if node.is_red() && child.is_red() {
                    return Err(Violation::Red);
                }
                let expected = match dir {
                    Dir::Left => Ordering::Less,
                    Dir::Right => Ordering::Greater,
                };
                let ord = self
                    .cmp
                    .compare(child.data(), node.data())
                    .map_err(|_| Violation::Incomparable)?;
                if ord != expected {
                    return Err(Violation::Order);
                }
            }
            *height = self.check_node(child, depth + 1, total)?;
        }

        if heights[0] != heights[1] {
            return Err(Violation::Black);
        }
        Ok(heights[0] + usize::from(unsafe { !node.is_red() }))
    }
}
