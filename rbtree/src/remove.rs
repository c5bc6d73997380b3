use core::mem;

use crate::error::TreeError;
use crate::node::{self, Color, Dir, RawNode};
use crate::path::{Path, Probe};
use crate::tree::RbTree;

impl<T> RbTree<'_, T> {
    /// Removes the element comparing equal to `key` and returns its payload.
    ///
    /// A missing key is not an error, `Ok(None)` is returned and nothing
    /// changes.
    pub fn remove(&mut self, key: &T) -> Result<Option<T>, TreeError> {
        let (mut path, probe) = self.probe(key)?;
        if probe != Probe::Found {
            return Ok(None);
        }

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
        unsafe {
            let Some(found) = path.top() else {
                unreachable!("a found key is always on the path")
            };
            let mut target = found.node;
            let mut node = target;
            let child = match target.child(Dir::Right) {
                // Remove 9: its successor 12 is the leftmost node of its right
                // subtree. 12 has no left child so it is easy to unlink. Swap
                // the payloads, the key order stays intact, and unlink the
                // successor instead.
                Some(mut next) => {
                    path.push(next, Dir::Right);
                    while let Some(left) = next.child(Dir::Left) {
                        next = left;
                        path.push(next, Dir::Left);
                    }
                    mem::swap(target.data_mut(), next.data_mut());
                    node = next;
                    node.child(Dir::Right)
                }
                // Remove 1, 6, 58: no right subtree, the left one (if any)
                // simply takes the place of the node.
                None => target.child(Dir::Left),
            };

            let Some(removed) = path.pop() else {
                unreachable!("the unlinked node is on the path")
            };
            match path.top() {
                None => {
                    // the root had at most one child, which is red
                    self.root = child;
                    self.black_depth -= 1;
                }
                Some(parent) => {
                    let mut parent = parent.node;
                    parent.set_child(removed.dir, child);
                    match child {
                        // A lone child is always red, painting it black makes
                        // up for the black node that was removed above it.
                        Some(mut child) if child.is_red() => child.set_color(Color::Black),
                        _ if !node.is_red() => self.fix_black_deficit(&mut path, removed.dir),
                        _ => {}
                    }
                }
            }

            self.paint_root_black();
            self.len -= 1;
            Ok(Some(node.free()))
        }
    }

    /// Resolves a black deficit in the `dir` subtree of the top of `path`,
    /// climbing towards the root until the deficit is absorbed.
    unsafe fn fix_black_deficit(&mut self, path: &mut Path<T>, mut dir: Dir) {
        unsafe {
            while let Some(elt) = path.pop() {
                let mut node = elt.node;
                let mut absorbed = true;

                let top = if node.is_red() {
                    // A red parent takes the black that went missing, its
                    // other side gives one away.
                    node.set_color(Color::Black);
                    paint_child_red(node, dir.flip())
                } else if node::is_red(node.child(dir.flip())) {
                    //        + p:b +                    + s:b +
                    //        |     |                    |     |
                    //       x:-  + s:r +     -->      + p:b + d
                    //            |     |              |     |
                    //            c     d             x:-    c
                    //
                    // The black children of the red sibling are one level too
                    // tall now that they hang from p, so the new sibling of x
                    // gives one black away.
                    let mut top = node.rotate(dir);
                    top.set_color(Color::Black);
                    top.set_child(dir, Some(paint_child_red(node, dir.flip())));
                    top
                } else {
                    // black sibling: if its children are black too the deficit
                    // moves up, otherwise a rotation brings up a red node we
                    // can paint black
                    let mut top = paint_child_red(node, dir.flip());
                    if top.is_red() {
                        top.set_color(Color::Black);
                    } else {
                        absorbed = false;
                    }
                    top
                };

                match path.top() {
                    Some(parent) => {
                        let mut parent = parent.node;
                        parent.set_child(elt.dir, Some(top));
                    }
                    None => {
                        self.root = Some(top);
                        if !absorbed {
                            // every path lost one black node
                            self.black_depth -= 1;
                            log::trace!("black depth shrank to {}", self.black_depth);
                        }
                        return;
                    }
                }
                if absorbed {
                    return;
                }
                dir = elt.dir;
            }
        }
    }
}

/// Paints the `side` child of `node` red, which takes one black node away from
/// every path through it, then repairs a resulting red-red pair by rotation.
///
/// Returns the root of the subtree, which is red only if a rotation happened.
unsafe fn paint_child_red<T>(mut node: RawNode<T>, side: Dir) -> RawNode<T> {
    unsafe {
        let Some(mut child) = node.child(side) else {
            debug_assert!(false, "a black deficit always has a sibling");
            return node;
        };
        child.set_color(Color::Red);
        if !node::is_red(child.child(side)) && node::is_red(child.child(side.flip())) {
            // make the red inner nephew an outer one
            child = child.rotate(side);
            node.set_child(side, Some(child));
        }
        match child.child(side) {
            Some(mut outer) if outer.is_red() => {
                outer.set_color(Color::Black);
                node.rotate(side.flip())
            }
            _ => node,
        }
    }
}
