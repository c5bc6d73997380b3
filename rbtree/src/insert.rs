use core::mem;

use crate::error::TreeError;
use crate::node::{Color, RawNode};
use crate::path::{Path, Probe};
use crate::tree::RbTree;

impl<T> RbTree<'_, T> {
    /// Inserts `data`, returning the payload it replaced if the key was
    /// already present.
    ///
    /// On error the tree is unchanged and `data` is dropped.
    pub fn insert(&mut self, data: T) -> Result<Option<T>, TreeError> {
        let (mut path, probe) = self.probe(&data)?;
        match probe {
            Probe::Empty => {
                self.root = Some(RawNode::new(data, Color::Black)?);
                self.black_depth = 1;
                self.len = 1;
                Ok(None)
            }
            Probe::Found => {
                let Some(found) = path.top() else {
                    unreachable!("a found key is always on the path")
                };
                let mut node = found.node;
                Ok(Some(mem::replace(unsafe { node.data_mut() }, data)))
            }
            Probe::Vacant(dir) => {
                let Some(parent) = path.top() else {
                    unreachable!("a vacant slot always has a parent")
                };
                // allocate before touching any link so a failure leaves the tree as it was
                let new_node = RawNode::new(data, Color::Red)?;
                let mut parent = parent.node;
                unsafe {
                    parent.set_child(dir, Some(new_node));
                    path.push(new_node, dir);
                    if parent.is_red() {
                        self.fix_red_violation(&path);
                    }
                }
                self.len += 1;
                self.paint_root_black();
                Ok(None)
            }
        }
    }

    /// Restores the red-black properties after a red node was attached under
    /// a red parent. The top of `path` is the new node.
    unsafe fn fix_red_violation(&mut self, path: &Path<T>) {
        // `i` is the depth of the red node whose parent is also red. That
        // parent cannot be the root, so a grand parent always exists.
        let mut i = path.len() - 1;
        unsafe {
            loop {
                let parent = path.get(i - 1);
                let mut grand_parent = path.get(i - 2).node;
                debug_assert!(!grand_parent.is_red());
                let uncle = grand_parent.child(parent.dir.flip());

                match uncle {
                    Some(mut uncle) if uncle.is_red() => {
                        //     +--- gp:b ---+               +--- gp:r ---+
                        //     |            |               |            |
                        //  + p:r +      + u:r +   -->   + p:b +      + u:b +
                        //  |     |      |     |         |     |      |     |
                        // n:r   a:b    b:b   c:b       n:r   a:b    b:b   c:b
                        //
                        // Black heights below gp are unchanged, but gp may now
                        // be a red child of a red node, two levels up.
                        let mut p = parent.node;
                        p.set_color(Color::Black);
                        uncle.set_color(Color::Black);
                        grand_parent.set_color(Color::Red);

                        i -= 2;
                        if i == 0 || !path.get(i - 1).node.is_red() {
                            break;
                        }
                    }
                    _ => {
                        // The uncle is black: rotate at the grand parent. An
                        // inner grandchild first needs to become an outer one.
                        //
                        //       + gp:b +                  + p:b +
                        //       |      |                  |     |
                        //    + p:r +   u:b     -->       n:r  + gp:r +
                        //    |     |                          |      |
                        //   n:r    a                          a     u:b
                        let mut p = parent.node;
                        if path.get(i).dir != parent.dir {
                            p = p.rotate(parent.dir);
                            grand_parent.set_child(parent.dir, Some(p));
                        }
                        let mut top = grand_parent.rotate(parent.dir.flip());
                        top.set_color(Color::Black);
                        grand_parent.set_color(Color::Red);

                        if i == 2 {
                            self.root = Some(top);
                        } else {
                            let mut above = path.get(i - 3).node;
                            above.set_child(path.get(i - 2).dir, Some(top));
                        }
                        break;
                    }
                }
            }
        }
    }
}
