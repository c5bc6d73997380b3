//! Hand-built trees for the balancing tests.

use log::LevelFilter;
use simplelog::{Config, TestLogger};

use crate::node::{Color, Dir, RawNode};
use crate::tree::RbTree;

pub(crate) fn init_logging() {
    // several tests may race to install the logger, only the first one wins
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn node(
    data: i32,
    color: Color,
    left: Option<RawNode<i32>>,
    right: Option<RawNode<i32>>,
) -> RawNode<i32> {
    let mut node = RawNode::new(data, color).unwrap();
    unsafe {
        node.set_child(Dir::Left, left);
        node.set_child(Dir::Right, right);
    }
    node
}

pub(crate) fn black(
    data: i32,
    left: Option<RawNode<i32>>,
    right: Option<RawNode<i32>>,
) -> RawNode<i32> {
    node(data, Color::Black, left, right)
}

pub(crate) fn red(
    data: i32,
    left: Option<RawNode<i32>>,
    right: Option<RawNode<i32>>,
) -> RawNode<i32> {
    node(data, Color::Red, left, right)
}

/// Wraps `root` into a tree. Nothing is checked, the tree takes ownership of
/// every node reachable from `root` and frees them on drop.
pub(crate) fn tree_from(root: RawNode<i32>, black_depth: usize, len: usize) -> RbTree<'static, i32> {
    let mut tree = RbTree::new();
    tree.root = Some(root);
    tree.black_depth = black_depth;
    tree.len = len;
    tree
}
