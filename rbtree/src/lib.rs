//! Ordered container balanced as a red-black tree.
//!
//! Nodes own their two children and nothing else: there are no parent links.
//! Every operation that needs the ancestors of a node rebuilds the
//! root-to-node path into a bounded stack, which is also what the in-order
//! [`Iter`] walks with.
//!
//! ```
//! use rbtree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [8, 6, 10, 4, 2] {
//!     tree.insert(key).unwrap();
//! }
//! assert_eq!(tree.insert(4), Ok(Some(4)));
//! assert_eq!(tree.remove(&6), Ok(Some(6)));
//! assert_eq!(tree.validate(), Ok(()));
//!
//! let keys: Vec<_> = tree.search(&5).unwrap().copied().collect();
//! assert_eq!(keys, [8, 10]);
//! ```
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc as crate_alloc;

mod bulk;
mod compare;
mod dump;
mod error;
mod insert;
mod iter;
mod node;
mod path;
mod remove;
#[cfg(test)]
mod test_util;
mod tree;
mod validate;

pub use error::{BulkInsertError, TreeError, Violation};
pub use iter::Iter;
pub use tree::RbTree;
