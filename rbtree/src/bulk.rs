use crate::error::{BulkInsertError, TreeError};
use crate::node::{Dir, RawNode};
use crate::tree::{destroy_subtree, RbTree};

impl<T> RbTree<'_, T> {
    /// Inserts every element of `items`, returning how many of them added a
    /// new key. Replaced payloads are dropped.
    ///
    /// See [`bulk_insert_with`](Self::bulk_insert_with) for the failure
    /// contract.
    pub fn bulk_insert<I>(&mut self, items: I) -> Result<usize, BulkInsertError>
    where
        I: IntoIterator<Item = T>,
    {
        self.bulk_insert_with(items, drop)
    }

    /// Inserts every element of `items`, handing each replaced payload to
    /// `dispose`. Returns how many elements added a new key.
    ///
    /// The first failing insertion stops the batch. Everything applied before
    /// it stays in the tree, the failing element is dropped and the rest of
    /// `items` is not consumed.
    pub fn bulk_insert_with<I, F>(&mut self, items: I, mut dispose: F) -> Result<usize, BulkInsertError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T),
    {
        let mut inserted = 0;
        for (applied, item) in items.into_iter().enumerate() {
            match self.insert(item) {
                Ok(Some(old)) => dispose(old),
                Ok(None) => inserted += 1,
                Err(source) => {
                    log::debug!(
                        "bulk insertion stopped after {applied} elements ({inserted} new): {source}"
                    );
                    return Err(BulkInsertError {
                        inserted,
                        applied,
                        source,
                    });
                }
            }
        }

        Ok(inserted)
    }

    /// Builds a copy with the same shape and colors, every payload passed
    /// through `transform`.
    ///
    /// The copy owns its own nodes and shares nothing with `self` but the
    /// comparator.
    pub fn clone_with<F>(&self, mut transform: F) -> Result<Self, TreeError>
    where
        F: FnMut(&T) -> T,
    {
        let mut tree = Self::from_comparator(self.cmp.clone());
        if let Some(root) = self.root {
            tree.root = Some(unsafe { copy_subtree(root, &mut transform)? });
            tree.black_depth = self.black_depth;
            tree.len = self.len;
        }
        Ok(tree)
    }

    /// [`clone_with`](Self::clone_with) using `T::clone`.
    pub fn try_clone(&self) -> Result<Self, TreeError>
    where
        T: Clone,
    {
        self.clone_with(T::clone)
    }
}

/// Copies the subtree below `src`. If any allocation fails, the partial copy
/// is freed again.
unsafe fn copy_subtree<T, F>(src: RawNode<T>, transform: &mut F) -> Result<RawNode<T>, TreeError>
where
    F: FnMut(&T) -> T,
{
    unsafe {
        let mut dst = RawNode::new(transform(src.data()), src.color())?;
        for dir in [Dir::Left, Dir::Right] {
            if let Some(child) = src.child(dir) {
                match copy_subtree(child, transform) {
                    Ok(copy) => dst.set_child(dir, Some(copy)),
                    Err(err) => {
                        destroy_subtree(dst, &mut drop);
                        return Err(err);
                    }
                }
            }
        }
        Ok(dst)
    }
}
