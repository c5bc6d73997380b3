use core::cmp::Ordering;
use core::fmt;
use std::rc::Rc;

use crate::error::TreeError;

/// Ordering strategy registered with a tree.
///
/// Both calling conventions are funneled through [`Comparator::compare`] so
/// the engine never has to care which one is active.
pub(crate) enum Comparator<'a, T> {
    /// A total order, can never fail.
    Total(Rc<dyn Fn(&T, &T) -> Ordering + 'a>),
    /// A partial order, `None` signals that the payloads cannot be ordered.
    Fallible(Rc<dyn Fn(&T, &T) -> Option<Ordering> + 'a>),
}

impl<'a, T> Comparator<'a, T> {
    pub(crate) fn total<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self::Total(Rc::new(f))
    }

    pub(crate) fn fallible<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Option<Ordering> + 'a,
    {
        Self::Fallible(Rc::new(f))
    }

    #[inline]
    pub(crate) fn compare(&self, a: &T, b: &T) -> Result<Ordering, TreeError> {
        match self {
            Self::Total(f) => Ok(f(a, b)),
            Self::Fallible(f) => f(a, b).ok_or(TreeError::Incomparable),
        }
    }
}

impl<T> Clone for Comparator<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Total(f) => Self::Total(Rc::clone(f)),
            Self::Fallible(f) => Self::Fallible(Rc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Comparator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total(_) => f.write_str("Total"),
            Self::Fallible(_) => f.write_str("Fallible"),
        }
    }
}
