use core::fmt;

/// Error returned by the fallible tree operations.
///
/// Whenever one of these is returned the tree is left exactly as it was
/// before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A node or a path stack could not be allocated.
    Alloc,
    /// The comparator reported that two payloads cannot be ordered.
    Incomparable,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Alloc => write!(f, "memory allocation failed"),
            TreeError::Incomparable => write!(f, "comparator could not order the payloads"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Error returned when a bulk insertion stops partway.
///
/// The tree keeps every insertion that was applied before the failing
/// element; nothing is rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkInsertError {
    /// Number of elements that added a new key before the failure.
    pub inserted: usize,
    /// Number of elements applied (new keys and replacements) before the failure.
    pub applied: usize,
    /// Why the failing element could not be inserted.
    pub source: TreeError,
}

impl fmt::Display for BulkInsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bulk insertion stopped after {} elements ({} new keys): {}",
            self.applied, self.inserted, self.source
        )
    }
}

impl std::error::Error for BulkInsertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// First red-black invariant breach found by [`RbTree::validate`].
///
/// [`RbTree::validate`]: crate::RbTree::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The two subtrees of a node have different black heights.
    Black,
    /// A red node has a red child.
    Red,
    /// The root is red.
    RedRoot,
    /// The stored black depth does not match the tree.
    Depth,
    /// A child is not strictly on the correct side of its parent.
    Order,
    /// The stored element count does not match the number of nodes.
    Count,
    /// The comparator could not order two payloads found in the tree.
    Incomparable,
}

impl Violation {
    /// Numeric code of the violation, stable across versions.
    pub fn code(&self) -> u8 {
        match self {
            Violation::Black => 1,
            Violation::Red => 2,
            Violation::RedRoot => 3,
            Violation::Depth => 4,
            Violation::Order => 5,
            Violation::Count => 6,
            Violation::Incomparable => 7,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Violation::Black => "black height differs between sibling subtrees",
            Violation::Red => "red node has a red child",
            Violation::RedRoot => "root node is red",
            Violation::Depth => "stored black depth is inconsistent with the tree",
            Violation::Order => "child is on the wrong side of its parent",
            Violation::Count => "stored element count is inconsistent with the tree",
            Violation::Incomparable => "comparator could not order two payloads",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Violation {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn violation_codes() {
        let all = [
            Violation::Black,
            Violation::Red,
            Violation::RedRoot,
            Violation::Depth,
            Violation::Order,
            Violation::Count,
            Violation::Incomparable,
        ];
        let codes: Vec<_> = all.iter().map(Violation::code).collect();
        assert_eq!(codes, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn bulk_error_source() {
        let err = BulkInsertError {
            inserted: 2,
            applied: 3,
            source: TreeError::Incomparable,
        };
        assert_eq!(
            err.to_string(),
            "bulk insertion stopped after 3 elements (2 new keys): comparator could not order the payloads"
        );
        let source = err.source().unwrap().downcast_ref::<TreeError>();
        assert_eq!(source, Some(&TreeError::Incomparable));
    }
}
