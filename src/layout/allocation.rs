//! Split share computation
//!
//! Pure functions of the current visibility flags. Nothing here depends on
//! previous allocations.

use crate::constants::{PRIMARY_SHARE, STACK_SHARE};
use serde::Serialize;

/// Identifies one of the two resizable splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitId {
    /// Primary feed | secondary stack
    Horizontal,
    /// Secondary feeds, top to bottom
    Stack,
}

/// Relative sizes of sibling panels in one split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SplitShares(Vec<u32>);

impl SplitShares {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl PartialEq<[u32]> for SplitShares {
    fn eq(&self, other: &[u32]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[u32; N]> for SplitShares {
    fn eq(&self, other: &[u32; N]) -> bool {
        self.0 == other
    }
}

/// Full layout derived from feed visibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutAllocation {
    /// Visibility of every feed, in declaration order
    pub feeds: Vec<bool>,
    pub primary_visible: bool,
    /// The secondary container is shown iff any secondary feed is
    pub stack_visible: bool,
    /// `(primary, stack)`
    pub horizontal: SplitShares,
    /// One share per secondary feed
    pub stack: SplitShares,
}

impl LayoutAllocation {
    pub fn shares(&self, split: SplitId) -> &SplitShares {
        match split {
            SplitId::Horizontal => &self.horizontal,
            SplitId::Stack => &self.stack,
        }
    }
}

/// Shares between the primary feed and the secondary stack.
pub fn horizontal_shares(primary_visible: bool, stack_visible: bool) -> SplitShares {
    let pair = match (primary_visible, stack_visible) {
        (true, true) => [PRIMARY_SHARE, STACK_SHARE],
        (true, false) => [1, 0],
        (false, true) => [0, 1],
        (false, false) => [1, 1],
    };
    SplitShares(pair.to_vec())
}

/// Shares among the secondary feeds: 1 per visible feed, 0 per hidden one,
/// or an equal split when none is visible.
pub fn stack_shares(visible: &[bool]) -> SplitShares {
    if visible.iter().any(|&v| v) {
        SplitShares(visible.iter().map(|&v| u32::from(v)).collect())
    } else {
        SplitShares(vec![1; visible.len()])
    }
}

/// Compute the allocation for the primary flag and the secondary flags.
pub fn allocate(feeds: Vec<bool>, primary_visible: bool, secondary: &[bool]) -> LayoutAllocation {
    let stack_visible = secondary.iter().any(|&v| v);
    LayoutAllocation {
        feeds,
        primary_visible,
        stack_visible,
        horizontal: horizontal_shares(primary_visible, stack_visible),
        stack: stack_shares(secondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(horizontal_shares(true, true), [2, 1]);
        assert_eq!(horizontal_shares(true, false), [1, 0]);
        assert_eq!(horizontal_shares(false, true), [0, 1]);
        assert_eq!(horizontal_shares(false, false), [1, 1]);
    }

    #[test]
    fn test_stack_rule_two_feeds() {
        assert_eq!(stack_shares(&[true, true]), [1, 1]);
        assert_eq!(stack_shares(&[true, false]), [1, 0]);
        assert_eq!(stack_shares(&[false, true]), [0, 1]);
        assert_eq!(stack_shares(&[false, false]), [1, 1]);
    }

    #[test]
    fn test_stack_rule_no_secondaries() {
        let shares = stack_shares(&[]);
        assert!(shares.as_slice().is_empty());
    }

    #[test]
    fn test_allocate_all_hidden() {
        let alloc = allocate(vec![false, false, false], false, &[false, false]);
        assert!(!alloc.stack_visible);
        assert_eq!(alloc.horizontal, [1, 1]);
        assert_eq!(alloc.stack, [1, 1]);
    }

    #[test]
    fn test_shares_by_split_id() {
        let alloc = allocate(vec![true, true, false], true, &[true, false]);
        assert_eq!(*alloc.shares(SplitId::Horizontal), [2, 1]);
        assert_eq!(*alloc.shares(SplitId::Stack), [1, 0]);
    }
}
