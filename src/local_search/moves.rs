//! Neighborhood selection mask and move counters.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Bitmask selecting which exchange neighborhoods the local search runs.
///
/// # Examples
///
/// ```
/// use u_covering::local_search::MoveSet;
///
/// let moves = MoveSet::DROP | MoveSet::SWAP_TWO_FOR_ONE;
/// assert!(moves.contains(MoveSet::DROP));
/// assert!(!moves.contains(MoveSet::SWAP_ONE_FOR_ONE));
/// assert_eq!(MoveSet::default(), MoveSet::ALL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSet(u8);

impl MoveSet {
    /// No neighborhood.
    pub const NONE: Self = Self(0);
    /// Drop (1-for-0): remove redundant items.
    pub const DROP: Self = Self(1 << 0);
    /// Swap one selected item for one cheaper unselected item.
    pub const SWAP_ONE_FOR_ONE: Self = Self(1 << 1);
    /// Swap two selected items for one cheaper unselected item.
    pub const SWAP_TWO_FOR_ONE: Self = Self(1 << 2);
    /// All three neighborhoods.
    pub const ALL: Self = Self(0b111);

    /// Creates a mask from raw bits; unknown bits are discarded.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every neighborhood in `other` is enabled.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no neighborhood is enabled.
    pub const fn is_empty(self) -> bool {
        self.0 & Self::ALL.0 == 0
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for MoveSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Number of improving moves applied per neighborhood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveStats {
    /// Items removed by the drop pass.
    pub dropped: usize,
    /// One-for-one swaps applied.
    pub one_for_one: usize,
    /// Two-for-one swaps applied.
    pub two_for_one: usize,
}

impl MoveStats {
    /// Total moves applied.
    pub fn total(&self) -> usize {
        self.dropped + self.one_for_one + self.two_for_one
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_discards_unknown() {
        assert_eq!(MoveSet::from_bits(0xFF), MoveSet::ALL);
        assert_eq!(MoveSet::from_bits(0b010), MoveSet::SWAP_ONE_FOR_ONE);
        assert!(MoveSet::from_bits(0b1000).is_empty());
    }

    #[test]
    fn test_union() {
        let mut moves = MoveSet::NONE;
        assert!(moves.is_empty());
        moves |= MoveSet::DROP;
        moves |= MoveSet::SWAP_ONE_FOR_ONE;
        assert!(moves.contains(MoveSet::DROP | MoveSet::SWAP_ONE_FOR_ONE));
        assert!(!moves.contains(MoveSet::ALL));
        assert_eq!(moves.bits(), 0b011);
    }

    #[test]
    fn test_serde_as_bits() {
        let json = serde_json::to_string(&MoveSet::ALL).expect("serializable");
        assert_eq!(json, "7");
        let parsed: MoveSet = serde_json::from_str("5").expect("deserializable");
        assert_eq!(parsed, MoveSet::DROP | MoveSet::SWAP_TWO_FOR_ONE);
    }

    #[test]
    fn test_stats_total() {
        let stats = MoveStats {
            dropped: 2,
            one_for_one: 1,
            two_for_one: 3,
        };
        assert_eq!(stats.total(), 6);
    }
}
