//! Tiles: grid positions and the symbols printed on them.
//!
//! A tile's `TileId` is its 0-based position in the grid, row-major, and
//! stays stable for the lifetime of a session. Its `TileValue` is the
//! symbol shared with exactly one other tile, except for the single
//! filler tile of an odd-sized grid.
//!
//! ```
//! use memory_match::core::{Tile, TileId, TileValue};
//!
//! let a = Tile::new(TileId::new(0), TileValue::new(3));
//! let b = Tile::new(TileId::new(5), TileValue::new(3));
//! assert!(a.matches(&b));
//!
//! let filler = Tile::new(TileId::new(8), TileValue::UNPAIRED);
//! assert!(!filler.is_matchable());
//! assert!(!filler.matches(&filler));
//! ```

use serde::{Deserialize, Serialize};

/// Position of a tile in the grid (row-major, 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Position as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Symbol on the face of a tile.
///
/// Paired values run from 1 upward. `0` is reserved for the unpaired filler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileValue(pub u16);

impl TileValue {
    /// Value carried by the filler tile of an odd grid. Never matches.
    pub const UNPAIRED: Self = Self(0);

    /// Create a new tile value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Is this a value that occurs on a pair of tiles?
    #[must_use]
    pub const fn is_paired(self) -> bool {
        self.0 != Self::UNPAIRED.0
    }
}

impl std::fmt::Display for TileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_paired() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("*")
        }
    }
}

/// A tile. Immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: TileValue,
}

impl Tile {
    #[must_use]
    pub const fn new(id: TileId, value: TileValue) -> Self {
        Self { id, value }
    }

    /// Can this tile ever be solved?
    #[must_use]
    pub const fn is_matchable(&self) -> bool {
        self.value.is_paired()
    }

    /// Two distinct tiles match when they carry the same paired value.
    #[must_use]
    pub fn matches(&self, other: &Tile) -> bool {
        self.id != other.id && self.is_matchable() && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id_index() {
        assert_eq!(TileId::new(7).index(), 7);
        assert_eq!(TileId::new(7).raw(), 7);
        assert_eq!(TileId::new(7).to_string(), "Tile(7)");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(TileValue::new(12).to_string(), "12");
        assert_eq!(TileValue::UNPAIRED.to_string(), "*");
    }

    #[test]
    fn test_matches_requires_distinct_positions() {
        let tile = Tile::new(TileId::new(1), TileValue::new(4));
        assert!(!tile.matches(&tile));
    }

    #[test]
    fn test_different_values_do_not_match() {
        let a = Tile::new(TileId::new(0), TileValue::new(1));
        let b = Tile::new(TileId::new(1), TileValue::new(2));
        assert!(!a.matches(&b));
        assert!(!b.matches(&a));
    }

    #[test]
    fn test_filler_never_matches() {
        let a = Tile::new(TileId::new(0), TileValue::UNPAIRED);
        let b = Tile::new(TileId::new(1), TileValue::UNPAIRED);
        assert!(!a.matches(&b));
    }
}
