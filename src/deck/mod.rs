//! Decks: the ordered tiles of one game.
//!
//! A `Deck` is positionally indexed (`deck[id]` is the tile at `id`) and
//! never changes once dealt. Use [`generate`] for a shuffled deck, or
//! [`Deck::from_values`] to lay out a specific board.
//!
//! ## Multiplicities
//!
//! Every paired value occurs exactly twice. At most one tile carries
//! [`TileValue::UNPAIRED`], and only when the grid has an odd cell count.

mod generator;

pub use generator::generate;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GridSize, Tile, TileId, TileValue};

/// Reasons a hand-built layout is not a valid deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("expected {expected} tiles for a {grid} grid, got {actual}")]
    WrongLength {
        grid: GridSize,
        expected: usize,
        actual: usize,
    },

    #[error("value {value} occurs {count} times, expected exactly 2")]
    UnpairedValue { value: TileValue, count: usize },

    #[error("expected {expected} filler tiles, got {actual}")]
    FillerCount { expected: usize, actual: usize },

    #[error("tile {id} sits at position {position}")]
    MisplacedTile { position: usize, id: TileId },
}

/// The tiles of one game, in grid order.
///
/// Deserializing runs [`Deck::validate`], so a stored deck is held to the
/// same rules as a dealt one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckLayout")]
pub struct Deck {
    grid_size: GridSize,
    tiles: Vec<Tile>,
}

/// Unchecked wire form of a [`Deck`].
#[derive(Deserialize)]
struct DeckLayout {
    grid_size: GridSize,
    tiles: Vec<Tile>,
}

impl TryFrom<DeckLayout> for Deck {
    type Error = DeckError;

    fn try_from(layout: DeckLayout) -> Result<Self, Self::Error> {
        let deck = Self {
            grid_size: layout.grid_size,
            tiles: layout.tiles,
        };
        deck.validate()?;
        Ok(deck)
    }
}

impl Deck {
    /// Trusted constructor used by the generator.
    pub(crate) fn from_tiles_unchecked(grid_size: GridSize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), grid_size.cell_count());
        Self { grid_size, tiles }
    }

    /// Build a deck from an explicit row-major layout.
    ///
    /// ```
    /// use memory_match::core::{GridSize, TileId, TileValue};
    /// use memory_match::deck::Deck;
    ///
    /// let v = TileValue::new;
    /// let deck = Deck::from_values(GridSize::new(2).unwrap(), [v(1), v(1), v(2), v(2)]).unwrap();
    /// assert_eq!(deck.partner(TileId::new(1)), Some(TileId::new(0)));
    ///
    /// assert!(Deck::from_values(GridSize::new(2).unwrap(), [v(1), v(2), v(3), v(3)]).is_err());
    /// ```
    pub fn from_values(
        grid_size: GridSize,
        values: impl IntoIterator<Item = TileValue>,
    ) -> Result<Self, DeckError> {
        let tiles: Vec<Tile> = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| Tile::new(TileId::new(position as u16), value))
            .collect();

        let deck = Self { grid_size, tiles };
        deck.validate()?;
        Ok(deck)
    }

    /// Check length, positional ids and pair multiplicities.
    pub fn validate(&self) -> Result<(), DeckError> {
        let expected = self.grid_size.cell_count();
        if self.tiles.len() != expected {
            return Err(DeckError::WrongLength {
                grid: self.grid_size,
                expected,
                actual: self.tiles.len(),
            });
        }

        if let Some((position, tile)) = self
            .tiles
            .iter()
            .enumerate()
            .find(|(position, tile)| tile.id.index() != *position)
        {
            return Err(DeckError::MisplacedTile {
                position,
                id: tile.id,
            });
        }

        let mut fillers = 0;
        for (value, count) in self.value_counts() {
            if !value.is_paired() {
                fillers = count;
            } else if count != 2 {
                return Err(DeckError::UnpairedValue { value, count });
            }
        }

        let expected_fillers = usize::from(self.grid_size.has_filler());
        if fillers != expected_fillers {
            return Err(DeckError::FillerCount {
                expected: expected_fillers,
                actual: fillers,
            });
        }

        Ok(())
    }

    /// How many tiles carry each value.
    #[must_use]
    pub fn value_counts(&self) -> FxHashMap<TileValue, usize> {
        let mut counts = FxHashMap::default();
        for tile in &self.tiles {
            *counts.entry(tile.value).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a position, if the position is on the board.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// The other tile carrying the same value.
    #[must_use]
    pub fn partner(&self, id: TileId) -> Option<TileId> {
        let tile = self.get(id)?;
        self.tiles.iter().find(|other| tile.matches(other)).map(|t| t.id)
    }

    /// The unpaired filler tile, on odd grids.
    #[must_use]
    pub fn filler(&self) -> Option<TileId> {
        self.tiles.iter().find(|t| !t.is_matchable()).map(|t| t.id)
    }

    /// Number of tiles that can end up solved.
    #[must_use]
    pub fn matchable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_matchable()).count()
    }
}

impl std::ops::Index<TileId> for Deck {
    type Output = Tile;

    fn index(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }
}
