//! Deck generation.

use tracing::debug;

use super::Deck;
use crate::core::{GameRng, GridSize, Tile, TileId, TileValue};

/// Deal a freshly shuffled deck for a grid.
///
/// Produces `pair_count` values, each on exactly two tiles. An odd grid
/// gets one extra [`TileValue::UNPAIRED`] filler. The tiles are uniformly
/// permuted and then numbered by their final position.
///
/// ```
/// use memory_match::core::{GameRng, GridSize};
/// use memory_match::deck;
///
/// let mut rng = GameRng::new(7);
/// let deck = deck::generate(GridSize::new(3).unwrap(), &mut rng);
///
/// assert_eq!(deck.len(), 9);
/// assert_eq!(deck.matchable_count(), 8);
/// ```
pub fn generate(size: GridSize, rng: &mut GameRng) -> Deck {
    let mut values: Vec<TileValue> = Vec::with_capacity(size.cell_count());
    for value in 1..=size.pair_count() as u16 {
        values.push(TileValue::new(value));
        values.push(TileValue::new(value));
    }
    if size.has_filler() {
        values.push(TileValue::UNPAIRED);
    }

    rng.shuffle(&mut values);

    let tiles = values
        .into_iter()
        .enumerate()
        .map(|(position, value)| Tile::new(TileId::new(position as u16), value))
        .collect();

    debug!(grid = %size, seed = rng.seed(), "dealt deck");
    Deck::from_tiles_unchecked(size, tiles)
}
