//! Read-only board snapshots for presentation layers.
//!
//! A `BoardView` is taken after a call completes and never changes. Tile
//! faces follow one rule: solved tiles show as matched, revealed tiles show
//! their value, everything else is a face-down placeholder.

mod view;

pub use view::{BoardView, TileFace, TileView};
