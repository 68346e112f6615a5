//! The engine boundary consumed by presentation layers.
//!
//! `MemoryGame` accepts the four inputs a UI produces (grid size, move
//! limit, tile pick, reset), validates configuration, and exposes the
//! resulting state as a [`BoardView`](crate::board::BoardView).

mod memory_game;

pub use memory_game::MemoryGame;
