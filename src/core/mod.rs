//! Core types: tiles, configuration, RNG, clock.
//!
//! Everything here is plain data. The deck generator and the session
//! build on these types but none of them know about game rules.

pub mod clock;
pub mod config;
pub mod rng;
pub mod tile;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    ConfigError, GameConfig, GridSize, MoveLimit, MoveLimitPolicy, DEFAULT_MISMATCH_DELAY,
};
pub use rng::{GameRng, GameRngState};
pub use tile::{Tile, TileId, TileValue};
