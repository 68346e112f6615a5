//! # memory-match
//!
//! A single-player tile-matching memory game engine.
//!
//! A square grid of face-down tiles hides pairs of values. The player
//! reveals two tiles per turn and tries to find every pair before the
//! move budget runs out.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The reveal state is a tagged enum
//!    (`Idle | OnePending | Resolving`), never inferred from collection sizes.
//!
//! 2. **Single Mutation Entry**: All gameplay flows through
//!    `GameSession::select_tile`. Invalid picks are rejected as no-ops.
//!
//! 3. **Deterministic**: Decks come from a seeded ChaCha RNG and time comes
//!    from a `Clock`, so whole games replay exactly in tests.
//!
//! ## Modules
//!
//! - `core`: Tiles, configuration, RNG, clock
//! - `deck`: Deck generation and validation
//! - `session`: The reveal/match state machine and the mismatch timer
//! - `board`: Read-only snapshots for presentation
//! - `game`: `MemoryGame`, the configuration/reset boundary

pub mod core;
pub mod deck;
pub mod session;
pub mod board;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock,
    ConfigError, GameConfig, GridSize, MoveLimit, MoveLimitPolicy,
    GameRng, GameRngState,
    Tile, TileId, TileValue,
};

pub use crate::deck::{Deck, DeckError};

pub use crate::session::{
    GameSession, Outcome, RevealState,
    Selection, RejectReason,
    HideToken, ScheduledHide, SessionId,
};

pub use crate::board::{BoardView, TileFace, TileView};

pub use crate::game::MemoryGame;
