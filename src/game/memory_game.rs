//! `MemoryGame`: configuration, reset and time around a `GameSession`.

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::board::BoardView;
use crate::core::{
    Clock, ConfigError, GameConfig, GameRng, GridSize, MoveLimit, MoveLimitPolicy, SystemClock,
    TileId,
};
use crate::deck;
use crate::session::{GameSession, HideToken, Selection};

/// A playable memory game.
///
/// Owns the configuration, the RNG every deck is dealt from, the clock
/// that anchors mismatch deadlines, and the current session. A new game
/// always gets a brand-new session; nothing carries over.
///
/// ```
/// use memory_match::{GameConfig, MemoryGame, Outcome, TileId};
///
/// let mut game = MemoryGame::new(GameConfig::default(), 42);
/// assert_eq!(game.view().tiles.len(), 16);
///
/// let first = TileId::new(0);
/// let partner = game.session().deck().partner(first).unwrap();
/// game.select_tile(first);
/// game.select_tile(partner);
///
/// assert_eq!(game.session().solved().len(), 2);
/// assert_eq!(game.session().outcome(), Outcome::InProgress);
/// ```
#[derive(Debug)]
pub struct MemoryGame<C: Clock = SystemClock> {
    config: GameConfig,
    rng: GameRng,
    clock: C,
    session: GameSession,
}

impl MemoryGame<SystemClock> {
    /// Start a game on the real clock with a seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_clock(config, GameRng::new(seed), SystemClock)
    }
}

impl<C: Clock> MemoryGame<C> {
    /// Start a game with an explicit RNG and clock.
    #[must_use]
    pub fn with_clock(config: GameConfig, mut rng: GameRng, clock: C) -> Self {
        let session = Self::deal(&config, &mut rng);
        Self {
            config,
            rng,
            clock,
            session,
        }
    }

    fn deal(config: &GameConfig, rng: &mut GameRng) -> GameSession {
        let mut shuffle = rng.fork();
        let deck = deck::generate(config.grid_size, &mut shuffle);
        GameSession::new(deck, config.resolved_move_limit())
            .with_mismatch_delay(config.mismatch_delay)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        self.session.view()
    }

    /// Discard the current game and deal a new one.
    ///
    /// Any pending mismatch flip-back goes with the old session.
    #[instrument(skip(self), fields(grid = %self.config.grid_size))]
    pub fn reset(&mut self) {
        self.session = Self::deal(&self.config, &mut self.rng);
    }

    /// Change the grid size and start a new game on it.
    pub fn configure_grid_size(&mut self, size: i64) -> Result<(), ConfigError> {
        let size = GridSize::new(size)?;
        self.config.grid_size = size;
        debug!(grid = %size, "grid size configured");
        self.reset();
        Ok(())
    }

    /// Fix the move limit for this and later games.
    ///
    /// Refused once the current game has had its first reveal; the
    /// configuration is left unchanged in that case.
    pub fn configure_move_limit(&mut self, limit: i64) -> Result<(), ConfigError> {
        let limit = MoveLimit::new(limit)?;
        self.session.set_move_limit(limit)?;
        self.config.move_limit = MoveLimitPolicy::Fixed(limit);
        Ok(())
    }

    /// Forward a tile pick at the clock's current time.
    pub fn select_tile(&mut self, id: TileId) -> Selection {
        let now = self.clock.now();
        self.session.select_tile(id, now)
    }

    /// Flip back a mismatch whose delay has elapsed.
    pub fn tick(&mut self) -> SmallVec<[TileId; 2]> {
        let now = self.clock.now();
        self.session.tick(now)
    }

    /// Flip back a mismatch on behalf of an external timer.
    ///
    /// A token issued before the last reset is ignored.
    pub fn fire_hide(&mut self, token: HideToken) -> SmallVec<[TileId; 2]> {
        self.session.fire_hide(token)
    }
}
