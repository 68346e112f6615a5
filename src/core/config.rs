//! Game configuration types.
//!
//! Callers configure a game by providing:
//! - `GridSize`: side length of the square grid
//! - `MoveLimitPolicy`: how many reveals a game allows
//! - `GameConfig`: the above plus the mismatch delay
//!
//! Range checks happen here, at the boundary. The deck generator and the
//! session assume they were handed valid values.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a mismatched pair stays up unless configured otherwise.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Errors raised while validating configuration input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {requested} is outside {min}..={max}")]
    GridSizeOutOfRange { requested: i64, min: u8, max: u8 },

    #[error("move limit {requested} is outside {min}..={max}")]
    MoveLimitOutOfRange { requested: i64, min: u32, max: u32 },

    /// The move limit is fixed once the first tile has been revealed.
    #[error("move limit can only change before the first move")]
    GameInProgress,
}

/// Side length of the square grid.
///
/// ```
/// use memory_match::core::GridSize;
///
/// let size = GridSize::new(3).unwrap();
/// assert_eq!(size.cell_count(), 9);
/// assert_eq!(size.pair_count(), 4);
/// assert!(size.has_filler());
///
/// assert!(GridSize::new(11).is_err());
/// assert_eq!(GridSize::clamped(0).get(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 10;

    /// Validate a requested grid size.
    pub fn new(size: i64) -> Result<Self, ConfigError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&size) {
            Ok(Self(size as u8))
        } else {
            Err(ConfigError::GridSizeOutOfRange {
                requested: size,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Clamp a requested grid size into range.
    #[must_use]
    pub fn clamped(size: i64) -> Self {
        Self(size.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of tiles on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Number of distinct paired values.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.cell_count() / 2
    }

    /// Odd grids carry one unpaired filler tile.
    #[must_use]
    pub const fn has_filler(self) -> bool {
        self.cell_count() % 2 == 1
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<u8> for GridSize {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Maximum number of reveals in one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MoveLimit(u32);

impl MoveLimit {
    pub const MIN: u32 = 4;
    pub const MAX: u32 = 100;

    /// Validate a requested move limit.
    pub fn new(limit: i64) -> Result<Self, ConfigError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&limit) {
            Ok(Self(limit as u32))
        } else {
            Err(ConfigError::MoveLimitOutOfRange {
                requested: limit,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Clamp a requested move limit into range.
    #[must_use]
    pub fn clamped(limit: i64) -> Self {
        Self(limit.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    /// Default limit for a grid: one reveal per tile plus two spare.
    #[must_use]
    pub fn for_grid(size: GridSize) -> Self {
        Self::clamped(size.cell_count() as i64 + 2)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for MoveLimit {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<MoveLimit> for u32 {
    fn from(limit: MoveLimit) -> Self {
        limit.0
    }
}

impl std::fmt::Display for MoveLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the move limit is chosen when a new game starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveLimitPolicy {
    /// Derive from the grid size (see [`MoveLimit::for_grid`]).
    #[default]
    Auto,
    /// Use the same limit for every game.
    Fixed(MoveLimit),
}

impl MoveLimitPolicy {
    #[must_use]
    pub fn resolve(self, size: GridSize) -> MoveLimit {
        match self {
            MoveLimitPolicy::Auto => MoveLimit::for_grid(size),
            MoveLimitPolicy::Fixed(limit) => limit,
        }
    }
}

/// Complete configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the grid.
    pub grid_size: GridSize,

    /// Move budget policy.
    pub move_limit: MoveLimitPolicy,

    /// How long a mismatched pair stays face-up before flipping back.
    pub mismatch_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            move_limit: MoveLimitPolicy::Auto,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_grid_size(mut self, size: GridSize) -> Self {
        self.grid_size = size;
        self
    }

    /// Use a fixed move limit for every game.
    #[must_use]
    pub fn with_move_limit(mut self, limit: MoveLimit) -> Self {
        self.move_limit = MoveLimitPolicy::Fixed(limit);
        self
    }

    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Move limit the next game will start with.
    #[must_use]
    pub fn resolved_move_limit(&self) -> MoveLimit {
        self.move_limit.resolve(self.grid_size)
    }
}
