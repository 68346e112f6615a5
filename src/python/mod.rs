//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(grid_size=4, seed=42)
//! game.select_tile(0)
//! game.select_tile(5)   # "matched" or "mismatched"
//! game.tick()           # flips a due mismatch back down
//!
//! for tile_id, value, matched in game.board():
//!     ...
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ConfigError, GameConfig, GameRng, GridSize, MoveLimit, SystemClock, TileId};
use crate::game::MemoryGame;
use crate::session::Selection;

fn config_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for `MemoryGame` on the real clock.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    inner: MemoryGame,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a game. Without a seed the deck order comes from the OS.
    #[new]
    #[pyo3(signature = (grid_size=4, move_limit=None, seed=None))]
    fn new(grid_size: i64, move_limit: Option<i64>, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::default()
            .with_grid_size(GridSize::new(grid_size).map_err(config_err)?);
        if let Some(limit) = move_limit {
            config = config.with_move_limit(MoveLimit::new(limit).map_err(config_err)?);
        }
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            inner: MemoryGame::with_clock(config, rng, SystemClock),
        })
    }

    /// Pick a tile. Returns what happened as a lowercase word.
    fn select_tile(&mut self, id: u16) -> &'static str {
        match self.inner.select_tile(TileId::new(id)) {
            Selection::Revealed(_) => "revealed",
            Selection::Cancelled(_) => "cancelled",
            Selection::Matched(..) => "matched",
            Selection::Mismatched { .. } => "mismatched",
            Selection::Rejected(_) => "rejected",
        }
    }

    /// Flip back a due mismatch. Returns the ids turned face-down.
    fn tick(&mut self) -> Vec<u16> {
        self.inner.tick().iter().map(|id| id.raw()).collect()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn configure_grid_size(&mut self, size: i64) -> PyResult<()> {
        self.inner.configure_grid_size(size).map_err(config_err)
    }

    fn configure_move_limit(&mut self, limit: i64) -> PyResult<()> {
        self.inner.configure_move_limit(limit).map_err(config_err)
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.inner.session().move_count()
    }

    #[getter]
    fn move_limit(&self) -> u32 {
        self.inner.session().move_limit().get()
    }

    /// "in progress", "won" or "lost".
    #[getter]
    fn outcome(&self) -> String {
        self.inner.session().outcome().to_string()
    }

    #[getter]
    fn locked(&self) -> bool {
        self.inner.session().is_locked()
    }

    /// `(id, visible value or None, matched)` per tile, in grid order.
    fn board(&self) -> Vec<(u16, Option<u16>, bool)> {
        self.inner
            .view()
            .tiles
            .iter()
            .map(|t| (t.id.raw(), t.face.value().map(|v| v.0), t.face.is_matched()))
            .collect()
    }

    fn __repr__(&self) -> String {
        let session = self.inner.session();
        format!(
            "MemoryGame(grid={}, moves={}/{}, outcome={})",
            session.deck().grid_size(),
            session.move_count(),
            session.move_limit(),
            session.outcome()
        )
    }
}

/// memory_match: a tile-matching memory game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
