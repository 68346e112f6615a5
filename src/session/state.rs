//! Reveal state and game outcome.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::timer::ScheduledHide;
use crate::core::TileId;

/// Which unresolved tiles are face-up.
///
/// Replaces "look at how many tiles are flipped" with an explicit tag, so
/// three revealed tiles or a pending tile without a partner slot cannot be
/// expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Nothing awaiting comparison.
    #[default]
    Idle,
    /// One tile up, waiting for a second pick.
    OnePending(TileId),
    /// A mismatched pair on display. Input is locked until `hide` fires.
    Resolving {
        first: TileId,
        second: TileId,
        hide: ScheduledHide,
    },
}

impl RevealState {
    /// Face-up, unsolved tiles.
    #[must_use]
    pub fn revealed(&self) -> SmallVec<[TileId; 2]> {
        match *self {
            RevealState::Idle => SmallVec::new(),
            RevealState::OnePending(id) => smallvec![id],
            RevealState::Resolving { first, second, .. } => smallvec![first, second],
        }
    }

    #[must_use]
    pub fn is_revealed(&self, id: TileId) -> bool {
        self.revealed().contains(&id)
    }

    /// Input is refused while a mismatch is on display.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, RevealState::Resolving { .. })
    }

    #[must_use]
    pub fn pending_hide(&self) -> Option<ScheduledHide> {
        match *self {
            RevealState::Resolving { hide, .. } => Some(hide),
            _ => None,
        }
    }
}

/// How the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    /// Every matchable tile solved.
    Won,
    /// Move budget spent without winning.
    Lost,
}

impl Outcome {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::InProgress => "in progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        })
    }
}
