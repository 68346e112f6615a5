//! Result of forwarding a tile pick into the session.
//!
//! Invalid picks are not errors. They come back as `Selection::Rejected`
//! with the session untouched, so a UI can forward every click blindly.

use super::timer::ScheduledHide;
use crate::core::TileId;

/// Why a pick changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The game is already won or lost.
    GameOver,
    /// A mismatched pair is still on display.
    Locked,
    /// The tile is already part of a solved pair.
    AlreadySolved,
    /// No tile at that position.
    UnknownTile,
}

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// First tile of a pair turned up. Costs one move.
    Revealed(TileId),
    /// The pending tile was picked again and turned back down. Free.
    Cancelled(TileId),
    /// Second tile matched the first. Both are solved. Costs one move.
    Matched(TileId, TileId),
    /// Second tile did not match. Costs one move; both flip back at `hide`.
    Mismatched {
        first: TileId,
        second: TileId,
        hide: ScheduledHide,
    },
    Rejected(RejectReason),
}

impl Selection {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Selection::Rejected(_))
    }

    /// Did this pick consume a move?
    #[must_use]
    pub fn charged_move(&self) -> bool {
        matches!(
            self,
            Selection::Revealed(_) | Selection::Matched(..) | Selection::Mismatched { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charged_move() {
        assert!(Selection::Revealed(TileId::new(0)).charged_move());
        assert!(Selection::Matched(TileId::new(0), TileId::new(1)).charged_move());
        assert!(!Selection::Cancelled(TileId::new(0)).charged_move());
        assert!(!Selection::Rejected(RejectReason::Locked).charged_move());
        assert!(Selection::Rejected(RejectReason::GameOver).is_rejected());
    }
}
