//! Board view types.

use serde::{Deserialize, Serialize};

use crate::core::{GridSize, MoveLimit, TileId, TileValue};
use crate::session::{GameSession, Outcome};

/// What a tile shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileFace {
    /// Face-down placeholder.
    Hidden,
    /// Face-up, not yet solved.
    Revealed(TileValue),
    /// Part of a solved pair.
    Matched(TileValue),
}

impl TileFace {
    #[must_use]
    pub fn is_face_up(self) -> bool {
        self != TileFace::Hidden
    }

    #[must_use]
    pub fn is_matched(self) -> bool {
        matches!(self, TileFace::Matched(_))
    }

    /// The value, if the face shows one.
    #[must_use]
    pub fn value(self) -> Option<TileValue> {
        match self {
            TileFace::Hidden => None,
            TileFace::Revealed(v) | TileFace::Matched(v) => Some(v),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub face: TileFace,
}

/// Snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub grid_size: GridSize,
    /// Tiles in grid order.
    pub tiles: Vec<TileView>,
    pub move_count: u32,
    pub move_limit: MoveLimit,
    pub moves_remaining: u32,
    pub outcome: Outcome,
    /// A mismatched pair is on display and picks are refused.
    pub locked: bool,
}

impl BoardView {
    #[must_use]
    pub fn of(session: &GameSession) -> Self {
        let revealed = session.revealed();
        let tiles = session
            .deck()
            .tiles()
            .iter()
            .map(|tile| {
                let face = if session.is_solved(tile.id) {
                    TileFace::Matched(tile.value)
                } else if revealed.contains(&tile.id) {
                    TileFace::Revealed(tile.value)
                } else {
                    TileFace::Hidden
                };
                TileView { id: tile.id, face }
            })
            .collect();

        Self {
            grid_size: session.deck().grid_size(),
            tiles,
            move_count: session.move_count(),
            move_limit: session.move_limit(),
            moves_remaining: session.moves_remaining(),
            outcome: session.outcome(),
            locked: session.is_locked(),
        }
    }

    /// Face of the tile at `id`.
    #[must_use]
    pub fn face(&self, id: TileId) -> Option<TileFace> {
        self.tiles.get(id.index()).map(|t| t.face)
    }

    /// Tiles grouped into rows of `grid_size`.
    pub fn rows(&self) -> impl Iterator<Item = &[TileView]> {
        self.tiles.chunks(usize::from(self.grid_size.get()))
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|tile| match tile.face {
                    TileFace::Hidden => format!("{:^4}", "?"),
                    TileFace::Revealed(v) => format!("{:^4}", v.to_string()),
                    TileFace::Matched(v) => format!("{:^4}", format!("[{v}]")),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        write!(
            f,
            "Moves: {} / {} ({})",
            self.move_count, self.move_limit, self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use std::time::Instant;

    fn session() -> GameSession {
        let deck = Deck::from_values(
            GridSize::new(2).unwrap(),
            [1, 2, 1, 2].into_iter().map(TileValue::new),
        )
        .unwrap();
        GameSession::new(deck, MoveLimit::new(10).unwrap())
    }

    #[test]
    fn test_fresh_board_is_hidden() {
        let view = session().view();
        assert_eq!(view.tiles.len(), 4);
        assert!(view.tiles.iter().all(|t| t.face == TileFace::Hidden));
        assert_eq!(view.moves_remaining, 10);
        assert!(!view.locked);
    }

    #[test]
    fn test_faces_follow_state() {
        let mut s = session();
        let now = Instant::now();
        s.select_tile(TileId::new(0), now);
        s.select_tile(TileId::new(2), now);
        s.select_tile(TileId::new(1), now);

        let view = s.view();
        assert_eq!(view.face(TileId::new(0)), Some(TileFace::Matched(TileValue::new(1))));
        assert_eq!(view.face(TileId::new(1)), Some(TileFace::Revealed(TileValue::new(2))));
        assert_eq!(view.face(TileId::new(3)), Some(TileFace::Hidden));
        assert_eq!(view.face(TileId::new(4)), None);
        assert_eq!(view.move_count, 3);
    }

    #[test]
    fn test_rows_and_display() {
        let view = session().view();
        assert_eq!(view.rows().count(), 2);

        let text = view.to_string();
        assert!(text.contains('?'));
        assert!(text.ends_with("Moves: 0 / 10 (in progress)"));
    }

    #[test]
    fn test_view_serializes() {
        let view = session().view();
        let json = serde_json::to_string(&view).unwrap();
        let back: BoardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
