//! The reveal/match state machine.

use std::time::{Duration, Instant};

use im::OrdSet;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::selection::{RejectReason, Selection};
use super::state::{Outcome, RevealState};
use super::timer::{HideToken, ScheduledHide, SessionId};
use crate::board::BoardView;
pub use crate::core::DEFAULT_MISMATCH_DELAY;
use crate::core::{ConfigError, MoveLimit, TileId};
use crate::deck::Deck;

/// Mutable play state for one game.
///
/// Built from a dealt deck and discarded wholesale when a new game starts.
/// All mutation goes through [`select_tile`](Self::select_tile) and the
/// two hide entry points, which keep these invariants:
///
/// - revealed and solved tiles never overlap
/// - at most two tiles are revealed
/// - `solved` and `move_count` only grow
/// - the outcome leaves `InProgress` at most once
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    deck: Deck,
    state: RevealState,
    /// Persistent set so views can snapshot it cheaply.
    solved: OrdSet<TileId>,
    move_count: u32,
    move_limit: MoveLimit,
    outcome: Outcome,
    mismatch_delay: Duration,
    hide_sequence: u32,
}

impl GameSession {
    /// Start a game on `deck` with a budget of `move_limit` reveals.
    #[must_use]
    pub fn new(deck: Deck, move_limit: MoveLimit) -> Self {
        let id = SessionId::next();
        info!(session = %id, grid = %deck.grid_size(), move_limit = %move_limit, "new game");
        Self {
            id,
            deck,
            state: RevealState::Idle,
            solved: OrdSet::new(),
            move_count: 0,
            move_limit,
            outcome: Outcome::InProgress,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            hide_sequence: 0,
        }
    }

    /// Set how long mismatched pairs stay face-up.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn reveal_state(&self) -> &RevealState {
        &self.state
    }

    /// Face-up, unsolved tiles.
    #[must_use]
    pub fn revealed(&self) -> SmallVec<[TileId; 2]> {
        self.state.revealed()
    }

    #[must_use]
    pub fn solved(&self) -> &OrdSet<TileId> {
        &self.solved
    }

    #[must_use]
    pub fn is_solved(&self, id: TileId) -> bool {
        self.solved.contains(&id)
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn move_limit(&self) -> MoveLimit {
        self.move_limit
    }

    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.move_limit.get().saturating_sub(self.move_count)
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    #[must_use]
    pub fn pending_hide(&self) -> Option<ScheduledHide> {
        self.state.pending_hide()
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    /// Has anything happened yet?
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.move_count == 0 && self.state == RevealState::Idle
    }

    /// Snapshot for presentation.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::of(self)
    }

    // === Configuration ===

    /// Change the move budget. Only allowed before the first reveal.
    pub fn set_move_limit(&mut self, limit: MoveLimit) -> Result<(), ConfigError> {
        if !self.is_pristine() {
            return Err(ConfigError::GameInProgress);
        }
        self.move_limit = limit;
        debug!(session = %self.id, move_limit = %limit, "move limit changed");
        Ok(())
    }

    // === Transitions ===

    /// Forward a tile pick.
    ///
    /// `now` anchors the flip-back deadline if the pick completes a mismatch.
    pub fn select_tile(&mut self, id: TileId, now: Instant) -> Selection {
        if let Some(reason) = self.rejection(id) {
            trace!(session = %self.id, tile = %id, ?reason, "pick rejected");
            return Selection::Rejected(reason);
        }

        let selection = match self.state {
            RevealState::Idle => {
                self.move_count += 1;
                self.state = RevealState::OnePending(id);
                debug!(session = %self.id, tile = %id, moves = self.move_count, "revealed");
                Selection::Revealed(id)
            }
            RevealState::OnePending(pending) if pending == id => {
                self.state = RevealState::Idle;
                debug!(session = %self.id, tile = %id, "cancelled");
                Selection::Cancelled(id)
            }
            RevealState::OnePending(first) => {
                self.move_count += 1;
                self.compare(first, id, now)
            }
            RevealState::Resolving { .. } => return Selection::Rejected(RejectReason::Locked),
        };

        self.refresh_outcome();
        selection
    }

    /// Fire the pending flip-back if its deadline has passed.
    ///
    /// Returns the tiles turned face-down (empty if nothing was due).
    pub fn tick(&mut self, now: Instant) -> SmallVec<[TileId; 2]> {
        match self.state.pending_hide() {
            Some(hide) if hide.is_due(now) => self.clear_mismatch(),
            _ => SmallVec::new(),
        }
    }

    /// Fire the pending flip-back on behalf of an external timer.
    ///
    /// Tokens from other sessions, or from a hide that already fired, do nothing.
    pub fn fire_hide(&mut self, token: HideToken) -> SmallVec<[TileId; 2]> {
        match self.state.pending_hide() {
            Some(hide) if hide.token == token => self.clear_mismatch(),
            _ => {
                trace!(session = %self.id, ?token, "stale hide ignored");
                SmallVec::new()
            }
        }
    }

    // === Internals ===

    fn rejection(&self, id: TileId) -> Option<RejectReason> {
        if self.outcome.is_over() || self.move_count >= self.move_limit.get() {
            Some(RejectReason::GameOver)
        } else if self.state.is_locked() {
            Some(RejectReason::Locked)
        } else if self.deck.get(id).is_none() {
            Some(RejectReason::UnknownTile)
        } else if self.solved.contains(&id) {
            Some(RejectReason::AlreadySolved)
        } else {
            None
        }
    }

    fn compare(&mut self, first: TileId, second: TileId, now: Instant) -> Selection {
        if self.deck[first].matches(&self.deck[second]) {
            self.solved.insert(first);
            self.solved.insert(second);
            self.state = RevealState::Idle;
            debug!(session = %self.id, %first, %second, moves = self.move_count, "matched");
            return Selection::Matched(first, second);
        }

        let hide = ScheduledHide {
            token: HideToken {
                session: self.id,
                sequence: self.hide_sequence,
            },
            deadline: saturating_deadline(now, self.mismatch_delay),
        };
        self.hide_sequence = self.hide_sequence.wrapping_add(1);
        self.state = RevealState::Resolving { first, second, hide };
        debug!(session = %self.id, %first, %second, moves = self.move_count, "mismatched");
        Selection::Mismatched { first, second, hide }
    }

    fn clear_mismatch(&mut self) -> SmallVec<[TileId; 2]> {
        let hidden = self.state.revealed();
        self.state = RevealState::Idle;
        debug!(session = %self.id, tiles = ?hidden.as_slice(), "mismatch hidden");
        self.refresh_outcome();
        hidden
    }

    /// Win takes priority over running out of moves on the same pick.
    fn refresh_outcome(&mut self) {
        if self.outcome.is_over() {
            return;
        }

        let next = if self.solved.len() == self.deck.matchable_count() {
            Outcome::Won
        } else if self.move_count >= self.move_limit.get() {
            Outcome::Lost
        } else {
            return;
        };

        self.outcome = next;
        info!(
            session = %self.id,
            outcome = %next,
            moves = self.move_count,
            move_limit = %self.move_limit,
            "game over"
        );
    }
}

/// `now + delay`, or the latest representable instant if that overflows.
///
/// An unreachable deadline leaves the pair on display until `fire_hide`.
fn saturating_deadline(now: Instant, delay: Duration) -> Instant {
    if let Some(deadline) = now.checked_add(delay) {
        return deadline;
    }

    let mut deadline = now;
    let mut remaining = delay;
    let mut step = delay;
    while !remaining.is_zero() && !step.is_zero() {
        let chunk = step.min(remaining);
        match deadline.checked_add(chunk) {
            Some(next) => {
                deadline = next;
                remaining -= chunk;
            }
            None => step /= 2,
        }
    }
    deadline
}
