//! Game sessions: the reveal/match state machine.
//!
//! ## States
//!
//! ```text
//!            pick                pick (other, match)
//!   Idle ──────────▶ OnePending ─────────────────────▶ Idle
//!    ▲                │  │
//!    │  pick (same)   │  │ pick (other, mismatch)
//!    └────────────────┘  ▼
//!    ▲               Resolving ── locked until the hide fires
//!    └──────────────────┘
//! ```
//!
//! Every reveal costs a move, including the first tile of a pair.
//! Cancelling the pending tile is free. After each transition the outcome
//! is recomputed: `Won` once every matchable tile is solved, otherwise
//! `Lost` once the move budget is spent.
//!
//! The session is single-threaded and clock-agnostic: callers pass the
//! current `Instant` in, and the mismatch flip-back only happens when they
//! call [`GameSession::tick`] or [`GameSession::fire_hide`].

mod machine;
mod selection;
mod state;
mod timer;

pub use machine::{GameSession, DEFAULT_MISMATCH_DELAY};
pub use selection::{RejectReason, Selection};
pub use state::{Outcome, RevealState};
pub use timer::{HideToken, ScheduledHide, SessionId};
