//! The scheduled flip-back of a mismatched pair.
//!
//! A mismatch does not clear itself. The session records a `ScheduledHide`
//! and waits for either `tick(now)` past the deadline or `fire_hide(token)`
//! from an external timer. The token names the session that issued it, so
//! a timer that outlives its session is ignored by the replacement.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a `GameSession`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Allocate an id no other session in this process has used.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Handle for one pending flip-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HideToken {
    pub session: SessionId,
    pub sequence: u32,
}

/// A flip-back waiting for its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledHide {
    pub token: HideToken,
    pub deadline: Instant,
}

impl ScheduledHide {
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
