//! Debounced validation scheduling
//!
//! A single-slot timer: at most one check is pending, and a newer edit
//! supersedes the old one before it can fire, so results can never apply out
//! of order. The clock is threaded in by the caller, which keeps every
//! transition directly testable.

use std::time::{Duration, Instant};

/// Default quiet period before a scheduled check fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
enum DebounceState {
    Idle,
    Scheduled { value: String, deadline: Instant },
}

/// Cancellable debounce timer for the name field.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    state: DebounceState,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    /// Schedules a check for `value`, replacing any pending one. Only the
    /// newest value can ever fire.
    pub fn schedule(&mut self, value: impl Into<String>, now: Instant) {
        self.state = DebounceState::Scheduled {
            value: value.into(),
            deadline: now + self.delay,
        };
    }

    /// Discards the pending check, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = DebounceState::Idle;
        was_pending
    }

    /// Fires the pending check once its quiet period has elapsed, returning
    /// the value to validate. Fires each scheduled check at most once.
    pub fn fire_due(&mut self, now: Instant) -> Option<String> {
        let due =
            matches!(&self.state, DebounceState::Scheduled { deadline, .. } if now >= *deadline);
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Scheduled { value, .. } => Some(value),
            DebounceState::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Scheduled { .. })
    }

    pub fn pending_value(&self) -> Option<&str> {
        match &self.state {
            DebounceState::Scheduled { value, .. } => Some(value),
            DebounceState::Idle => None,
        }
    }
}
