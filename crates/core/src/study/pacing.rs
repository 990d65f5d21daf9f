//! Timer tickets for paced transitions.
//!
//! State machines never sleep. They hand out a [`ScheduledTransition`]; the
//! owner waits `delay()` on a task tied to its own lifetime and passes the
//! ticket back. Only the newest ticket is honoured, at most once, and none
//! after teardown.

use std::time::Duration;

/// Pause between revealing a quiz answer and moving on.
pub const QUIZ_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Window after a flashcard index change during which navigation is ignored.
pub const FLASHCARD_SETTLE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    generation: u64,
    delay: Duration,
}

impl ScheduledTransition {
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Default)]
pub(crate) struct PendingTransitions {
    generation: u64,
    pending: Option<u64>,
    torn_down: bool,
}

impl PendingTransitions {
    /// Issue a new ticket, invalidating any earlier one.
    pub(crate) fn schedule(&mut self, delay: Duration) -> ScheduledTransition {
        self.generation = self.generation.wrapping_add(1);
        if !self.torn_down {
            self.pending = Some(self.generation);
        }
        ScheduledTransition {
            generation: self.generation,
            delay,
        }
    }

    /// Redeem a ticket. True only for the live pending ticket.
    pub(crate) fn take(&mut self, ticket: ScheduledTransition) -> bool {
        if self.torn_down || self.pending != Some(ticket.generation) {
            return false;
        }
        self.pending = None;
        true
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub(crate) fn teardown(&mut self) {
        self.cancel();
        self.torn_down = true;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_redeemed_once() {
        let mut timers = PendingTransitions::default();
        let ticket = timers.schedule(QUIZ_ADVANCE_DELAY);
        assert!(timers.take(ticket));
        assert!(!timers.take(ticket));
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut timers = PendingTransitions::default();
        let old = timers.schedule(FLASHCARD_SETTLE_DELAY);
        let new = timers.schedule(FLASHCARD_SETTLE_DELAY);
        assert!(!timers.take(old));
        assert!(timers.take(new));
    }

    #[test]
    fn cancel_and_teardown_discard_tickets() {
        let mut timers = PendingTransitions::default();
        let ticket = timers.schedule(QUIZ_ADVANCE_DELAY);
        timers.cancel();
        assert!(!timers.take(ticket));

        let ticket = timers.schedule(QUIZ_ADVANCE_DELAY);
        timers.teardown();
        assert!(!timers.take(ticket));
        assert!(timers.is_torn_down());
        assert!(!timers.is_pending());
    }

    #[test]
    fn ticket_carries_delay() {
        let mut timers = PendingTransitions::default();
        assert_eq!(
            timers.schedule(QUIZ_ADVANCE_DELAY).delay(),
            Duration::from_millis(1500)
        );
    }
}
