//! Trailing-edge debounce.
//!
//! One pending action at most. Every [`Debouncer::schedule`] supersedes the
//! previous one, so a burst of inputs yields a single firing after the input
//! has been idle for `delay`.
//!
//! Two ways to drive it:
//! - **Host timer**: the host arms a timer for `delay` on each schedule and
//!   hands the returned [`DebounceTicket`] back through [`Debouncer::fire`].
//!   Stale tickets are ignored, so a timer the host failed to cancel is
//!   harmless.
//! - **Clock**: the host advances a monotonic clock and calls
//!   [`Debouncer::poll`].
//!
//! # Invariants
//!
//! - **Latest-wins**: only the most recent schedule can fire.
//! - **At most once**: a schedule fires at most one time.

use core::time::Duration;

/// Default idle interval for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(120);

/// Handle for one scheduled firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    deadline: Duration,
}

impl DebounceTicket {
    /// Monotonic time at which this ticket becomes due.
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }
}

/// Trailing-edge debouncer holding at most one pending firing.
///
/// Each [`schedule`](Self::schedule) bumps a generation counter; a ticket
/// from an older generation is stale and never fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<DebounceTicket>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Whether a firing is scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule a firing `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Duration) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = DebounceTicket {
            generation: self.generation,
            deadline: now.saturating_add(self.delay),
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Host-timer mode: returns `true` iff `ticket` is the pending one.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Clock mode: returns `true` iff the pending firing is due at `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending {
            Some(ticket) if now >= ticket.deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_after_idle_interval() {
        let mut d = Debouncer::default();
        d.schedule(ms(0));
        assert!(!d.poll(ms(119)));
        assert!(d.poll(ms(120)));
        assert!(!d.poll(ms(500)));
    }

    #[test]
    fn reschedule_pushes_deadline_out() {
        let mut d = Debouncer::default();
        d.schedule(ms(0));
        d.schedule(ms(100));
        assert!(!d.poll(ms(150)));
        assert!(d.poll(ms(220)));
    }

    #[test]
    fn stale_tickets_never_fire() {
        let mut d = Debouncer::default();
        let first = d.schedule(ms(0));
        let second = d.schedule(ms(50));
        assert!(!d.fire(first));
        assert!(d.fire(second));
        assert!(!d.fire(second));
    }

    #[test]
    fn cancel_clears_pending() {
        let mut d = Debouncer::new(ms(10));
        let t = d.schedule(ms(0));
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(t));
        assert!(!d.poll(ms(100)));
    }

    #[test]
    fn ticket_deadline_is_now_plus_delay() {
        let mut d = Debouncer::new(ms(30));
        assert_eq!(d.schedule(ms(5)).deadline(), ms(35));
    }
}
