//! Deferred one-shot timers.
//!
//! The [`crate::App`] asks for a [`Timer`] through
//! [`crate::AppAction::Schedule`]; the runtime parks it in a [`Scheduler`]
//! until its deadline and feeds it back as [`crate::AppEvent::Timer`].
//!
//! Timers that act on round state carry the generation that scheduled them.
//! The App drops any timer whose generation is no longer current, so a timer
//! that outlives its word or round cannot touch the new state.

/// Deferred transition requested by the App.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Hide the splash banner and start playing.
    DismissBanner,

    /// Move past a solved word (next word or end of round).
    CompleteWord {
        /// Generation of the word that was solved.
        generation: u64,
    },
}

/// Pending deferred timers ordered by deadline.
///
/// Generic over the instant type so the runtime can use real or virtual time.
#[derive(Debug, Clone)]
pub struct Scheduler<I> {
    pending: Vec<(I, Timer)>,
}

impl<I> Default for Scheduler<I> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<I: Copy + Ord> Scheduler<I> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `timer` until `deadline`.
    pub fn schedule(&mut self, deadline: I, timer: Timer) {
        let at = self.pending.partition_point(|(d, _)| *d <= deadline);
        self.pending.insert(at, (deadline, timer));
    }

    /// Drop every pending timer.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(count = self.pending.len(), "cancelling pending timers");
        }
        self.pending.clear();
    }

    /// Earliest pending deadline. `None` if nothing is pending.
    pub fn next_deadline(&self) -> Option<I> {
        self.pending.first().map(|(d, _)| *d)
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: I) -> Vec<Timer> {
        let due = self.pending.partition_point(|(d, _)| *d <= now);
        self.pending.drain(..due).map(|(_, timer)| timer).collect()
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
