//! Engine side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use std::time::Duration;

use crate::Timer;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Start (or restart) the periodic tick.
    StartTicker {
        /// Time between ticks.
        interval: Duration,
    },

    /// Stop the periodic tick.
    StopTicker,

    /// Fire `timer` once after `delay`.
    Schedule {
        /// Delay before the timer fires.
        delay: Duration,
        /// Timer delivered back as [`crate::AppEvent::Timer`].
        timer: Timer,
    },

    /// Drop every pending deferred timer.
    CancelTimers,
}
