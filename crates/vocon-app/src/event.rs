//! Engine input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (Keyboard, Resize) relayed by the driver.
//! - Timers owned by the [`crate::Runtime`] (ticks and deferred transitions).

use crate::{KeyInput, Timer};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic scroll tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A deferred timer fired.
    Timer(Timer),
}
