//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the game runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific input, clock and rendering, while the generic
//! [`crate::Runtime`] handles all orchestration.

use std::{
    future::Future,
    ops::{Add, Sub},
    time::Duration,
};

use crate::{App, AppEvent};

/// Abstracts I/O operations for the game runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles the ticker and deferred timers. This
/// ensures the same orchestration code runs in the terminal and in
/// simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui for rendering
/// - **Simulation**: scripted events over a virtual clock
///
/// # Associated Types
///
/// - [`Error`](Driver::Error): Platform-specific error type
/// - [`Instant`](Driver::Instant): Time representation (real or virtual)
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Time instant type. Enables virtual time in simulation.
    type Instant: Copy
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Output = Duration>;

    /// Wait up to `timeout` for the next input event.
    ///
    /// Returns `None` if nothing arrived in time.
    fn poll_event(
        &mut self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Current time instant.
    fn now(&self) -> Self::Instant;

    /// Display size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    fn size(&self) -> Result<(u16, u16), Self::Error>;

    /// Render the game state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release the display and clean up resources.
    fn stop(&mut self);
}
