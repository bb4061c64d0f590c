//! Generic runtime for game orchestration.
//!
//! The Runtime drives the game event loop, coordinating between:
//! - [`App`]: round state machine
//! - [`Driver`]: platform-specific I/O and clock
//!
//! It owns everything time-related that the App only asks for: the periodic
//! ticker and the deferred [`Timer`](crate::Timer)s.

use std::time::Duration;

use crate::{App, AppAction, AppEvent, Driver, Scheduler};

/// Longest wait for input when no tick or timer is due sooner.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Periodic tick while a round runs.
#[derive(Debug, Clone, Copy)]
struct Ticker<I> {
    interval: Duration,
    next: I,
}

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    ticker: Option<Ticker<D::Instant>>,
    scheduler: Scheduler<D::Instant>,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and game.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app, ticker: None, scheduler: Scheduler::new() }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// This is the core orchestration loop that:
    /// 1. Sizes the App to the display and starts it
    /// 2. Polls the driver for input until the next tick or timer is due
    /// 3. Feeds due timers and ticks back into the App
    /// 4. Executes the resulting actions
    ///
    /// The driver is stopped on exit, including on error.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let result = self.run_loop().await;
        self.driver.stop();
        result
    }

    async fn run_loop(&mut self) -> Result<(), D::Error> {
        let (cols, rows) = self.driver.size()?;
        let _ = self.app.handle(AppEvent::Resize(cols, rows));

        let actions = self.app.start();
        if self.process_actions(actions)? {
            return Ok(());
        }

        loop {
            if self.process_cycle().await? {
                return Ok(());
            }
        }
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let timeout = self.poll_timeout();
        if let Some(event) = self.driver.poll_event(timeout).await? {
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }

        let now = self.driver.now();
        for timer in self.scheduler.take_due(now) {
            let actions = self.app.handle(AppEvent::Timer(timer));
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }

        if let Some(ticker) = self.ticker.as_mut().filter(|t| t.next <= now) {
            ticker.next = ticker.next + ticker.interval;
            // Skip missed ticks instead of bursting after a stall
            if ticker.next <= now {
                ticker.next = now + ticker.interval;
            }
            let actions = self.app.handle(AppEvent::Tick);
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Time until the earliest tick or timer, capped at [`IDLE_POLL`].
    fn poll_timeout(&self) -> Duration {
        let now = self.driver.now();
        let next = match (self.ticker.map(|t| t.next), self.scheduler.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        match next {
            Some(deadline) if deadline > now => (deadline - now).min(IDLE_POLL),
            Some(_) => Duration::ZERO,
            None => IDLE_POLL,
        }
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::StartTicker { interval } => {
                    let next = self.driver.now() + interval;
                    self.ticker = Some(Ticker { interval, next });
                },
                AppAction::StopTicker => self.ticker = None,
                AppAction::Schedule { delay, timer } => {
                    let deadline = self.driver.now() + delay;
                    self.scheduler.schedule(deadline, timer);
                },
                AppAction::CancelTimers => self.scheduler.cancel_all(),
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
