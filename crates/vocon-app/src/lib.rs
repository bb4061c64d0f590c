//! Round engine for the vowels-consonants game.
//!
//! Pure state machine and generic runtime for the game loop, enabling
//! deterministic simulation testing with the same code that runs in the
//! terminal.
//!
//! # Components
//!
//! - [`App`]: round state machine (word progression, answers, scoring)
//! - [`Driver`]: trait for platform-specific I/O and clock
//! - [`Runtime`]: generic loop owning the ticker and deferred timers

#![forbid(unsafe_code)]

mod action;
mod app;
mod config;
mod driver;
mod error;
mod event;
mod input;
mod pool;
mod runtime;
mod state;
mod timer;

pub use action::AppAction;
pub use app::{ADVANCE_DELAY, App, BANNER_DURATION, ESCAPE_MARGIN};
pub use config::{GameConfig, Speed};
pub use driver::Driver;
pub use error::AppError;
pub use event::AppEvent;
pub use input::KeyInput;
pub use pool::RoundPool;
pub use runtime::Runtime;
pub use state::{AnswerField, FieldState, Phase, RoundState, Subject};
pub use timer::{Scheduler, Timer};
