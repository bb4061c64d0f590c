//! Terminal UI for the vowels-consonants game
//!
//! A thin shell over [`vocon_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`vocon_app::Runtime`]
//!
//! This crate only handles terminal rendering and loading word lists.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod source;
pub mod terminal;
pub mod ui;

pub use source::{SourceError, fetch_words, load_suite};
pub use terminal::{TerminalDriver, TerminalError};
pub use vocon_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
