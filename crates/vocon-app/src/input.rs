//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the round engine from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (submit).
    Enter,
    /// Backspace key (delete last character).
    Backspace,
    /// Tab key (switch subject).
    Tab,
    /// Escape key (quit or cancel).
    Esc,
}
