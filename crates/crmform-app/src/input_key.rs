//! Abstract input key event, independent of terminal library.
//!
//! Keeps crmform-app free of crossterm so the form state machine can be driven
//! by tests or another frontend. The TUI converts `crossterm::event::KeyEvent`
//! into `InputKey` at its boundary.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including space
    Char(char),
    /// Character with Ctrl modifier (Ctrl+s submits, Ctrl+c quits)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}
