//! crmform-tui - Terminal UI for crmform
//!
//! Renders the host page, the create/edit modal and the discard warning with
//! ratatui, converts crossterm key events into `InputKey`s, and runs the
//! event loop around `crmform-app`'s TEA update function.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
