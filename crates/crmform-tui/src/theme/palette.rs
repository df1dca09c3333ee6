//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(30, 30, 40);
pub const WARNING_BG: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Inputs and buttons ---
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);
pub const INPUT_INACTIVE_BG: Color = Color::Rgb(40, 40, 50);
pub const BUTTON_INACTIVE_BG: Color = Color::Rgb(50, 50, 60);
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(35, 35, 42);
