//! Color constants for the terminal user interface.

use ratatui::style::Color;

// One accent per display bucket, used for column borders
// and the selected-card highlight.

/// Used for To Do
pub const SLATE_BLUE: Color = Color::Rgb(71, 105, 170);
/// Used for In Progress
pub const AMBER: Color = Color::Rgb(216, 160, 35);
/// Used for Done
pub const MOSS_GREEN: Color = Color::Rgb(70, 130, 70);
/// Used for Rejected
pub const BRICK_RED: Color = Color::Rgb(150, 54, 47);
