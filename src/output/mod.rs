//! Terminal output formatting
//!
//! Board rendering and the game's fixed screens.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_intro, print_level_cleared, print_level_header, print_warning,
};
pub use formatters::board_lines;
