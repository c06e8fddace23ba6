//! Interactive game flow
//!
//! Console prompts and the level-by-level session loop.

mod console;
mod session;

pub use console::{Console, Input, QUIT_COMMAND};
pub use session::{GameConfig, GameEnd, GameSession, LevelOutcome};
