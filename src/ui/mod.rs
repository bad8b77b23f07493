pub mod command;
pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use render::{render_token_table, truncate_to_width};
pub use terminal::{handle_key, TuiManager};
pub use terminal_guard::TerminalGuard;
