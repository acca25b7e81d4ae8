//! CLI module - argument parsing, dispatch and the interactive menu

mod args;
mod command;
mod menu;
mod prompts;

pub use args::{parse_base, Cli, Commands, Settings};
pub use command::{binary_mode, execute};
pub use menu::{menu_items, run_menu, MenuAction, MenuGroup, MenuItem};
pub use prompts::*;
