//! CLI module - argument parsing, prompts, input browsing and the wizard

pub mod args;
pub mod browser;
pub mod prompts;
pub mod wizard;

pub use args::Cli;
pub use browser::{browse_for_file, select_directory, BrowseEntry, BrowseResult, Browser};
pub use prompts::*;
pub use wizard::*;
