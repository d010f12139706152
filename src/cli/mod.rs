//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_language_tables, format_outcome, CODEBLOCK_NOTES, IMAGE_NOTES};
