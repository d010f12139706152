//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagmigrate")]
#[command(
    about = "Convert legacy {% codeblock %} and {% img %} tags in blog posts to plain markdown",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Posts directory (default: _posts, or posts_dir from tagmigrate.toml)
    #[arg(long, global = true, env = "TAGMIGRATE_POSTS_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Also visit posts in subdirectories (dot directories are skipped)
    #[arg(short, long, global = true)]
    pub recursive: bool,

    /// Only visit posts directly inside the directory, even if tagmigrate.toml says otherwise
    #[arg(long, global = true, conflicts_with = "recursive")]
    pub no_recursive: bool,

    /// Log every file that gets rewritten
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Recursion requested on the command line, if any
    pub fn recursive_override(&self) -> Option<bool> {
        match (self.recursive, self.no_recursive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert {% codeblock %} tags to fenced code blocks
    Codeblocks {
        /// Report what would change without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert {% img %} tags to markdown images
    Images {
        /// Report what would change without writing files
        #[arg(long)]
        dry_run: bool,

        /// Skip the preview and confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the language and file extension lookup tables
    Languages,
}
