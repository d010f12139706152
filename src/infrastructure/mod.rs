//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod prompt;
pub mod repository;

pub use config::Config;
pub use prompt::{AssumeYes, Confirm, ConsolePrompt};
pub use repository::PostsRepository;
