//! tagmigrate - Blog post tag migration
//!
//! Rewrites legacy `{% codeblock %}` and `{% img %}` template tags in a
//! directory of markdown posts into fenced code blocks and markdown images.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MigrateError;
