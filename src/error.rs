//! Error types for tagmigrate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the migration tools
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Directory {} does not exist!", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse tagmigrate.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MigrateError {
    /// Wrap an I/O error with the file it happened on
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MigrateError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MigrateError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MigrateError::DirectoryNotFound(path) => {
                format!(
                    "Directory {} does not exist!\n\n\
                    Suggestions:\n\
                    • Run tagmigrate from your blog root (the default directory is _posts)\n\
                    • Pass the posts directory explicitly: tagmigrate --dir path/to/_posts codeblocks\n\
                    • Set TAGMIGRATE_POSTS_DIR or posts_dir in tagmigrate.toml",
                    path.display()
                )
            }
            MigrateError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Expected tagmigrate.toml keys:\n\
                    posts_dir = \"_posts\"\n\
                    recursive = false",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MigrateError
pub type Result<T> = std::result::Result<T, MigrateError>;
