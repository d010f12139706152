//! Application layer - Use cases and orchestration

pub mod convert_codeblocks;
pub mod convert_images;
pub mod process_file;

pub use convert_codeblocks::{convert_codeblocks, CodeblockOptions};
pub use convert_images::{convert_images, ImageOptions};
pub use process_file::{process_batch, process_file, BatchReport, FileChange, FileOutcome};

use crate::error::{MigrateError, Result};
use crate::infrastructure::PostsRepository;
use std::path::PathBuf;

/// How a conversion run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The posts directory does not exist; nothing was processed.
    MissingDirectory(PathBuf),
    /// The posts directory holds no markdown files.
    NoPosts(PathBuf),
    /// The preview found no tags that would change.
    NothingToConvert,
    /// The user declined to proceed after the preview.
    Cancelled,
    Completed(BatchReport),
}

/// Scan the posts directory, turning the "nothing to do" cases into a
/// finished run instead of an error.
pub(crate) fn scan_posts(
    repository: &PostsRepository,
    recursive: bool,
) -> Result<std::result::Result<Vec<PathBuf>, RunOutcome>> {
    match repository.scan(recursive) {
        Ok(posts) if posts.is_empty() => Ok(Err(RunOutcome::NoPosts(
            repository.root().to_path_buf(),
        ))),
        Ok(posts) => Ok(Ok(posts)),
        Err(MigrateError::DirectoryNotFound(path)) => Ok(Err(RunOutcome::MissingDirectory(path))),
        Err(e) => Err(e),
    }
}
