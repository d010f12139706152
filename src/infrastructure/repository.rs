//! File system access to the posts directory

use crate::error::{MigrateError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as blog posts
pub const POST_EXTENSIONS: [&str; 2] = [".md", ".markdown"];

/// Directory of markdown posts to migrate
#[derive(Debug, Clone)]
pub struct PostsRepository {
    root: PathBuf,
}

impl PostsRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        PostsRepository { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Hidden files (including `._*` resource forks) are never posts.
    fn is_post(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                !name.starts_with('.') && POST_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
            })
    }

    /// List post files, sorted by path.
    ///
    /// Non-recursive scans only look at files directly inside the root.
    /// Recursive scans skip dot directories.
    pub fn scan(&self, recursive: bool) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(MigrateError::DirectoryNotFound(self.root.clone()));
        }

        let mut posts = if recursive {
            self.collect_recursive_posts()
        } else {
            self.collect_root_posts()?
        };

        posts.sort();
        tracing::debug!(
            root = %self.root.display(),
            count = posts.len(),
            recursive,
            "scanned posts directory"
        );
        Ok(posts)
    }

    fn collect_root_posts(&self) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(&self.root).map_err(|e| MigrateError::file_access(&self.root, e))?;
        let mut posts = Vec::new();

        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if path.is_file() && Self::is_post(&path) {
                posts.push(path);
            }
        }

        Ok(posts)
    }

    fn collect_recursive_posts(&self) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && Self::is_post(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Read a post as UTF-8 text
    pub fn read_post(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| MigrateError::file_access(path, e))
    }

    /// Overwrite a post in place.
    ///
    /// Writing through the existing path follows symlinks and keeps the
    /// file's permissions.
    pub fn write_post(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| MigrateError::file_access(path, e))
    }

    /// Path relative to the root, for display
    pub fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}
