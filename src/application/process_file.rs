//! Per-file read, rewrite and write-back

use crate::domain::TagRewriter;
use crate::error::Result;
use crate::infrastructure::PostsRepository;
use std::path::{Path, PathBuf};

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file never mentions the tag.
    NoTags,
    /// Tags were found but rewriting them changed nothing.
    Unchanged,
    /// The file was (or in a dry run, would be) rewritten.
    Converted { conversions: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub filename: String,
    pub conversions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub label: &'static str,
    pub scanned_files: usize,
    pub changed_files: usize,
    pub total_conversions: usize,
    pub failed_files: Vec<String>,
    pub dry_run: bool,
    pub changes: Vec<FileChange>,
}

/// Rewrite one file in place.
pub fn process_file(
    repository: &PostsRepository,
    path: &Path,
    rewriter: &dyn TagRewriter,
    dry_run: bool,
) -> Result<FileOutcome> {
    let content = repository.read_post(path)?;
    if !content.contains(rewriter.marker()) {
        return Ok(FileOutcome::NoTags);
    }

    let result = rewriter.rewrite(&content);
    if !rewriter.writes_unchanged() && result.content == content {
        return Ok(FileOutcome::Unchanged);
    }

    if !dry_run {
        repository.write_post(path, &result.content)?;
        tracing::info!(path = %path.display(), conversions = result.conversions, "rewrote post");
    }

    Ok(FileOutcome::Converted {
        conversions: result.conversions,
    })
}

/// Process files in order, printing one progress line per file.
///
/// A failure on one file is reported and the batch moves on.
pub fn process_batch(
    repository: &PostsRepository,
    files: &[PathBuf],
    rewriter: &dyn TagRewriter,
    dry_run: bool,
) -> BatchReport {
    let label = rewriter.label();
    let mut changes = Vec::new();
    let mut failed_files = Vec::new();

    for path in files {
        let filename = repository.display_name(path);
        println!("Processing: {}", filename);

        match process_file(repository, path, rewriter, dry_run) {
            Ok(FileOutcome::Converted { conversions }) => {
                let verb = if dry_run { "Would convert" } else { "Converted" };
                println!("  ✓ {} {} {}(s) in {}", verb, conversions, label, filename);
                changes.push(FileChange {
                    filename,
                    conversions,
                });
            }
            Ok(FileOutcome::Unchanged) => {
                println!("  - Nothing to convert in {}", filename);
            }
            Ok(FileOutcome::NoTags) => {
                println!("  - No {}s found in {}", label, filename);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping post");
                eprintln!("Error processing {}", e);
                failed_files.push(filename);
            }
        }
    }

    BatchReport {
        label,
        scanned_files: files.len(),
        changed_files: changes.len(),
        total_conversions: changes.iter().map(|c| c.conversions).sum(),
        failed_files,
        dry_run,
        changes,
    }
}
