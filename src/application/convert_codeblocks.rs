//! Codeblock conversion use case

use super::{process_batch, scan_posts, RunOutcome};
use crate::domain::CodeblockRewriter;
use crate::error::Result;
use crate::infrastructure::PostsRepository;

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeblockOptions {
    pub recursive: bool,
    pub dry_run: bool,
}

const SUPPORTED_FORMATS: &str = "\
Supported codeblock formats:
  • {% codeblock lang:cpp %} → ```cpp
  • {% codeblock lang:cpp FordFulkerson.cpp %} → ```cpp
  • {% codeblock lang:cpp Augmenting the path %} → ```cpp
  • {% codeblock example.cpp %} → ```cpp
  • {% codeblock %} → ``` (for pseudo-code)";

/// Convert `{% codeblock %}` tags in every post.
pub fn convert_codeblocks(
    repository: &PostsRepository,
    options: CodeblockOptions,
) -> Result<RunOutcome> {
    let posts = match scan_posts(repository, options.recursive)? {
        Ok(posts) => posts,
        Err(outcome) => return Ok(outcome),
    };

    println!("Found {} markdown files to process...", posts.len());
    println!("\n{}\n", SUPPORTED_FORMATS);

    let report = process_batch(repository, &posts, &CodeblockRewriter, options.dry_run);
    Ok(RunOutcome::Completed(report))
}
