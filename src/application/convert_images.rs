//! Image tag conversion use case, with an optional interactive preview

use super::{process_batch, scan_posts, RunOutcome};
use crate::domain::{preview_image_conversions, Conversion, ImageRewriter};
use crate::error::Result;
use crate::infrastructure::{Confirm, PostsRepository};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageOptions {
    pub recursive: bool,
    pub dry_run: bool,
    /// Skip both prompts and convert straight away.
    pub assume_yes: bool,
}

const SUPPORTED_FORMATS: &str = "\
Supported image tag formats:
  • {% img center /images/pic.jpg Alt text %} → <!-- center --> ![Alt text](/images/pic.jpg)
  • {% img /images/pic.jpg Alt text %} → ![Alt text](/images/pic.jpg)
  • {% img center /images/pic.jpg %} → <!-- center --> ![pic](/images/pic.jpg)
  • {% img /images/pic.jpg %} → ![pic](/images/pic.jpg)";

const PREVIEW_QUESTION: &str = "Would you like to preview conversions before applying them?";
const PROCEED_QUESTION: &str = "\nProceed with actual conversion?";

/// Convert `{% img %}` tags in every post.
///
/// Unless `assume_yes` or `dry_run` is set, the user is first offered a
/// preview; after a preview nothing is written without a second yes.
pub fn convert_images(
    repository: &PostsRepository,
    options: ImageOptions,
    prompt: &mut dyn Confirm,
) -> Result<RunOutcome> {
    let posts = match scan_posts(repository, options.recursive)? {
        Ok(posts) => posts,
        Err(outcome) => return Ok(outcome),
    };

    println!("Found {} markdown files to process...", posts.len());
    println!("\n{}\n", SUPPORTED_FORMATS);

    let interactive = !options.assume_yes && !options.dry_run;
    if interactive && prompt.confirm(PREVIEW_QUESTION)? {
        println!("\n{}", "=".repeat(60));
        println!("PREVIEW MODE - No files will be modified");
        println!("{}", "=".repeat(60));

        let total = print_preview(repository, &posts);
        if total == 0 {
            return Ok(RunOutcome::NothingToConvert);
        }

        println!("\nTotal conversions found: {}", total);
        if !prompt.confirm(PROCEED_QUESTION)? {
            return Ok(RunOutcome::Cancelled);
        }
        println!();
    }

    let report = process_batch(repository, &posts, &ImageRewriter, options.dry_run);
    Ok(RunOutcome::Completed(report))
}

/// Print pending conversions grouped by file and return how many there are.
fn print_preview(repository: &PostsRepository, posts: &[PathBuf]) -> usize {
    let mut total = 0usize;

    for path in posts {
        let content = match repository.read_post(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot preview post");
                eprintln!("Error reading {}", e);
                continue;
            }
        };

        let conversions = preview_image_conversions(&content);
        if conversions.is_empty() {
            continue;
        }

        println!("\n{}:", repository.display_name(path));
        print!("{}", format_conversions(&conversions));
        total += conversions.len();
    }

    total
}

fn format_conversions(conversions: &[Conversion]) -> String {
    let mut output = String::new();
    for (i, conversion) in conversions.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, conversion.original));
        output.push_str(&format!("     → {}\n", conversion.converted));
    }
    output
}
