//! Output formatting utilities

use crate::application::{BatchReport, RunOutcome};
use crate::domain::language::{EXTENSION_LANGUAGES, LANGUAGE_ALIASES};

pub const CODEBLOCK_NOTES: &str = "\
Recommendation: Review the converted files to ensure the language
identifiers are correct and the code formatting looks good.

Example conversions:
  {% codeblock lang:python %} → ```python
  {% codeblock lang:cpp main.cpp %} → ```cpp
  {% codeblock lang:java Finding the solution %} → ```java
  {% codeblock main.cpp %} → ```cpp
  {% codeblock algorithm %} → ``` (pseudo-code)";

pub const IMAGE_NOTES: &str = "\
Notes:
• Alignment information (center, left, right) is preserved as HTML comments
• Alt text is preserved when provided
• When no alt text is provided, filename is used as alt text
• Review the converted files to ensure images display correctly";

/// Format the end of a run for display.
///
/// `review_notes` are appended when files were actually rewritten.
pub fn format_outcome(outcome: &RunOutcome, review_notes: &str) -> String {
    match outcome {
        RunOutcome::MissingDirectory(path) => {
            format!("Directory {} does not exist!", path.display())
        }
        RunOutcome::NoPosts(path) => {
            format!("No markdown files found in {}.", path.display())
        }
        RunOutcome::NothingToConvert => "\nNo image tags found to convert.".to_string(),
        RunOutcome::Cancelled => "Conversion cancelled.".to_string(),
        RunOutcome::Completed(report) => {
            let mut output = format_summary(report);
            if report.changed_files > 0 && !report.dry_run && !review_notes.is_empty() {
                output.push('\n');
                output.push_str(review_notes);
            }
            output
        }
    }
}

/// Format the counters of a finished batch
pub fn format_summary(report: &BatchReport) -> String {
    let mut output = String::new();

    if report.dry_run {
        output.push_str("\nDry run complete! No files were modified.\n");
        output.push_str(&format!("Files processed: {}\n", report.scanned_files));
        output.push_str(&format!("Files that would change: {}\n", report.changed_files));
        output.push_str(&format!(
            "Total {}s that would be converted: {}\n",
            report.label, report.total_conversions
        ));
    } else {
        output.push_str("\nConversion complete!\n");
        output.push_str(&format!("Files processed: {}\n", report.scanned_files));
        output.push_str(&format!("Files with conversions: {}\n", report.changed_files));
        output.push_str(&format!(
            "Total {}s converted: {}\n",
            report.label, report.total_conversions
        ));
    }

    if !report.failed_files.is_empty() {
        output.push_str(&format!(
            "Files skipped due to errors: {}\n",
            report.failed_files.len()
        ));
        for filename in &report.failed_files {
            output.push_str(&format!("  • {}\n", filename));
        }
    }

    output
}

/// Format both language lookup tables
pub fn format_language_tables() -> String {
    let mut output = String::from("lang:NAME values\n");
    for (name, language) in LANGUAGE_ALIASES {
        output.push_str(&format!("  {:<12} → {}\n", name, language));
    }

    output.push_str("\nFilename extensions\n");
    for (extension, language) in EXTENSION_LANGUAGES {
        output.push_str(&format!("  {:<12} → {}\n", extension, language));
    }

    output
}
