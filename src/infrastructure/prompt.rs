//! Yes/no confirmation prompts

use crate::error::Result;
use std::io::{BufRead, Write};

/// Source of yes/no answers
pub trait Confirm {
    /// Ask a question; anything but an explicit yes is a no.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Whether a typed answer means yes (`y` or `yes`, any case)
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Prompt that writes questions to `output` and reads answers line by line
/// from `input`.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePrompt { input, output }
    }
}

impl ConsolePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        ConsolePrompt::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for ConsolePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{} (y/N): ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF leaves the answer empty, which reads as "no".
        self.input.read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

/// Answers every question with yes, for `--yes`
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}
