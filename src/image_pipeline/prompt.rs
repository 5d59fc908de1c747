//! Yes/no confirmation before automatic conversion.

use std::io::{self, BufRead, Write};

use crate::image_pipeline::common::error::Result;

pub trait Prompt {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Asks on a line-oriented reader/writer pair, normally stdin/stdout.
///
/// Anything other than y/yes/n/no is answered with "Invalid selection" and
/// the question is repeated. End of input counts as a decline.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            write!(self.output, "{} [y/n]: ", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid selection")?,
            }
        }
    }
}

/// Confirms everything without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}
