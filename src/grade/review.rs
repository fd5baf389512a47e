#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::{self, Display},
    io::{self, BufRead, StdinLock, Stdout, Write},
};

use itertools::Itertools;

use super::answer::QuestionRef;

/// A free response answer that matched none of the accepted answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest<'a> {
    /// Where the answer sits.
    pub at:       QuestionRef<'a>,
    /// The normalized answer as submitted.
    pub answer:   String,
    /// Answers the key accepts.
    pub accepted: &'a [String],
}

impl Display for ReviewRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} replied '{}', best=[{}]",
            self.at,
            self.answer,
            self.accepted.iter().join(", ")
        )
    }
}

/// Supplies human judgement for answers that cannot be scored automatically.
pub trait Reviewer {
    /// Returns the points to award for `request`.
    fn review(&mut self, request: &ReviewRequest<'_>) -> i64;
}

/// Asks an operator for a score on a terminal-like pair of streams.
///
/// One token is read per line until a non-negative integer is given. End of
/// input, a read error, an empty line or more than one token all count as 0.
pub struct PromptReviewer<R, W> {
    /// Where operator replies come from.
    input:  R,
    /// Where prompts go.
    output: W,
}

impl<R: BufRead, W: Write> PromptReviewer<R, W> {
    /// Creates a reviewer reading from `input` and prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output stream, mostly so tests can inspect prompts.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `text` without a newline and flushes it.
    fn prompt(&mut self, text: impl Display) {
        // Write failures on the prompt stream are ignored.
        let _ = write!(self.output, "{text}");
        let _ = self.output.flush();
    }
}

impl PromptReviewer<StdinLock<'static>, Stdout> {
    /// A reviewer on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Reviewer for PromptReviewer<R, W> {
    fn review(&mut self, request: &ReviewRequest<'_>) -> i64 {
        self.prompt(format_args!("{request}, points? "));
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return 0,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Could not read a score for {}: {e}", request.at);
                    return 0;
                }
            }

            let Some(token) = line.split_whitespace().exactly_one().ok() else {
                return 0;
            };
            match token.parse::<i64>() {
                Ok(points) if points >= 0 => return points,
                _ => {
                    tracing::debug!("Rejected score `{token}` for {}", request.at);
                    self.prompt("points? ");
                }
            }
        }
    }
}
