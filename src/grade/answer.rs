#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::{self, Display};

use itertools::Itertools;
use serde::Serialize;

use super::{
    flag::Flag,
    review::{ReviewRequest, Reviewer},
};

/// Identifies one question of one player's submission, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRef<'a> {
    /// Player whose submission is being graded.
    pub player:   &'a str,
    /// 1-based section number.
    pub section:  usize,
    /// 1-based question number within the section.
    pub question: usize,
}

impl Display for QuestionRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in section {} question {}", self.player, self.section, self.question)
    }
}

/// One question of the answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    /// Worth one point when the 1-indexed `correct` option is chosen.
    MultipleChoice {
        /// The correct option, 1-indexed.
        correct: i64,
    },
    /// Worth `points` when the normalized submission equals one of `accepted`.
    FreeResponse {
        /// Accepted answers, compared verbatim.
        accepted: Vec<String>,
        /// Points awarded for an accepted answer.
        points:   i64,
    },
}

/// What evaluating a submitted answer led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The answer could be scored automatically.
    Scored(i64),
    /// A human has to decide the score.
    NeedsReview(ReviewRequest<'a>),
}

impl Outcome<'_> {
    /// Turns the outcome into points, asking `reviewer` when needed.
    pub fn resolve(self, reviewer: &mut dyn Reviewer) -> i64 {
        match self {
            Outcome::Scored(points) => points,
            Outcome::NeedsReview(request) => reviewer.review(&request),
        }
    }
}

/// Result of evaluating one submitted answer, before any human input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'a> {
    /// Score, or the request a reviewer has to answer.
    pub outcome: Outcome<'a>,
    /// Suspicious input worth a second look. Never affects the score.
    pub flag:    Option<Flag>,
}

/// A fully graded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graded {
    /// Points awarded.
    pub points: i64,
    /// Flag raised while grading, if any.
    pub flag:   Option<Flag>,
}

/// Trims and lower-cases a submitted answer.
pub fn normalize(submission: &str) -> String {
    submission.trim().to_lowercase()
}

/// Resolves a normalized multiple choice submission to a 1-indexed option.
///
/// Numbers are taken as-is, anything else is read as a letter (`a` is 1).
/// Empty input chooses nothing.
pub fn chosen_option(normalized: &str) -> Option<i64> {
    if let Ok(option) = normalized.parse::<i64>() {
        return Some(option);
    }
    normalized
        .chars()
        .next()
        .map(|c| i64::from(u32::from(c)) - i64::from(u32::from('a')) + 1)
}

impl Answer {
    /// Type tag of multiple choice lines in the answer key.
    pub const MULTIPLE_CHOICE_TAG: &'static str = "MC";
    /// Type tag of free response lines in the answer key.
    pub const FREE_RESPONSE_TAG: &'static str = "FREE";

    /// Snake-case name of the question type, as used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Answer::MultipleChoice { .. } => "multiple_choice",
            Answer::FreeResponse { .. } => "free_response",
        }
    }

    /// Most points this answer can award without manual review.
    pub fn max_points(&self) -> i64 {
        match self {
            Answer::MultipleChoice { .. } => 1,
            Answer::FreeResponse { points, .. } => *points,
        }
    }

    /// Evaluates `submission` without asking anyone.
    pub fn evaluate<'a>(&'a self, submission: &str, at: QuestionRef<'a>) -> Evaluation<'a> {
        let normalized = normalize(submission);
        match self {
            Answer::MultipleChoice { correct } => {
                let flag = (!normalized.is_empty() && normalized.chars().count() != 1)
                    .then(|| Flag::ambiguous_choice(at));
                let points = match chosen_option(&normalized) {
                    Some(option) if option == *correct => 1,
                    _ => 0,
                };
                Evaluation {
                    outcome: Outcome::Scored(points),
                    flag,
                }
            }
            Answer::FreeResponse { accepted, points } => {
                let outcome = if accepted.iter().any(|a| *a == normalized) {
                    Outcome::Scored(*points)
                } else {
                    Outcome::NeedsReview(ReviewRequest {
                        at,
                        answer: normalized,
                        accepted,
                    })
                };
                Evaluation {
                    outcome,
                    flag: None,
                }
            }
        }
    }

    /// Grades `submission`, handing unmatched free responses to `reviewer`.
    pub fn grade(
        &self,
        submission: &str,
        at: QuestionRef<'_>,
        reviewer: &mut dyn Reviewer,
    ) -> Graded {
        let Evaluation { outcome, flag } = self.evaluate(submission, at);
        Graded {
            points: outcome.resolve(reviewer),
            flag,
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::MultipleChoice { correct } => {
                write!(f, "{}:{correct}", Self::MULTIPLE_CHOICE_TAG)
            }
            Answer::FreeResponse { accepted, points } => {
                write!(f, "{}:{}:{points}", Self::FREE_RESPONSE_TAG, accepted.iter().join(","))
            }
        }
    }
}
