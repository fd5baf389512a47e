#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Questions of the answer key and how a single answer is graded.
pub mod answer;
/// Soft diagnostics raised while grading.
pub mod flag;
/// The answer key as a whole, and per-section grading runs.
pub mod grader;
/// Aggregation and ranking of totals across sections.
pub mod leaderboard;
/// Manual scoring of unmatched free responses.
pub mod review;
/// Reading and writing per-section score files.
pub mod scores;
/// Groups of questions and submission splitting.
pub mod section;

pub use answer::{Answer, Evaluation, Graded, Outcome, QuestionRef};
pub use flag::Flag;
pub use grader::{Grader, KeySummary, QuestionSummary, SectionSummary};
pub use leaderboard::{Leaderboard, RankStyle, Standing};
pub use review::{PromptReviewer, ReviewRequest, Reviewer};
pub use section::{Section, SectionReport, split_submission};
