//! # quizgrade
//!
//! Grades quiz submissions stored as flat files against an instructor's
//! answer key, persists per-section scores and prints a ranked leaderboard.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Command line configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Error types for answer key parsing and grading
pub mod error;
/// Thin file access helpers
pub mod files;
/// For all things related to grading
pub mod grade;
/// For all parsers used
pub mod parsers;

pub use error::{GradeError, KeyError};
pub use grade::{Answer, Grader, Leaderboard, RankStyle, Section};
