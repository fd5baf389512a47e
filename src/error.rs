#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{num::ParseIntError, path::PathBuf};

/// Errors raised while turning an answer key into a [`crate::Grader`].
#[derive(thiserror::Error, Debug)]
pub enum KeyError {
    /// The answer key file could not be read.
    #[error("could not read answer key `{}`: {source}", path.display())]
    Read {
        /// Path of the answer key.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The first field of a line names no known question type.
    #[error("line {line_number}: unknown answer type `{kind}` in `{line}`")]
    UnknownKind {
        /// 1-based line number within the key.
        line_number: usize,
        /// The offending line.
        line:        String,
        /// The unrecognised type tag.
        kind:        String,
    },
    /// A line has a known type tag but the wrong shape.
    #[error("line {line_number}: malformed answer `{line}` (expected {expected})")]
    Malformed {
        /// 1-based line number within the key.
        line_number: usize,
        /// The offending line.
        line:        String,
        /// What the parser was expecting at the failure point.
        expected:    String,
    },
}

/// Errors raised while grading a section or aggregating the leaderboard.
#[derive(thiserror::Error, Debug)]
pub enum GradeError {
    /// The requested section is not part of the answer key.
    #[error("invalid section number: {section} (answer key has {available} sections)")]
    InvalidSection {
        /// Requested 1-based section number.
        section:   usize,
        /// Number of sections in the answer key.
        available: usize,
    },
    /// A directory listing, score file write or removal failed.
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        /// Path being accessed.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A score file line is not of the form `player:score`.
    #[error("invalid score line in {section}: {line}")]
    InvalidScoreLine {
        /// Name of the section directory holding the score file.
        section: String,
        /// The offending line.
        line:    String,
    },
    /// The score part of a score file line is not an integer.
    #[error("error in {section}: invalid score in `{line}`: {source}")]
    InvalidScore {
        /// Name of the section directory holding the score file.
        section: String,
        /// The offending line.
        line:    String,
        /// Integer parse failure.
        source:  ParseIntError,
    },
}

impl GradeError {
    /// Wraps an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
