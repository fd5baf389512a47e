#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Name of the file each section directory keeps its scores in.
pub const SCORE_FILE: &str = "__score";

/// Prefix of every section directory under the submissions root, followed by
/// the 1-based section number.
pub const SECTION_DIR_PREFIX: &str = "section";

/// Delimiters tried, in order, when splitting a submission into answers.
pub const SUBMISSION_DELIMITERS: [&str; 8] = [",", ";", ".", ":", "/", "\\", "|", "||"];

/// Marker printed in front of every soft diagnostic.
pub const FLAG_MARKER: &str = "FLAG!";

/// Exit code when a required flag is missing or invalid.
pub const EXIT_NO_FLAG: i32 = 1;
/// Exit code when the answer key cannot be parsed.
pub const EXIT_CANNOT_PARSE: i32 = 3;
/// Exit code when the submissions path is not a directory.
pub const EXIT_NOT_A_DIR: i32 = 5;
/// Exit code when grading a section fails.
pub const EXIT_GRADING: i32 = 7;
/// Exit code when the leaderboard cannot be computed.
pub const EXIT_PRINT_SCORES: i32 = 9;
