#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use bpaf::*;

use crate::grade::RankStyle;

/// Inputs for grading one section and printing the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOptions {
    /// Path to the answer key
    pub answers:     PathBuf,
    /// Root of the `section<N>` submission directories
    pub submissions: PathBuf,
    /// 1-based section to grade
    pub section:     usize,
    /// Ranking used for the leaderboard
    pub rank_style:  RankStyle,
    /// Render the leaderboard as a table
    pub table:       bool,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Grade a section, then print the combined leaderboard
    Grade(GradeOptions),
    /// Print the parsed answer key as JSON
    Describe {
        /// Path to the answer key
        answers: PathBuf,
    },
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Log at debug level
    pub verbose: bool,
    /// The requested command
    pub cmd:     Cmd,
}

/// Parse the command line arguments, falling back to `QUIZ_*` environment
/// variables for the grading inputs.
pub fn options() -> OptionParser<Options> {
    /// parses the answer key path
    fn answers_path() -> impl Parser<PathBuf> {
        long("answers")
            .env("QUIZ_ANSWERS")
            .help("Path to the answer key")
            .argument::<PathBuf>("PATH")
    }

    let verbose = short('v')
        .long("verbose")
        .help("Log debugging information")
        .switch();

    let describe_flag = long("describe")
        .help("Print the parsed answer key as JSON and exit")
        .req_flag(());
    let describe_answers = answers_path();
    let describe = construct!(describe_flag, describe_answers)
        .map(|((), answers)| Cmd::Describe { answers });

    let answers = answers_path();
    let submissions = long("submissions")
        .env("QUIZ_SUBMISSIONS")
        .help("Directory holding the section<N> submission directories")
        .argument::<PathBuf>("PATH");
    let section = long("section")
        .env("QUIZ_SECTION")
        .help("Section to grade, counting from 1")
        .argument::<usize>("N")
        .guard(|n| *n > 0, "--section must be a positive integer");
    let rank_style = long("dense")
        .help("Rank tied groups densely (1, 1, 2) instead of 1, 1, 3")
        .switch()
        .map(|dense| {
            if dense {
                RankStyle::Dense
            } else {
                RankStyle::Competition
            }
        });
    let table = long("table")
        .help("Print the leaderboard as a table")
        .switch();
    let grade = construct!(GradeOptions {
        answers,
        submissions,
        section,
        rank_style,
        table
    })
    .map(Cmd::Grade);

    let cmd = construct!([describe, grade]);

    construct!(Options { verbose, cmd })
        .to_options()
        .descr("Grades quiz submissions against an answer key")
}
