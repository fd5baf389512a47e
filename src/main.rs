#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # quizgrade
//!
//! Grades one section of a quiz and prints the leaderboard across every
//! section graded so far.
//!
//! ```text
//! quizgrade --answers key.txt --submissions quiz/ --section 2
//! ```

use anyhow::{Context, Result, anyhow};
use bpaf::Args;
use dotenvy::dotenv;
use quizgrade::{
    Grader, Leaderboard,
    config::{Cmd, GradeOptions, options},
    constants::{EXIT_CANNOT_PARSE, EXIT_GRADING, EXIT_NO_FLAG, EXIT_NOT_A_DIR, EXIT_PRINT_SCORES},
    files,
    grade::PromptReviewer,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// An error and the process exit code it maps to.
struct Failure {
    /// Exit code to terminate with
    code:  i32,
    /// What went wrong
    error: anyhow::Error,
}

/// Attaches an exit code to the error of a fallible step
trait WithExitCode<T> {
    /// Maps the error, if any, to a `Failure` exiting with `code`
    fn with_exit_code(self, code: i32) -> std::result::Result<T, Failure>;
}

impl<T> WithExitCode<T> for Result<T> {
    fn with_exit_code(self, code: i32) -> std::result::Result<T, Failure> {
        self.map_err(|error| Failure { code, error })
    }
}

/// Grades the requested section, then prints the combined leaderboard
fn grade(opts: GradeOptions) -> std::result::Result<(), Failure> {
    if !files::is_dir(&opts.submissions) {
        return Err(Failure {
            code:  EXIT_NOT_A_DIR,
            error: anyhow!("{} is not a directory", opts.submissions.display()),
        });
    }

    let grader = Grader::from_file(&opts.answers)
        .context("Could not parse answers")
        .with_exit_code(EXIT_CANNOT_PARSE)?;

    let mut reviewer = PromptReviewer::stdio();
    let scores = grader
        .grade(&opts.submissions, opts.section, &mut reviewer)
        .context("Error while grading")
        .with_exit_code(EXIT_GRADING)?;
    tracing::info!("Graded {} players in section {}", scores.len(), opts.section);

    if opts.table {
        let leaderboard = Leaderboard::load(&opts.submissions)
            .context("Error while printing scores")
            .with_exit_code(EXIT_PRINT_SCORES)?;
        println!("{}", leaderboard.table(opts.rank_style));
    } else {
        grader
            .print_scores(&opts.submissions, opts.rank_style)
            .context("Error while printing scores")
            .with_exit_code(EXIT_PRINT_SCORES)?;
    }

    Ok(())
}

/// Prints the parsed answer key as JSON
fn describe(answers: &std::path::Path) -> std::result::Result<(), Failure> {
    let grader = Grader::from_file(answers)
        .context("Could not parse answers")
        .with_exit_code(EXIT_CANNOT_PARSE)?;
    let summary = grader.summary();
    for section in &summary.sections {
        tracing::info!(
            "Section {}: {} questions, {} points without review",
            section.index,
            section.questions,
            section.max_points
        );
    }

    let json = serde_json::to_string_pretty(&summary)
        .context("Could not serialize answers")
        .with_exit_code(EXIT_CANNOT_PARSE)?;
    println!("{json}");
    Ok(())
}

fn main() {
    dotenv().ok();

    let opts = match options().run_inner(Args::current_args()) {
        Ok(opts) => opts,
        Err(failure) => {
            failure.print_message(100);
            let code = if failure.exit_code() == 0 { 0 } else { EXIT_NO_FLAG };
            std::process::exit(code);
        }
    };

    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let outcome = match opts.cmd {
        Cmd::Grade(grade_opts) => grade(grade_opts),
        Cmd::Describe { answers } => describe(&answers),
    };

    if let Err(Failure { code, error }) = outcome {
        eprintln!("{error:#}");
        std::process::exit(code);
    }
}
