use std::path::PathBuf;

use quizgrade::{
    RankStyle,
    config::{Cmd, GradeOptions, Options, options},
};

fn parse(args: &[&str]) -> Option<Options> {
    options().run_inner(args).ok()
}

#[test]
fn parses_the_grading_flags() {
    let opts = parse(&["--answers", "key.txt", "--submissions", "quiz", "--section", "2"])
        .expect("parse grading flags");

    assert!(!opts.verbose);
    assert_eq!(
        opts.cmd,
        Cmd::Grade(GradeOptions {
            answers:     PathBuf::from("key.txt"),
            submissions: PathBuf::from("quiz"),
            section:     2,
            rank_style:  RankStyle::Competition,
            table:       false,
        })
    );
}

#[test]
fn leaderboard_switches_are_optional() {
    let opts = parse(&[
        "-v",
        "--answers",
        "key.txt",
        "--submissions",
        "quiz",
        "--section",
        "1",
        "--dense",
        "--table",
    ])
    .expect("parse switches");

    assert!(opts.verbose);
    let Cmd::Grade(grade) = opts.cmd else {
        panic!("expected the grade command");
    };
    assert_eq!(grade.rank_style, RankStyle::Dense);
    assert!(grade.table);
}

#[test]
fn section_must_be_a_positive_integer() {
    assert!(parse(&["--answers", "k", "--submissions", "s", "--section", "0"]).is_none());
    assert!(parse(&["--answers", "k", "--submissions", "s", "--section", "two"]).is_none());
}

#[test]
fn describe_only_needs_the_answer_key() {
    let opts = parse(&["--describe", "--answers", "key.txt"]).expect("parse describe");
    assert_eq!(
        opts.cmd,
        Cmd::Describe {
            answers: PathBuf::from("key.txt"),
        }
    );
}
