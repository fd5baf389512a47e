use quizgrade::{
    Answer, Grader, KeyError,
    grade::{KeySummary, QuestionSummary, SectionSummary},
};

const KEY: &str = "MC:2\nFREE:paris,lutetia:3\nMC:4\n\nMC:1\nFREE:42:5\n";

#[test]
fn parses_blank_separated_sections() {
    let grader: Grader = KEY.parse().expect("parse key");

    assert_eq!(grader.sections().len(), 2);
    assert_eq!(grader.sections()[0].len(), 3);
    assert_eq!(grader.sections()[1].len(), 2);
    assert_eq!(grader.sections()[0].answers()[0], Answer::MultipleChoice { correct: 2 });
    assert_eq!(
        grader.sections()[0].answers()[1],
        Answer::FreeResponse {
            accepted: vec!["paris".into(), "lutetia".into()],
            points:   3,
        }
    );
}

#[test]
fn display_reproduces_the_key() {
    let grader: Grader = KEY.parse().expect("parse key");
    assert_eq!(grader.to_string(), KEY);

    let reparsed: Grader = grader.to_string().parse().expect("reparse key");
    assert_eq!(reparsed, grader);
}

#[test]
fn runs_of_blank_lines_do_not_create_empty_sections() {
    let grader: Grader = "\nMC:1\n\n\n  \nMC:2\n\n".parse().expect("parse key");
    assert_eq!(grader.sections().len(), 2);
    assert!(grader.sections().iter().all(|s| s.len() == 1));
}

#[test]
fn accepts_crlf_line_endings() {
    let grader: Grader = "MC:1\r\nMC:3\r\n\r\nFREE:a,b:2\r\n".parse().expect("parse key");
    assert_eq!(grader.sections().len(), 2);
    assert_eq!(grader.sections()[1].answers()[0].max_points(), 2);
}

#[test]
fn accepted_answers_are_kept_verbatim() {
    let grader: Grader = "FREE: Paris ,rome:1".parse().expect("parse key");
    assert_eq!(
        grader.sections()[0].answers()[0],
        Answer::FreeResponse {
            accepted: vec![" Paris ".into(), "rome".into()],
            points:   1,
        }
    );
}

#[test]
fn unknown_kind_reports_tag_and_line() {
    let err = "MC:1\n\nTF:1".parse::<Grader>().unwrap_err();
    match err {
        KeyError::UnknownKind {
            line_number,
            line,
            kind,
        } => {
            assert_eq!(line_number, 3);
            assert_eq!(line, "TF:1");
            assert_eq!(kind, "TF");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_lines_are_rejected() {
    for line in ["MC:x", "MC:", "MC:1:2", "MC", "FREE:a", "FREE:a:b:2", "FREE:a:"] {
        let err = line.parse::<Grader>().unwrap_err();
        assert!(
            matches!(err, KeyError::Malformed { line_number: 1, .. }),
            "`{line}` gave {err}"
        );
    }
}

#[test]
fn one_bad_line_fails_the_whole_key() {
    assert!("MC:1\nMC:2\n\nMC:3\nFREE:x\n".parse::<Grader>().is_err());
}

#[test]
fn signed_integers_parse_like_the_key_author_wrote_them() {
    let grader: Grader = "MC:+3\nFREE:a:-1".parse().expect("parse key");
    assert_eq!(grader.sections()[0].answers()[0], Answer::MultipleChoice { correct: 3 });
    assert_eq!(grader.sections()[0].answers()[1].max_points(), -1);
}

#[test]
fn missing_key_file_is_a_read_error() {
    let path = std::env::temp_dir().join("quizgrade-definitely-missing-key.txt");
    let err = Grader::from_file(&path).unwrap_err();
    assert!(matches!(err, KeyError::Read { .. }));
}

#[test]
fn serializes_to_tagged_json() {
    let grader: Grader = "MC:2\nFREE:a,b:3".parse().expect("parse key");
    let snapshot = serde_json::to_value(&grader).unwrap();
    let answers = &snapshot["sections"][0]["answers"];
    assert_eq!(answers[0]["kind"], "multiple_choice");
    assert_eq!(answers[0]["correct"], 2);
    assert_eq!(answers[1]["kind"], "free_response");
    assert_eq!(answers[1]["accepted"][1], "b");
    assert_eq!(answers[1]["points"], 3);
}

#[test]
fn summary_describes_sections_without_answers() {
    let grader: Grader = "MC:2\nFREE:a,b:3\n\nMC:1\n".parse().expect("parse key");
    let summary = grader.summary();
    assert_eq!(
        summary,
        KeySummary {
            sections: vec![
                SectionSummary {
                    index:      1,
                    questions:  2,
                    max_points: 4,
                    answers:    vec![
                        QuestionSummary {
                            kind:   "multiple_choice",
                            points: 1,
                        },
                        QuestionSummary {
                            kind:   "free_response",
                            points: 3,
                        },
                    ],
                },
                SectionSummary {
                    index:      2,
                    questions:  1,
                    max_points: 1,
                    answers:    vec![QuestionSummary {
                        kind:   "multiple_choice",
                        points: 1,
                    }],
                },
            ],
        }
    );

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["sections"][0]["index"], 1);
    assert_eq!(json["sections"][0]["questions"], 2);
    assert_eq!(json["sections"][0]["answers"][1]["kind"], "free_response");
    assert_eq!(json["sections"][0]["answers"][1]["points"], 3);
    assert!(json["sections"][0]["answers"][1].get("accepted").is_none());
}
