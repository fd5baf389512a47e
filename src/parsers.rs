#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{error::KeyError, grade::Answer};

peg::parser! {
    /// includes the grammar of a single answer key line.
    pub grammar parser() for str {
        /// matches an optionally signed sequence of digits
        rule integer() -> i64
            = n:$(['+' | '-']? ['0'..='9']+) {? n.parse().or(Err("i64")) }

        /// matches the comma-separated list of accepted answers; an empty
        /// field is a single empty accepted answer
        rule accepted() -> Vec<String>
            = a:$([^ ':']*) { a.split(',').map(str::to_owned).collect() }

        /// matches a multiple choice answer, eg. `MC:3`
        rule multiple_choice() -> Answer
            = "MC:" correct:integer() { Answer::MultipleChoice { correct } }

        /// matches a free response answer, eg. `FREE:paris,lutetia:2`
        rule free_response() -> Answer
            = "FREE:" accepted:accepted() ":" points:integer() {
                Answer::FreeResponse { accepted, points }
            }

        /// parses one non-blank answer key line
        pub rule answer() -> Answer
            = a:(multiple_choice() / free_response()) ![_] { a }
    }
}

/// Parses one non-blank answer key line.
///
/// * `line`: the line, terminator already stripped
/// * `line_number`: 1-based position of the line, used in errors
pub fn parse_answer(line: &str, line_number: usize) -> Result<Answer, KeyError> {
    parser::answer(line).map_err(|e| {
        let kind = line.split(':').next().unwrap_or_default();
        match kind {
            Answer::MULTIPLE_CHOICE_TAG | Answer::FREE_RESPONSE_TAG => KeyError::Malformed {
                line_number,
                line: line.to_owned(),
                expected: e.expected.to_string(),
            },
            _ => KeyError::UnknownKind {
                line_number,
                line: line.to_owned(),
                kind: kind.to_owned(),
            },
        }
    })
}
