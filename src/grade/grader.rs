#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    fs,
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use serde::Serialize;

use super::{
    leaderboard::{Leaderboard, RankStyle},
    review::Reviewer,
    scores,
    section::Section,
};
use crate::{
    constants::SCORE_FILE,
    error::{GradeError, KeyError},
    files,
    parsers::parse_answer,
};

/// Shape of one question, as printed by `--describe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSummary {
    /// Question type, `multiple_choice` or `free_response`.
    pub kind:   &'static str,
    /// Points awarded for a correct answer.
    pub points: i64,
}

/// Shape of one section, as printed by `--describe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    /// 1-based section number.
    pub index:      usize,
    /// Number of questions.
    pub questions:  usize,
    /// Most points available without manual review.
    pub max_points: i64,
    /// Per-question kind and points, in order.
    pub answers:    Vec<QuestionSummary>,
}

/// Shape of a whole answer key, as printed by `--describe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySummary {
    /// Sections, in key order.
    pub sections: Vec<SectionSummary>,
}

/// The parsed answer key: every section of the quiz, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grader {
    /// Sections, addressed externally from 1.
    sections: Vec<Section>,
}

impl Grader {
    /// Creates a grader from already built sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Reads and parses the answer key at `path`.
    pub fn from_file(path: &Path) -> Result<Self, KeyError> {
        let lines = files::read_lines(path).map_err(|source| KeyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let grader = Self::from_lines(&lines)?;
        tracing::info!(
            "Loaded {} sections from {}",
            grader.sections.len(),
            path.display()
        );
        Ok(grader)
    }

    /// Parses answer key lines. Blank lines separate sections; the first bad
    /// line fails the whole key.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, KeyError> {
        let mut sections = Vec::new();
        let mut current = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                if !current.is_empty() {
                    sections.push(Section::new(std::mem::take(&mut current)));
                }
                continue;
            }
            current.push(parse_answer(line, index + 1)?);
        }
        if !current.is_empty() {
            sections.push(Section::new(current));
        }

        Ok(Self { sections })
    }

    /// All sections, in key order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Describes every section's questions without their correct answers.
    pub fn summary(&self) -> KeySummary {
        let sections = self
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| SectionSummary {
                index:      index + 1,
                questions:  section.len(),
                max_points: section.max_points(),
                answers:    section
                    .answers()
                    .iter()
                    .map(|answer| QuestionSummary {
                        kind:   answer.kind(),
                        points: answer.max_points(),
                    })
                    .collect(),
            })
            .collect();
        KeySummary { sections }
    }

    /// The section numbered `number`, counting from 1.
    pub fn section(&self, number: usize) -> Result<&Section, GradeError> {
        number
            .checked_sub(1)
            .and_then(|index| self.sections.get(index))
            .ok_or(GradeError::InvalidSection {
                section:   number,
                available: self.sections.len(),
            })
    }

    /// Grades every submission of section `section` under `root` and replaces
    /// that section's score file with the results.
    ///
    /// Every entry of `root/section<N>` other than the score file is a
    /// player, named after the entry. Returns the scores written.
    pub fn grade(
        &self,
        root: &Path,
        section: usize,
        reviewer: &mut dyn Reviewer,
    ) -> Result<BTreeMap<String, i64>, GradeError> {
        let questions = self.section(section)?;
        let dir = scores::section_dir(root, section);

        let mut entries = fs::read_dir(&dir)
            .map_err(|e| GradeError::io(&dir, e))?
            .map(|entry| entry.map(|e| e.file_name()))
            .filter_ok(|name| *name != *SCORE_FILE)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GradeError::io(&dir, e))?;
        entries.sort();

        tracing::info!(
            "Grading {} submissions for section {section} ({} questions)",
            entries.len(),
            questions.len()
        );

        let mut results = BTreeMap::new();
        for name in entries {
            let player = name.to_string_lossy().into_owned();
            let report = questions.grade(&dir.join(&name), &player, section, reviewer);
            tracing::debug!("{player} scored {} in section {section}", report.score);
            results.insert(player, report.score);
        }

        scores::write_scores(&dir, &results)?;
        Ok(results)
    }

    /// Prints the leaderboard built from every score file under `root`.
    pub fn print_scores(&self, root: &Path, style: RankStyle) -> Result<(), GradeError> {
        Leaderboard::load(root)?.print(style);
        Ok(())
    }
}

impl FromStr for Grader {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(&s.lines().collect_vec())
    }
}

impl Display for Grader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sections.iter().join("\n\n"))
    }
}
