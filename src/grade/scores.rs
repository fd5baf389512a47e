#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;

use crate::{
    constants::{SCORE_FILE, SECTION_DIR_PREFIX},
    error::GradeError,
    files,
};

/// Directory holding the submissions of 1-based `section` under `root`.
pub fn section_dir(root: &Path, section: usize) -> PathBuf {
    root.join(format!("{SECTION_DIR_PREFIX}{section}"))
}

/// Score file of the section directory `dir`.
pub fn score_file(dir: &Path) -> PathBuf {
    dir.join(SCORE_FILE)
}

/// Replaces the score file in `dir` with one `player:score` line per player.
pub fn write_scores(dir: &Path, scores: &BTreeMap<String, i64>) -> Result<(), GradeError> {
    let path = score_file(dir);
    if files::exists(&path) {
        fs::remove_file(&path).map_err(|e| GradeError::io(&path, e))?;
    }

    let contents: String = scores
        .iter()
        .map(|(player, score)| format!("{player}:{score}\n"))
        .collect();
    fs::write(&path, contents).map_err(|e| GradeError::io(&path, e))?;

    tracing::debug!("Wrote {} scores to {}", scores.len(), path.display());
    Ok(())
}

/// Parses one `player:score` line of the score file of `section`.
pub fn parse_score_line(section: &str, line: &str) -> Result<(String, i64), GradeError> {
    let Some((player, score)) = line.split(':').collect_tuple() else {
        return Err(GradeError::InvalidScoreLine {
            section: section.to_owned(),
            line:    line.to_owned(),
        });
    };

    let score = score.parse::<i64>().map_err(|source| GradeError::InvalidScore {
        section: section.to_owned(),
        line: line.to_owned(),
        source,
    })?;
    Ok((player.to_owned(), score))
}

/// Reads the score file of the section directory `dir`, if it has one.
pub fn read_scores(dir: &Path) -> Result<Option<Vec<(String, i64)>>, GradeError> {
    let path = score_file(dir);
    if !files::exists(&path) {
        return Ok(None);
    }

    let section = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let lines = files::read_lines(&path).map_err(|e| GradeError::io(&path, e))?;

    lines
        .iter()
        .map(|line| parse_score_line(&section, line))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
