#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    fs,
    path::Path,
};

use itertools::Itertools;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use super::scores;
use crate::{error::GradeError, files};

/// How tied groups affect the rank of the groups below them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStyle {
    /// Rank is one plus the number of players scoring strictly more
    /// (`1, 1, 3`).
    #[default]
    Competition,
    /// Rank is one plus the number of distinct higher totals (`1, 1, 2`).
    Dense,
}

/// Players sharing a rank and the total they tied on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based rank of the group.
    pub rank:    usize,
    /// Players tied at this rank, by name.
    pub players: Vec<String>,
    /// Total score across all sections.
    pub score:   i64,
}

#[derive(Tabled)]
/// A standing flattened for display in a table
struct StandingRow {
    #[tabled(rename = "Rank")]
    /// * `rank`: 1-based rank of the group
    rank:    usize,
    #[tabled(rename = "Players")]
    /// * `players`: comma-separated players tied at this rank
    players: String,
    #[tabled(rename = "Score")]
    /// * `score`: total score across all sections
    score:   i64,
}

impl From<Standing> for StandingRow {
    fn from(standing: Standing) -> Self {
        Self {
            rank:    standing.rank,
            players: join_players(&standing.players),
            score:   standing.score,
        }
    }
}

/// Renders the players of a standing.
fn join_players(players: &[String]) -> String {
    players.join(", ")
}

impl Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.rank, join_players(&self.players), self.score)
    }
}

/// Per-player totals summed over every section's score file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    /// Running total per player.
    totals: BTreeMap<String, i64>,
}

impl Leaderboard {
    /// An empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums the score files of every directory directly under `root`.
    /// Directories without a score file are skipped; a malformed score file
    /// fails the whole computation.
    pub fn load(root: &Path) -> Result<Self, GradeError> {
        let mut entries = fs::read_dir(root)
            .map_err(|e| GradeError::io(root, e))?
            .map(|entry| entry.map(|e| e.path()))
            .filter_ok(|path| files::is_dir(path))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GradeError::io(root, e))?;
        entries.sort();

        let mut leaderboard = Self::new();
        for dir in entries {
            let Some(scores) = scores::read_scores(&dir)? else {
                continue;
            };
            tracing::debug!("Read {} scores from {}", scores.len(), dir.display());
            for (player, score) in scores {
                leaderboard.add(player, score);
            }
        }
        Ok(leaderboard)
    }

    /// Adds `points` to `player`'s total, saturating at the `i64` bounds.
    pub fn add(&mut self, player: impl Into<String>, points: i64) {
        let total = self.totals.entry(player.into()).or_insert(0);
        *total = total.saturating_add(points);
    }

    /// Totals by player name.
    pub fn totals(&self) -> &BTreeMap<String, i64> {
        &self.totals
    }

    /// Groups players by total, highest first, and ranks the groups.
    pub fn standings(&self, style: RankStyle) -> Vec<Standing> {
        // Totals are already ordered by name, and the sort is stable.
        let sorted = self
            .totals
            .iter()
            .sorted_by(|(_, a), (_, b)| b.cmp(a))
            .collect_vec();

        let mut standings: Vec<Standing> = Vec::new();
        let mut ahead = 0;
        for (score, group) in &sorted.into_iter().chunk_by(|(_, score)| **score) {
            let players = group.map(|(player, _)| player.clone()).collect_vec();
            let rank = match style {
                RankStyle::Competition => ahead + 1,
                RankStyle::Dense => standings.len() + 1,
            };
            ahead += players.len();
            standings.push(Standing {
                rank,
                players,
                score,
            });
        }
        standings
    }

    /// One `<rank>. <players> (<score>)` line per rank.
    pub fn lines(&self, style: RankStyle) -> Vec<String> {
        self.standings(style)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Prints the leaderboard lines on stdout.
    pub fn print(&self, style: RankStyle) {
        for line in self.lines(style) {
            println!("{line}");
        }
    }

    /// Renders the standings as a table.
    pub fn table(&self, style: RankStyle) -> String {
        let rows = self.standings(style).into_iter().map(StandingRow::from);
        Table::new(rows)
            .with(Panel::header("Leaderboard"))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }
}
