use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// An ordered leaderboard: one labelled key column, one value column.
///
/// This struct is the standard output of every ranking analysis and serves
/// as the data transfer object between the engine and the presentation
/// layer. Rows are already in final display order; the presentation layer
/// must not re-sort them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTable {
    pub key_label: &'static str,
    pub value_label: &'static str,
    pub rows: Vec<(String, Decimal)>,
}

impl RankedTable {
    pub fn new(key_label: &'static str, value_label: &'static str) -> Self {
        Self {
            key_label,
            value_label,
            rows: Vec::new(),
        }
    }
}

/// A season-indexed matrix with one column per selected player, used by the
/// comparison analyses. Missing season/player cells are filled with 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonMatrix {
    /// Column order; one entry per selected player.
    pub players: Vec<String>,
    /// Rows sorted ascending by season label.
    pub rows: Vec<SeasonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRow {
    pub season: String,
    /// Run totals, aligned with `SeasonMatrix::players`.
    pub values: Vec<u64>,
}

impl SeasonMatrix {
    /// The run totals of a single player's column, in row order.
    pub fn column(&self, player: &str) -> Option<Vec<u64>> {
        let idx = self.players.iter().position(|p| p == player)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }
}

/// A fixed, ordered list of named metrics (the Player Performance output).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTable {
    pub rows: Vec<(&'static str, Decimal)>,
}

/// The filtered match rows returned by the Super Over analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchList {
    pub rows: Vec<MatchSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub season: String,
    pub team1: String,
    pub team2: String,
    pub winner: Option<String>,
}

/// A single percentage figure, rendered with exactly two decimal places
/// (e.g. `60.00%`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalarPercent {
    pub value: Decimal,
}

impl fmt::Display for ScalarPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.value)
    }
}
