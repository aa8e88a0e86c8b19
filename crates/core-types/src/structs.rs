use crate::enums::BatterColumn;
use serde::{Deserialize, Serialize};

/// One completed fixture.
///
/// `winner` is `None` for abandoned or tied-without-result games. The
/// `toss_winner` and `super_over` columns are optional in the source data;
/// whether they were present at all is recorded in [`MatchSchema`], not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u64,
    pub season: String,
    pub team1: String,
    pub team2: String,
    pub winner: Option<String>,
    pub player_of_match: Option<String>,
    pub venue: String,
    pub toss_winner: Option<String>,
    pub super_over: Option<bool>,
}

/// One ball bowled within a match.
///
/// `batsman_runs` are the runs credited to the batter; `total_runs` includes
/// extras and is always at least `batsman_runs`. `player_dismissed` is set
/// only on balls that ended in a dismissal. `ball` is a sequence marker
/// within the over and is only ever counted, never summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub match_id: u64,
    pub batting_team: String,
    pub bowler: String,
    pub batter: String,
    pub batsman_runs: u32,
    pub total_runs: u32,
    pub player_dismissed: Option<String>,
    pub ball: u32,
}

/// The result of the one-time delivery schema resolution performed at load.
///
/// The loader decides once which legacy name the batter column carries and
/// normalizes every row to `DeliveryRecord::batter`; downstream code never
/// re-checks the raw header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySchema {
    pub batter_column: BatterColumn,
}

/// Which optional match columns were present in the source data.
///
/// Analyses that depend on an absent column must be reported as unavailable,
/// which is distinct from returning an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSchema {
    pub has_toss_winner: bool,
    pub has_super_over: bool,
}
