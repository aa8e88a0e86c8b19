//! # Selection Dispatcher
//!
//! Maps a `(category, analysis, parameters)` selection from the
//! presentation layer onto the matching `AnalysisCatalog` entry and returns
//! its result unchanged. The dispatcher is stateless; all data lives in the
//! borrowed `DataStore`.
//!
//! The match over `AnalysisKind` is exhaustive, so the compiler refuses a
//! new analysis variant that is not wired up here. A kind requested under
//! the wrong category, or a selection missing a required parameter, is an
//! explicit error rather than an empty table.

use catalog::{AnalysisCatalog, MatchList, MetricTable, RankedTable, ScalarPercent, SeasonMatrix};
use core_types::{AnalysisKind, Category};
use datastore::DataStore;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod error;

pub use error::DispatchError;

/// The optional filter parameters a selection may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub season: Option<String>,
    pub players: Vec<String>,
}

/// The unified result type handed back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AnalysisOutput {
    Ranking(RankedTable),
    Matrix(SeasonMatrix),
    Metrics(MetricTable),
    Matches(MatchList),
    Percent(ScalarPercent),
}

/// Runs one analysis selection against the store.
pub fn dispatch(
    store: &DataStore,
    category: Category,
    analysis: AnalysisKind,
    params: &Params,
) -> Result<AnalysisOutput, DispatchError> {
    if analysis.category() != category {
        return Err(DispatchError::UnknownSelection { category, analysis });
    }
    info!(%category, %analysis, "dispatching analysis");

    let catalog = AnalysisCatalog::new(store);
    let output = match analysis {
        AnalysisKind::TopBatsmen => {
            AnalysisOutput::Ranking(catalog.top_batsmen(require_season(params)?)?)
        }
        AnalysisKind::StrikeRateLeaders => AnalysisOutput::Ranking(catalog.strike_rate_leaders()),
        AnalysisKind::BattingAverageLeaders => {
            AnalysisOutput::Ranking(catalog.batting_average_leaders())
        }
        AnalysisKind::MostSixes => AnalysisOutput::Ranking(catalog.most_sixes()),
        AnalysisKind::MostFours => AnalysisOutput::Ranking(catalog.most_fours()),
        AnalysisKind::OrangeCap => {
            AnalysisOutput::Ranking(catalog.orange_cap(require_season(params)?)?)
        }
        AnalysisKind::PlayerComparison => {
            let [p1, p2] = require_players::<2>(params)?;
            AnalysisOutput::Matrix(catalog.player_comparison(p1, p2)?)
        }
        AnalysisKind::TopBowlers => AnalysisOutput::Ranking(catalog.top_bowlers()),
        AnalysisKind::PurpleCap => {
            AnalysisOutput::Ranking(catalog.purple_cap(require_season(params)?)?)
        }
        AnalysisKind::EconomyRate => AnalysisOutput::Ranking(catalog.economy_rate()),
        AnalysisKind::BestBowlingFigures => {
            AnalysisOutput::Ranking(catalog.best_bowling_figures())
        }
        AnalysisKind::TeamWinPct => AnalysisOutput::Ranking(catalog.team_win_pct()),
        AnalysisKind::ManOfTheMatchLeaders => {
            AnalysisOutput::Ranking(catalog.man_of_the_match_leaders())
        }
        AnalysisKind::HighestTeamScores => AnalysisOutput::Ranking(catalog.highest_team_scores()),
        AnalysisKind::SuperOverMatches => AnalysisOutput::Matches(catalog.super_over_matches()?),
        AnalysisKind::TossImpact => AnalysisOutput::Percent(catalog.toss_impact()?),
        AnalysisKind::VenueAnalysis => AnalysisOutput::Ranking(catalog.venue_analysis()),
        AnalysisKind::SeasonMatchCounts => AnalysisOutput::Ranking(catalog.season_match_counts()),
        AnalysisKind::CareerComparison => {
            if params.players.is_empty() {
                return Err(DispatchError::MissingParameter("players"));
            }
            AnalysisOutput::Matrix(catalog.career_comparison(&params.players)?)
        }
        AnalysisKind::PlayerPerformance => {
            let [player] = require_players::<1>(params)?;
            AnalysisOutput::Metrics(catalog.player_performance(player)?)
        }
    };
    Ok(output)
}

fn require_season(params: &Params) -> Result<&str, DispatchError> {
    params
        .season
        .as_deref()
        .ok_or(DispatchError::MissingParameter("season"))
}

fn require_players<const N: usize>(params: &Params) -> Result<[&str; N], DispatchError> {
    let players: Vec<&str> = params.players.iter().map(String::as_str).collect();
    players
        .try_into()
        .map_err(|_| DispatchError::MissingParameter("players"))
}
