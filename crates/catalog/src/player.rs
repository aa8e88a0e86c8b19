//! Player analyses: the multi-player career comparison matrix and the
//! single-player performance summary.

use crate::error::CatalogError;
use crate::report::{MetricTable, SeasonMatrix, SeasonRow};
use crate::AnalysisCatalog;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

impl<'a> AnalysisCatalog<'a> {
    /// Season-by-season run totals for arbitrarily many players: a season ×
    /// player matrix gap-filled with 0. The season axis is the union of the
    /// selected players' season sets, sorted ascending.
    pub fn career_comparison(&self, players: &[String]) -> Result<SeasonMatrix, CatalogError> {
        self.season_run_matrix(players)
    }

    pub(crate) fn season_run_matrix(
        &self,
        players: &[String],
    ) -> Result<SeasonMatrix, CatalogError> {
        for player in players {
            self.require_player(player)?;
        }
        debug!(players = players.len(), "building season run matrix");

        let joined = self.store().join_season(self.store().deliveries());
        let mut per_player: Vec<HashMap<&str, u64>> = vec![HashMap::new(); players.len()];
        let mut seasons: BTreeSet<&str> = BTreeSet::new();
        for &(season, delivery) in &joined {
            let Some(idx) = players.iter().position(|p| *p == delivery.batter) else {
                continue;
            };
            *per_player[idx].entry(season).or_insert(0) += u64::from(delivery.batsman_runs);
            seasons.insert(season);
        }

        let rows = seasons
            .into_iter()
            .map(|season| SeasonRow {
                season: season.to_string(),
                values: per_player
                    .iter()
                    .map(|runs| runs.get(season).copied().unwrap_or(0))
                    .collect(),
            })
            .collect();

        Ok(SeasonMatrix {
            players: players.to_vec(),
            rows,
        })
    }

    /// A fixed six-row summary of one player's batting career: Runs, Balls,
    /// Average, Strike Rate, 6s, 4s — in that order.
    pub fn player_performance(&self, player: &str) -> Result<MetricTable, CatalogError> {
        self.require_player(player)?;

        let faced: Vec<_> = self
            .store()
            .deliveries()
            .iter()
            .filter(|d| d.batter == player)
            .collect();

        let runs: u64 = faced.iter().map(|d| u64::from(d.batsman_runs)).sum();
        let balls = faced.len() as u64;
        let outs = faced.iter().filter(|d| d.player_dismissed.is_some()).count() as u64;
        let sixes = faced.iter().filter(|d| d.batsman_runs == 6).count() as u64;
        let fours = faced.iter().filter(|d| d.batsman_runs == 4).count() as u64;

        let average = if outs == 0 {
            Decimal::from(runs)
        } else {
            Decimal::from(runs) / Decimal::from(outs)
        };
        let strike_rate = if balls == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(runs * 100) / Decimal::from(balls)
        };

        Ok(MetricTable {
            rows: vec![
                ("Runs", Decimal::from(runs)),
                ("Balls", Decimal::from(balls)),
                ("Average", average.round_dp(2)),
                ("Strike Rate", strike_rate.round_dp(2)),
                ("6s", Decimal::from(sixes)),
                ("4s", Decimal::from(fours)),
            ],
        })
    }
}
