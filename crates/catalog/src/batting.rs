//! Batting analyses: run leaderboards, strike rate, average, boundary
//! counts, and the per-season player comparison.

use crate::error::CatalogError;
use crate::report::{RankedTable, SeasonMatrix};
use crate::{AnalysisCatalog, ranked_counts, ranked_decimals};
use aggregate::{RankDirection, ZeroPolicy};
use core_types::DeliveryRecord;
use rust_decimal::Decimal;
use tracing::debug;

impl<'a> AnalysisCatalog<'a> {
    /// Top 10 run scorers of a season, descending.
    pub fn top_batsmen(&self, season: &str) -> Result<RankedTable, CatalogError> {
        self.require_season(season)?;
        debug!(season, "running top batsmen");
        let scoped = self.store().filter_deliveries_by_season(season);
        let runs = aggregate::sum_by(&scoped, |d| d.batter.clone(), |d| u64::from(d.batsman_runs));
        Ok(ranked_counts(
            &runs,
            10,
            RankDirection::Descending,
            "Batter",
            "Runs",
        ))
    }

    /// Top 5 run scorers of a season — the Orange Cap race.
    pub fn orange_cap(&self, season: &str) -> Result<RankedTable, CatalogError> {
        self.require_season(season)?;
        let scoped = self.store().filter_deliveries_by_season(season);
        let runs = aggregate::sum_by(&scoped, |d| d.batter.clone(), |d| u64::from(d.batsman_runs));
        Ok(ranked_counts(
            &runs,
            5,
            RankDirection::Descending,
            "Batter",
            "Runs",
        ))
    }

    /// Top 10 batters by strike rate (runs per 100 balls faced) across all
    /// data. A batter only appears in the grouping if they faced at least
    /// one recorded ball, so the ratio denominator is never zero.
    pub fn strike_rate_leaders(&self) -> RankedTable {
        let deliveries = self.store().deliveries();
        let runs = aggregate::sum_by(
            deliveries,
            |d| d.batter.clone(),
            |d| u64::from(d.batsman_runs),
        );
        let balls = aggregate::count_by(deliveries, |d| d.batter.clone(), |_| true);
        let strike_rate: std::collections::HashMap<String, Decimal> =
            aggregate::ratio(&runs, &balls, ZeroPolicy::Exclude)
                .into_iter()
                .map(|(k, v)| (k, v * Decimal::ONE_HUNDRED))
                .collect();
        ranked_decimals(
            &strike_rate,
            10,
            RankDirection::Descending,
            "Batter",
            "Strike Rate",
        )
    }

    /// Top 10 batters by batting average. A batter never dismissed has the
    /// denominator treated as 1, so their average equals their run total —
    /// a deliberate approximation rather than an undefined value.
    pub fn batting_average_leaders(&self) -> RankedTable {
        let deliveries = self.store().deliveries();
        let runs = aggregate::sum_by(
            deliveries,
            |d| d.batter.clone(),
            |d| u64::from(d.batsman_runs),
        );
        let outs = aggregate::count_by(
            deliveries,
            |d| d.batter.clone(),
            |d| d.player_dismissed.is_some(),
        );
        let average = aggregate::ratio(&runs, &outs, ZeroPolicy::SubstituteOne);
        ranked_decimals(
            &average,
            10,
            RankDirection::Descending,
            "Batter",
            "Average",
        )
    }

    /// Top 10 six hitters across all data.
    pub fn most_sixes(&self) -> RankedTable {
        self.boundary_leaders(6, "Sixes")
    }

    /// Top 10 four hitters across all data.
    pub fn most_fours(&self) -> RankedTable {
        self.boundary_leaders(4, "Fours")
    }

    fn boundary_leaders(&self, runs: u32, value_label: &'static str) -> RankedTable {
        // Filter first so batters with no boundaries of this kind never
        // enter the ranking, even when fewer than 10 batters have any.
        let boundaries: Vec<&DeliveryRecord> = self
            .store()
            .deliveries()
            .iter()
            .filter(|d| d.batsman_runs == runs)
            .collect();
        let counts = aggregate::count_by(&boundaries, |d| d.batter.clone(), |_| true);
        ranked_counts(
            &counts,
            10,
            RankDirection::Descending,
            "Batter",
            value_label,
        )
    }

    /// Season-by-season run totals for a pair of players, gap-filled with 0
    /// over the outer union of both players' season sets.
    pub fn player_comparison(
        &self,
        player1: &str,
        player2: &str,
    ) -> Result<SeasonMatrix, CatalogError> {
        self.season_run_matrix(&[player1.to_string(), player2.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use crate::AnalysisCatalog;
    use crate::error::CatalogError;
    use crate::testutil::{fixture_store, mk_delivery, mk_match};
    use core_types::{BatterColumn, DeliverySchema, MatchSchema};
    use datastore::DataStore;
    use rust_decimal_macros::dec;

    #[test]
    fn top_batsmen_matches_the_hand_computed_season_totals() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.top_batsmen("2019").unwrap();
        assert_eq!(
            table.rows,
            vec![
                ("Rohit".to_string(), dec!(11)),
                ("Dhoni".to_string(), dec!(10)),
                ("Kohli".to_string(), dec!(2)),
            ]
        );
    }

    #[test]
    fn top_batsmen_values_are_non_increasing() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        for season in store.seasons() {
            let table = catalog.top_batsmen(season).unwrap();
            for pair in table.rows.windows(2) {
                assert!(pair[0].1 >= pair[1].1);
            }
        }
    }

    #[test]
    fn top_batsmen_totals_never_exceed_the_season_run_total() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        for season in store.seasons() {
            let table = catalog.top_batsmen(season).unwrap();
            let table_total: rust_decimal::Decimal = table.rows.iter().map(|(_, v)| v).sum();
            let season_total: u64 = store
                .filter_deliveries_by_season(season)
                .iter()
                .map(|d| u64::from(d.batsman_runs))
                .sum();
            // Fewer than 10 distinct batters per season in the fixture, so
            // the bound is met with equality.
            assert_eq!(table_total, rust_decimal::Decimal::from(season_total));
        }
    }

    #[test]
    fn top_batsmen_rejects_an_unknown_season() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let err = catalog.top_batsmen("1999").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSeason(_)));
    }

    #[test]
    fn orange_cap_is_a_prefix_of_top_batsmen() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        for season in store.seasons() {
            let top10 = catalog.top_batsmen(season).unwrap();
            let top5 = catalog.orange_cap(season).unwrap();
            assert_eq!(top5.rows.as_slice(), &top10.rows[..top5.rows.len()]);
        }
    }

    #[test]
    fn strike_rate_is_runs_per_hundred_balls() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.strike_rate_leaders();
        // Dhoni: 17 runs off 5 balls.
        assert_eq!(table.rows[0], ("Dhoni".to_string(), dec!(340.00)));
        // Kohli: 6 runs off 2 balls.
        assert_eq!(table.rows[1], ("Kohli".to_string(), dec!(300.00)));
        // Rohit: 11 runs off 4 balls.
        assert_eq!(table.rows[2], ("Rohit".to_string(), dec!(275.00)));
    }

    #[test]
    fn batting_average_equals_total_runs_when_never_dismissed() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.batting_average_leaders();
        let kohli = table
            .rows
            .iter()
            .find(|(name, _)| name == "Kohli")
            .unwrap();
        assert_eq!(kohli.1, dec!(6));
    }

    #[test]
    fn boundary_counts_exclude_batters_without_boundaries() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let sixes = catalog.most_sixes();
        assert_eq!(
            sixes.rows,
            vec![
                ("Dhoni".to_string(), dec!(2)),
                ("Rohit".to_string(), dec!(1)),
            ]
        );
        let fours = catalog.most_fours();
        // All three hit exactly one four; ties resolve by ascending name.
        let names: Vec<&str> = fours.rows.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Dhoni", "Kohli", "Rohit"]);
    }

    #[test]
    fn end_to_end_two_batters_one_match() {
        let matches = vec![mk_match(
            1, "2020", "A-XI", "B-XI", Some("A-XI"), None, "Ground", None, None,
        )];
        let deliveries = vec![
            mk_delivery(1, "A-XI", "X", "A", 4, 4, None),
            mk_delivery(1, "A-XI", "X", "A", 6, 6, None),
            mk_delivery(1, "B-XI", "Y", "B", 1, 1, None),
        ];
        let store = DataStore::new(
            matches,
            deliveries,
            MatchSchema {
                has_toss_winner: false,
                has_super_over: false,
            },
            DeliverySchema {
                batter_column: BatterColumn::Batter,
            },
        )
        .unwrap();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.top_batsmen("2020").unwrap();
        assert_eq!(
            table.rows,
            vec![("A".to_string(), dec!(10)), ("B".to_string(), dec!(1))]
        );
    }

    #[test]
    fn player_comparison_fills_missing_seasons_with_zero() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let matrix = catalog.player_comparison("Dhoni", "Kohli").unwrap();
        assert_eq!(matrix.column("Dhoni"), Some(vec![10, 7]));
        // Kohli batted in both seasons (2 runs, then 4).
        assert_eq!(matrix.column("Kohli"), Some(vec![2, 4]));
    }

    #[test]
    fn player_comparison_rejects_an_unknown_player() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let err = catalog.player_comparison("Dhoni", "Tendulkar").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPlayer(_)));
    }
}
