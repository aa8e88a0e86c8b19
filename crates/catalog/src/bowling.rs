//! Bowling analyses: dismissal counts, economy rate, and the composite
//! bowling-figures score.

use crate::error::CatalogError;
use crate::report::RankedTable;
use crate::{AnalysisCatalog, ranked_counts, ranked_decimals};
use aggregate::{RankDirection, ZeroPolicy};
use core_types::DeliveryRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;

impl<'a> AnalysisCatalog<'a> {
    /// Top 10 bowlers by dismissals on their deliveries, all data.
    ///
    /// This counts every dismissal on a bowler's deliveries, including
    /// run-outs not creditable to the bowler — preserved behavior, see the
    /// discrepancy note in DESIGN.md.
    pub fn top_bowlers(&self) -> RankedTable {
        let wickets = wicket_counts(self.store().deliveries());
        ranked_counts(
            &wickets,
            10,
            RankDirection::Descending,
            "Bowler",
            "Wickets",
        )
    }

    /// Top 5 wicket takers of a season — the Purple Cap race. Same counting
    /// rule as [`Self::top_bowlers`], scoped to the season.
    pub fn purple_cap(&self, season: &str) -> Result<RankedTable, CatalogError> {
        self.require_season(season)?;
        let scoped = self.store().filter_deliveries_by_season(season);
        let dismissals: Vec<&DeliveryRecord> = scoped
            .into_iter()
            .filter(|d| d.player_dismissed.is_some())
            .collect();
        let wickets = aggregate::count_by(&dismissals, |d| d.bowler.clone(), |_| true);
        Ok(ranked_counts(
            &wickets,
            5,
            RankDirection::Descending,
            "Bowler",
            "Wickets",
        ))
    }

    /// Ten most economical bowlers (runs conceded per six balls), ascending
    /// since lower is better. A bowler only appears in the grouping if they
    /// bowled at least one ball, so the denominator is never zero.
    pub fn economy_rate(&self) -> RankedTable {
        let deliveries = self.store().deliveries();
        let conceded = aggregate::sum_by(
            deliveries,
            |d| d.bowler.clone(),
            |d| u64::from(d.total_runs),
        );
        let balls = aggregate::count_by(deliveries, |d| d.bowler.clone(), |_| true);
        let economy: HashMap<String, Decimal> =
            aggregate::ratio(&conceded, &balls, ZeroPolicy::Exclude)
                .into_iter()
                .map(|(k, v)| (k, v * Decimal::from(6)))
                .collect();
        ranked_decimals(
            &economy,
            10,
            RankDirection::Ascending,
            "Bowler",
            "Economy",
        )
    }

    /// Top 10 by the composite score `100 × wickets − runs conceded`.
    ///
    /// The score is a ranking heuristic, not a real cricket statistic, and
    /// bowlers without a wicket are excluded entirely — both preserved
    /// behaviors, see the discrepancy note in DESIGN.md.
    pub fn best_bowling_figures(&self) -> RankedTable {
        let deliveries = self.store().deliveries();
        let wickets = wicket_counts(deliveries);
        let conceded = aggregate::sum_by(
            deliveries,
            |d| d.bowler.clone(),
            |d| u64::from(d.total_runs),
        );
        let mut score: HashMap<String, i64> = HashMap::with_capacity(wickets.len());
        for (bowler, w) in &wickets {
            let runs = conceded.get(bowler).copied().unwrap_or(0);
            score.insert(bowler.clone(), 100 * (*w as i64) - runs as i64);
        }
        let rows = aggregate::rank_top(&score, 10, RankDirection::Descending)
            .into_iter()
            .map(|(k, v)| (k, Decimal::from(v)))
            .collect();
        RankedTable {
            key_label: "Bowler",
            value_label: "Score",
            rows,
        }
    }
}

/// Dismissal counts per bowler, restricted to deliveries that actually took
/// a wicket so wicketless bowlers never appear in the mapping.
fn wicket_counts(deliveries: &[DeliveryRecord]) -> HashMap<String, u64> {
    let dismissals: Vec<&DeliveryRecord> = deliveries
        .iter()
        .filter(|d| d.player_dismissed.is_some())
        .collect();
    aggregate::count_by(&dismissals, |d| d.bowler.clone(), |_| true)
}

#[cfg(test)]
mod tests {
    use crate::AnalysisCatalog;
    use crate::testutil::{fixture_store, mk_delivery, mk_match};
    use core_types::{BatterColumn, DeliverySchema, MatchSchema};
    use datastore::DataStore;
    use rust_decimal_macros::dec;

    #[test]
    fn top_bowlers_counts_dismissals_and_breaks_ties_by_name() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.top_bowlers();
        // One wicket each; the tie resolves alphabetically.
        assert_eq!(
            table.rows,
            vec![
                ("Bumrah".to_string(), dec!(1)),
                ("Chahal".to_string(), dec!(1)),
            ]
        );
    }

    #[test]
    fn purple_cap_scopes_to_the_season() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.purple_cap("2020").unwrap();
        assert_eq!(table.rows, vec![("Chahal".to_string(), dec!(1))]);
    }

    #[test]
    fn economy_rate_ranks_ascending_with_two_decimals() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.economy_rate();
        // Chahal: 13 runs off 5 balls = 15.60; Bumrah: 23 off 6 = 23.00.
        assert_eq!(
            table.rows,
            vec![
                ("Chahal".to_string(), dec!(15.60)),
                ("Bumrah".to_string(), dec!(23.00)),
            ]
        );
    }

    #[test]
    fn economy_is_scale_invariant() {
        // Doubling both runs conceded and balls bowled leaves the economy
        // unchanged: bowl every fixture delivery twice.
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let baseline = catalog.economy_rate();

        let matches: Vec<_> = store.matches().to_vec();
        let mut doubled: Vec<_> = store.deliveries().to_vec();
        doubled.extend(store.deliveries().to_vec());
        let doubled_store = DataStore::new(
            matches,
            doubled,
            store.match_schema(),
            store.delivery_schema(),
        )
        .unwrap();
        let catalog = AnalysisCatalog::new(&doubled_store);
        assert_eq!(catalog.economy_rate().rows, baseline.rows);
    }

    #[test]
    fn zero_ball_bowlers_never_reach_the_economy_table() {
        // A single-delivery dataset has exactly one bowler; nobody else can
        // appear with a zero denominator.
        let matches = vec![mk_match(
            1, "2019", "CSK", "MI", Some("CSK"), None, "Chepauk", None, None,
        )];
        let deliveries = vec![mk_delivery(1, "CSK", "Bumrah", "Dhoni", 4, 4, None)];
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
        let table = catalog.economy_rate();
        assert_eq!(table.rows, vec![("Bumrah".to_string(), dec!(24.00))]);
    }

    #[test]
    fn best_bowling_figures_uses_the_composite_score() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.best_bowling_figures();
        // Chahal: 100×1 − 13 = 87; Bumrah: 100×1 − 23 = 77.
        assert_eq!(
            table.rows,
            vec![
                ("Chahal".to_string(), dec!(87)),
                ("Bumrah".to_string(), dec!(77)),
            ]
        );
    }
}
