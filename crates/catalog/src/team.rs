//! Team and match analyses: win percentages, award counts, innings totals,
//! venue frequencies, and the optional-column analyses (super overs, toss
//! impact).

use crate::error::CatalogError;
use crate::report::{MatchList, MatchSummary, RankedTable, ScalarPercent};
use crate::{AnalysisCatalog, ranked_counts, ranked_decimals};
use aggregate::RankDirection;
use rust_decimal::Decimal;
use std::collections::HashMap;

impl<'a> AnalysisCatalog<'a> {
    /// Win share per team, as a percentage of matches with a determined
    /// winner. Matches without a result are excluded from the denominator.
    pub fn team_win_pct(&self) -> RankedTable {
        let winners: Vec<&str> = self
            .store()
            .matches()
            .iter()
            .filter_map(|m| m.winner.as_deref())
            .collect();
        let total = winners.len() as u64;
        let counts = aggregate::count_by(&winners, |w| w.to_string(), |_| true);
        let pct: HashMap<String, Decimal> = counts
            .into_iter()
            .map(|(team, wins)| {
                let share = Decimal::from(wins * 100) / Decimal::from(total);
                (team, share)
            })
            .collect();
        let n = pct.len();
        ranked_decimals(&pct, n, RankDirection::Descending, "Team", "Win %")
    }

    /// Top 10 players by player-of-the-match awards.
    pub fn man_of_the_match_leaders(&self) -> RankedTable {
        let awardees: Vec<&str> = self
            .store()
            .matches()
            .iter()
            .filter_map(|m| m.player_of_match.as_deref())
            .collect();
        let counts = aggregate::count_by(&awardees, |p| p.to_string(), |_| true);
        ranked_counts(&counts, 10, RankDirection::Descending, "Player", "Awards")
    }

    /// Top 10 innings totals, keyed by `(match, batting team)`. Both
    /// innings of one match may appear; there is no deduplication.
    pub fn highest_team_scores(&self) -> RankedTable {
        let totals = aggregate::sum_by(
            self.store().deliveries(),
            |d| (d.match_id, d.batting_team.clone()),
            |d| u64::from(d.total_runs),
        );
        let rows = aggregate::rank_top(&totals, 10, RankDirection::Descending)
            .into_iter()
            .map(|((match_id, team), runs)| {
                (format!("{} (match {})", team, match_id), Decimal::from(runs))
            })
            .collect();
        RankedTable {
            key_label: "Innings",
            value_label: "Runs",
            rows,
        }
    }

    /// The matches decided by a super over, in source order. Unavailable
    /// when the loaded data has no `super_over` column.
    pub fn super_over_matches(&self) -> Result<MatchList, CatalogError> {
        if !self.store().has_super_over() {
            return Err(CatalogError::MissingColumn("super_over"));
        }
        let rows = self
            .store()
            .matches()
            .iter()
            .filter(|m| m.super_over == Some(true))
            .map(|m| MatchSummary {
                season: m.season.clone(),
                team1: m.team1.clone(),
                team2: m.team2.clone(),
                winner: m.winner.clone(),
            })
            .collect();
        Ok(MatchList { rows })
    }

    /// The share of all matches in which the toss winner also won the
    /// match. Unavailable when the loaded data has no `toss_winner` column.
    pub fn toss_impact(&self) -> Result<ScalarPercent, CatalogError> {
        if !self.store().has_toss_winner() {
            return Err(CatalogError::MissingColumn("toss_winner"));
        }
        let matches = self.store().matches();
        let aligned = matches
            .iter()
            .filter(|m| m.toss_winner.is_some() && m.toss_winner == m.winner)
            .count() as u64;
        let total = matches.len() as u64;
        let value = if total == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(aligned * 100) / Decimal::from(total)
        };
        Ok(ScalarPercent { value })
    }

    /// The ten busiest venues by match count.
    pub fn venue_analysis(&self) -> RankedTable {
        let counts = aggregate::count_by(
            self.store().matches(),
            |m| m.venue.clone(),
            |_| true,
        );
        ranked_counts(&counts, 10, RankDirection::Descending, "Venue", "Matches")
    }

    /// Matches played per season, ordered ascending by season label
    /// (chronological) rather than by count.
    pub fn season_match_counts(&self) -> RankedTable {
        let rows = self
            .store()
            .seasons()
            .iter()
            .map(|season| {
                let n = self.store().matches_in_season(season).len();
                (season.clone(), Decimal::from(n as u64))
            })
            .collect();
        RankedTable {
            key_label: "Season",
            value_label: "Matches",
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AnalysisCatalog;
    use crate::error::CatalogError;
    use crate::testutil::{fixture_store, fixture_store_without_optional_columns, mk_match};
    use core_types::{BatterColumn, DeliverySchema, MatchSchema};
    use datastore::DataStore;
    use rust_decimal_macros::dec;

    #[test]
    fn team_win_pct_excludes_matches_without_a_winner() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.team_win_pct();
        // Three decided matches: MI won two, CSK one; the abandoned match
        // does not count against anyone.
        assert_eq!(
            table.rows,
            vec![
                ("MI".to_string(), dec!(66.67)),
                ("CSK".to_string(), dec!(33.33)),
            ]
        );
    }

    #[test]
    fn man_of_the_match_counts_awards() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.man_of_the_match_leaders();
        assert_eq!(
            table.rows,
            vec![
                ("Rohit".to_string(), dec!(2)),
                ("Dhoni".to_string(), dec!(1)),
            ]
        );
    }

    #[test]
    fn highest_team_scores_keeps_both_innings_of_a_match() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.highest_team_scores();
        assert_eq!(table.rows[0], ("CSK (match 1)".to_string(), dec!(11)));
        assert_eq!(table.rows[1], ("MI (match 1)".to_string(), dec!(7)));
        // Eight innings in the fixture: every (match, team) pair appears.
        assert_eq!(table.rows.len(), 8);
    }

    #[test]
    fn super_over_filter_returns_only_flagged_matches() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let list = catalog.super_over_matches().unwrap();
        assert_eq!(list.rows.len(), 1);
        assert_eq!(list.rows[0].season, "2020");
        assert_eq!(list.rows[0].winner.as_deref(), Some("MI"));
    }

    #[test]
    fn super_over_is_unavailable_without_the_column() {
        let store = fixture_store_without_optional_columns();
        let catalog = AnalysisCatalog::new(&store);
        let err = catalog.super_over_matches().unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("super_over")));
    }

    #[test]
    fn toss_impact_is_aligned_tosses_over_all_matches() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        // Toss winner also won in matches 1 and 3, out of 4 matches.
        let pct = catalog.toss_impact().unwrap();
        assert_eq!(pct.to_string(), "50.00%");
    }

    #[test]
    fn toss_impact_is_sixty_percent_on_ten_match_fixture() {
        let mut matches = Vec::new();
        for id in 1..=10u64 {
            let toss = if id <= 6 { Some("CSK") } else { Some("MI") };
            matches.push(mk_match(
                id,
                "2019",
                "CSK",
                "MI",
                Some("CSK"),
                None,
                "Chepauk",
                toss,
                None,
            ));
        }
        let store = DataStore::new(
            matches,
            vec![],
            MatchSchema {
                has_toss_winner: true,
                has_super_over: false,
            },
            DeliverySchema {
                batter_column: BatterColumn::Batter,
            },
        )
        .unwrap();
        let catalog = AnalysisCatalog::new(&store);
        assert_eq!(catalog.toss_impact().unwrap().to_string(), "60.00%");
    }

    #[test]
    fn toss_impact_is_unavailable_without_the_column() {
        let store = fixture_store_without_optional_columns();
        let catalog = AnalysisCatalog::new(&store);
        let err = catalog.toss_impact().unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("toss_winner")));
    }

    #[test]
    fn venue_analysis_counts_matches_per_ground() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.venue_analysis();
        assert_eq!(table.rows[0], ("Wankhede".to_string(), dec!(2)));
    }

    #[test]
    fn season_match_counts_are_ordered_by_label_not_count() {
        let store = fixture_store();
        let catalog = AnalysisCatalog::new(&store);
        let table = catalog.season_match_counts();
        assert_eq!(
            table.rows,
            vec![
                ("2019".to_string(), dec!(2)),
                ("2020".to_string(), dec!(2)),
            ]
        );
    }
}
