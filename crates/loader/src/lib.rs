//! # CSV Data Loader
//!
//! The data-loading collaborator of the engine: reads the two raw CSV
//! collections, normalizes them into the `core-types` record structs, and
//! resolves the schema ambiguities exactly once.
//!
//! Two resolutions happen here and nowhere else:
//!
//! - the batter column may carry the legacy `batsman` header; the loader
//!   detects which name is present and normalizes every row to the single
//!   `batter` field, recording the decision in a [`DeliverySchema`];
//! - the `toss_winner` and `super_over` match columns may be absent
//!   entirely; their presence is recorded in a [`MatchSchema`] so dependent
//!   analyses can be reported unavailable before they are invoked.
//!
//! Malformed rows (non-numeric runs, missing required columns) are fatal:
//! silently dropping them would corrupt every downstream aggregate.

use crate::error::LoaderError;
use core_types::{BatterColumn, DeliveryRecord, DeliverySchema, MatchRecord, MatchSchema};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub mod error;

/// The match collection plus the optional-column presence resolved from its
/// header.
#[derive(Debug)]
pub struct LoadedMatches {
    pub records: Vec<MatchRecord>,
    pub schema: MatchSchema,
}

/// The delivery collection plus the resolved batter column name.
#[derive(Debug)]
pub struct LoadedDeliveries {
    pub records: Vec<DeliveryRecord>,
    pub schema: DeliverySchema,
}

/// A raw match row as it appears in the CSV. Unknown columns (city, date,
/// umpires, ...) are ignored; optional columns default to absent.
#[derive(Debug, Deserialize)]
struct RawMatch {
    id: u64,
    season: String,
    team1: String,
    team2: String,
    #[serde(default)]
    winner: Option<String>,
    #[serde(default)]
    player_of_match: Option<String>,
    venue: String,
    #[serde(default)]
    toss_winner: Option<String>,
    #[serde(default)]
    super_over: Option<String>,
}

/// A raw delivery row. The serde alias lets one struct read both the
/// modern and the legacy batter header.
#[derive(Debug, Deserialize)]
struct RawDelivery {
    match_id: u64,
    batting_team: String,
    bowler: String,
    #[serde(alias = "batsman")]
    batter: String,
    batsman_runs: u32,
    total_runs: u32,
    #[serde(default)]
    player_dismissed: Option<String>,
    ball: u32,
}

/// Loads and normalizes the match collection from a CSV file.
pub fn load_matches(path: &Path) -> Result<LoadedMatches, LoaderError> {
    let reader = csv::Reader::from_path(path)?;
    let loaded = read_matches(reader)?;
    info!(
        path = %path.display(),
        matches = loaded.records.len(),
        has_toss_winner = loaded.schema.has_toss_winner,
        has_super_over = loaded.schema.has_super_over,
        "loaded match collection"
    );
    Ok(loaded)
}

/// Loads and normalizes the delivery collection from a CSV file.
pub fn load_deliveries(path: &Path) -> Result<LoadedDeliveries, LoaderError> {
    let reader = csv::Reader::from_path(path)?;
    let loaded = read_deliveries(reader)?;
    info!(
        path = %path.display(),
        deliveries = loaded.records.len(),
        batter_column = loaded.schema.batter_column.header(),
        "loaded delivery collection"
    );
    Ok(loaded)
}

fn read_matches<R: Read>(mut reader: csv::Reader<R>) -> Result<LoadedMatches, LoaderError> {
    let headers = reader.headers()?.clone();
    let schema = MatchSchema {
        has_toss_winner: headers.iter().any(|h| h == "toss_winner"),
        has_super_over: headers.iter().any(|h| h == "super_over"),
    };

    let mut records = Vec::new();
    for row in reader.deserialize::<RawMatch>() {
        let raw = row?;
        records.push(MatchRecord {
            id: raw.id,
            season: raw.season,
            team1: raw.team1,
            team2: raw.team2,
            winner: raw.winner,
            player_of_match: raw.player_of_match,
            venue: raw.venue,
            toss_winner: raw.toss_winner,
            super_over: raw.super_over.as_deref().map(parse_flag),
        });
    }
    Ok(LoadedMatches { records, schema })
}

fn read_deliveries<R: Read>(mut reader: csv::Reader<R>) -> Result<LoadedDeliveries, LoaderError> {
    let headers = reader.headers()?.clone();
    let batter_column = if headers.iter().any(|h| h == "batter") {
        BatterColumn::Batter
    } else if headers.iter().any(|h| h == "batsman") {
        BatterColumn::Batsman
    } else {
        return Err(LoaderError::MissingBatterColumn);
    };

    let mut records = Vec::new();
    for row in reader.deserialize::<RawDelivery>() {
        let raw = row?;
        records.push(DeliveryRecord {
            match_id: raw.match_id,
            batting_team: raw.batting_team,
            bowler: raw.bowler,
            batter: raw.batter,
            batsman_runs: raw.batsman_runs,
            total_runs: raw.total_runs,
            player_dismissed: raw.player_dismissed,
            ball: raw.ball,
        });
    }
    Ok(LoadedDeliveries {
        records,
        schema: DeliverySchema { batter_column },
    })
}

/// Interprets the `super_over` column, which appears as `0`/`1` in some
/// exports and `True`/`False` in others.
fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(data.as_bytes())
    }

    #[test]
    fn loads_matches_with_all_optional_columns() {
        let data = "\
id,season,team1,team2,winner,player_of_match,venue,toss_winner,super_over
1,2020,CSK,MI,CSK,Dhoni,Chepauk,MI,0
2,2020,MI,RCB,,,Wankhede,MI,1
";
        let loaded = read_matches(reader(data)).unwrap();
        assert!(loaded.schema.has_toss_winner);
        assert!(loaded.schema.has_super_over);
        assert_eq!(loaded.records[0].super_over, Some(false));
        assert_eq!(loaded.records[1].super_over, Some(true));
        assert_eq!(loaded.records[1].winner, None);
        assert_eq!(loaded.records[1].player_of_match, None);
    }

    #[test]
    fn absent_optional_columns_are_recorded_in_the_schema() {
        let data = "\
id,season,team1,team2,winner,player_of_match,venue
1,2020,CSK,MI,CSK,Dhoni,Chepauk
";
        let loaded = read_matches(reader(data)).unwrap();
        assert!(!loaded.schema.has_toss_winner);
        assert!(!loaded.schema.has_super_over);
        assert_eq!(loaded.records[0].toss_winner, None);
        assert_eq!(loaded.records[0].super_over, None);
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let data = "\
id,season,city,team1,team2,winner,player_of_match,venue
1,2020,Chennai,CSK,MI,CSK,Dhoni,Chepauk
";
        let loaded = read_matches(reader(data)).unwrap();
        assert_eq!(loaded.records.len(), 1);
    }

    #[test]
    fn resolves_the_modern_batter_header() {
        let data = "\
match_id,batting_team,bowler,batter,batsman_runs,total_runs,player_dismissed,ball
1,CSK,Bumrah,Dhoni,6,6,,3
";
        let loaded = read_deliveries(reader(data)).unwrap();
        assert_eq!(loaded.schema.batter_column, BatterColumn::Batter);
        assert_eq!(loaded.records[0].batter, "Dhoni");
        assert_eq!(loaded.records[0].player_dismissed, None);
    }

    #[test]
    fn resolves_the_legacy_batsman_header() {
        let data = "\
match_id,batting_team,bowler,batsman,batsman_runs,total_runs,player_dismissed,ball
1,CSK,Bumrah,Dhoni,4,5,Dhoni,3
";
        let loaded = read_deliveries(reader(data)).unwrap();
        assert_eq!(loaded.schema.batter_column, BatterColumn::Batsman);
        assert_eq!(loaded.records[0].batter, "Dhoni");
        assert_eq!(loaded.records[0].player_dismissed.as_deref(), Some("Dhoni"));
    }

    #[test]
    fn a_delivery_file_without_any_batter_header_is_rejected() {
        let data = "\
match_id,batting_team,bowler,batsman_runs,total_runs,player_dismissed,ball
1,CSK,Bumrah,4,4,,3
";
        let err = read_deliveries(reader(data)).unwrap_err();
        assert!(matches!(err, LoaderError::MissingBatterColumn));
    }

    #[test]
    fn non_numeric_runs_are_fatal() {
        let data = "\
match_id,batting_team,bowler,batter,batsman_runs,total_runs,player_dismissed,ball
1,CSK,Bumrah,Dhoni,four,4,,3
";
        let err = read_deliveries(reader(data)).unwrap_err();
        assert!(matches!(err, LoaderError::Csv(_)));
    }
}
