//! # Immutable Record Store
//!
//! This crate owns the two base record collections (matches and deliveries)
//! for the lifetime of the process and provides the indexed lookups every
//! analysis is built on. The store is constructed exactly once by the host,
//! validated eagerly, and never mutated afterwards, so it can be shared
//! read-only across any number of analysis invocations without locking.
//!
//! ## Architectural Principles
//!
//! - **Fail Fast:** Referential-integrity problems (a delivery pointing at a
//!   match that does not exist, runs that exceed the ball total) are fatal at
//!   construction. Silently dropping such rows would corrupt every downstream
//!   aggregate without surfacing why.
//! - **Indexed Scoping:** Season scoping resolves match ids through an index
//!   built once at load, never by scanning the delivery collection.

use crate::error::StoreError;
use core_types::{DeliveryRecord, DeliverySchema, MatchRecord, MatchSchema};
use std::collections::{HashMap, HashSet};
use tracing::info;

pub mod error;

/// The immutable, indexed home of the loaded dataset.
#[derive(Debug)]
pub struct DataStore {
    matches: Vec<MatchRecord>,
    deliveries: Vec<DeliveryRecord>,
    match_schema: MatchSchema,
    delivery_schema: DeliverySchema,
    // Indices, built once in `new`. Values are positions into the owned
    // vectors so the store stays free of self-references.
    matches_by_season: HashMap<String, Vec<usize>>,
    deliveries_by_match: HashMap<u64, Vec<usize>>,
    season_by_match: HashMap<u64, String>,
    player_identities: HashSet<String>,
    seasons: Vec<String>,
}

impl DataStore {
    /// Builds the store and all of its indices, validating referential
    /// integrity along the way.
    pub fn new(
        matches: Vec<MatchRecord>,
        deliveries: Vec<DeliveryRecord>,
        match_schema: MatchSchema,
        delivery_schema: DeliverySchema,
    ) -> Result<Self, StoreError> {
        let mut season_by_match = HashMap::with_capacity(matches.len());
        let mut matches_by_season: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, m) in matches.iter().enumerate() {
            if season_by_match
                .insert(m.id, m.season.clone())
                .is_some()
            {
                return Err(StoreError::DuplicateMatchId(m.id));
            }
            matches_by_season
                .entry(m.season.clone())
                .or_default()
                .push(idx);
        }

        let mut deliveries_by_match: HashMap<u64, Vec<usize>> = HashMap::new();
        let mut player_identities = HashSet::new();
        for (idx, d) in deliveries.iter().enumerate() {
            if !season_by_match.contains_key(&d.match_id) {
                return Err(StoreError::UnknownMatchId(d.match_id));
            }
            if d.batsman_runs > d.total_runs {
                return Err(StoreError::RunsExceedTotal {
                    match_id: d.match_id,
                    batsman_runs: d.batsman_runs,
                    total_runs: d.total_runs,
                });
            }
            deliveries_by_match.entry(d.match_id).or_default().push(idx);
            player_identities.insert(d.batter.clone());
        }

        let mut seasons: Vec<String> = matches_by_season.keys().cloned().collect();
        seasons.sort();

        info!(
            matches = matches.len(),
            deliveries = deliveries.len(),
            seasons = seasons.len(),
            players = player_identities.len(),
            "data store indexed"
        );

        Ok(Self {
            matches,
            deliveries,
            match_schema,
            delivery_schema,
            matches_by_season,
            deliveries_by_match,
            season_by_match,
            player_identities,
            seasons,
        })
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn deliveries(&self) -> &[DeliveryRecord] {
        &self.deliveries
    }

    pub fn match_schema(&self) -> MatchSchema {
        self.match_schema
    }

    pub fn delivery_schema(&self) -> DeliverySchema {
        self.delivery_schema
    }

    /// All season labels seen in the match collection, sorted ascending.
    pub fn seasons(&self) -> &[String] {
        &self.seasons
    }

    /// Every distinct batter identity seen across the deliveries. This set
    /// drives selection enumeration for player-scoped analyses.
    pub fn player_identities(&self) -> &HashSet<String> {
        &self.player_identities
    }

    pub fn is_known_player(&self, name: &str) -> bool {
        self.player_identities.contains(name)
    }

    pub fn is_known_season(&self, label: &str) -> bool {
        self.matches_by_season.contains_key(label)
    }

    /// Whether the loaded match data carried a `toss_winner` column.
    pub fn has_toss_winner(&self) -> bool {
        self.match_schema.has_toss_winner
    }

    /// Whether the loaded match data carried a `super_over` column.
    pub fn has_super_over(&self) -> bool {
        self.match_schema.has_super_over
    }

    /// The matches played in a given season, in source order.
    pub fn matches_in_season(&self, season: &str) -> Vec<&MatchRecord> {
        self.matches_by_season
            .get(season)
            .map(|idxs| idxs.iter().map(|&i| &self.matches[i]).collect())
            .unwrap_or_default()
    }

    /// The deliveries bowled in matches of a given season, resolved through
    /// the season and match indices rather than a scan of all deliveries.
    pub fn filter_deliveries_by_season(&self, season: &str) -> Vec<&DeliveryRecord> {
        let Some(match_idxs) = self.matches_by_season.get(season) else {
            return Vec::new();
        };
        let mut scoped = Vec::new();
        for &mi in match_idxs {
            if let Some(delivery_idxs) = self.deliveries_by_match.get(&self.matches[mi].id) {
                scoped.extend(delivery_idxs.iter().map(|&di| &self.deliveries[di]));
            }
        }
        scoped
    }

    /// The season a match belongs to. `None` only for ids that never passed
    /// validation, which cannot happen for ids taken from owned records.
    pub fn season_of(&self, match_id: u64) -> Option<&str> {
        self.season_by_match.get(&match_id).map(String::as_str)
    }

    /// Augments each delivery with the season of its match. Used by the
    /// per-season breakdowns of a player's career.
    pub fn join_season<'a, I>(&'a self, deliveries: I) -> Vec<(&'a str, &'a DeliveryRecord)>
    where
        I: IntoIterator<Item = &'a DeliveryRecord>,
    {
        deliveries
            .into_iter()
            .filter_map(|d| self.season_of(d.match_id).map(|season| (season, d)))
            .collect()
    }
}
