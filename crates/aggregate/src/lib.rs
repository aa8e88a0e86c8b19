//! # Generic Aggregation Primitives
//!
//! This crate provides the grouping, counting, summing, ranking, and ratio
//! building blocks the analysis catalog is composed from. It has no domain
//! knowledge: every function is a pure transformation over arbitrary record
//! slices, keyed by a caller-supplied extraction closure.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** No knowledge of matches, deliveries, or any other
//!   domain type. Depends only on the standard library and `rust_decimal`.
//! - **Deterministic Ranking:** `rank_top` breaks value ties by ascending
//!   key order, so repeated invocations over the same data always produce
//!   the same table.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::hash::Hash;

/// The sort direction used by [`rank_top`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// Largest value first (the default for leaderboards).
    Descending,
    /// Smallest value first (e.g. economy rate, where lower is better).
    Ascending,
}

/// What [`ratio`] does with a key whose denominator is zero or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroPolicy {
    /// Drop the key from the output entirely.
    Exclude,
    /// Treat the denominator as 1, so the ratio equals the numerator.
    SubstituteOne,
}

/// Groups records by an extracted key.
///
/// Insertion order within each group follows source order, so downstream
/// consumers that care about first-seen semantics can rely on it.
pub fn group_by<'a, R, K, F>(records: &'a [R], mut key: F) -> HashMap<K, Vec<&'a R>>
where
    K: Eq + Hash,
    F: FnMut(&R) -> K,
{
    let mut groups: HashMap<K, Vec<&R>> = HashMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

/// Sums an extracted numeric value per group.
pub fn sum_by<R, K, KF, VF>(records: &[R], key: KF, mut value: VF) -> HashMap<K, u64>
where
    K: Eq + Hash,
    KF: FnMut(&R) -> K,
    VF: FnMut(&R) -> u64,
{
    group_by(records, key)
        .into_iter()
        .map(|(k, group)| {
            let total = group.into_iter().map(|r| value(r)).sum();
            (k, total)
        })
        .collect()
}

/// Counts the records per group that satisfy `predicate`.
///
/// Groups whose every record fails the predicate still appear, with a count
/// of zero; callers that want them gone filter afterwards.
pub fn count_by<R, K, KF, P>(records: &[R], key: KF, mut predicate: P) -> HashMap<K, u64>
where
    K: Eq + Hash,
    KF: FnMut(&R) -> K,
    P: FnMut(&R) -> bool,
{
    group_by(records, key)
        .into_iter()
        .map(|(k, group)| {
            let n = group.into_iter().filter(|&r| predicate(r)).count() as u64;
            (k, n)
        })
        .collect()
}

/// Ranks a keyed mapping by value and keeps the first `n` entries.
///
/// The output length is `min(n, |map|)`. Ties on value are broken by
/// ascending key order regardless of `direction`, which makes the ranking
/// reproducible across runs and platforms.
pub fn rank_top<K, V>(map: &HashMap<K, V>, n: usize, direction: RankDirection) -> Vec<(K, V)>
where
    K: Ord + Clone,
    V: Ord + Copy,
{
    let mut entries: Vec<(K, V)> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| {
        let by_value = match direction {
            RankDirection::Descending => b.1.cmp(&a.1),
            RankDirection::Ascending => a.1.cmp(&b.1),
        };
        by_value.then_with(|| a.0.cmp(&b.0))
    });
    entries.truncate(n);
    entries
}

/// Divides two keyed mappings elementwise, applying `zero_policy` wherever
/// the denominator is zero or the key is absent from `denominator`.
///
/// Only keys present in `numerator` appear in the output.
pub fn ratio<K>(
    numerator: &HashMap<K, u64>,
    denominator: &HashMap<K, u64>,
    zero_policy: ZeroPolicy,
) -> HashMap<K, Decimal>
where
    K: Eq + Hash + Clone,
{
    let mut out = HashMap::with_capacity(numerator.len());
    for (key, &num) in numerator {
        let den = denominator.get(key).copied().unwrap_or(0);
        let den = if den == 0 {
            match zero_policy {
                ZeroPolicy::Exclude => continue,
                ZeroPolicy::SubstituteOne => 1,
            }
        } else {
            den
        };
        out.insert(key.clone(), Decimal::from(num) / Decimal::from(den));
    }
    out
}
