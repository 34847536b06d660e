//! Aggregate reports over a flat collection of [`crate::types::ListingRecord`]s.
//!
//! Reports never fail. A record whose field is malformed for the report at hand (rent that is
//! not a number, an unparseable BHK, a missing size) is skipped, logged with `log::warn!`, and
//! counted in [`AggregateResult::skipped`]. An empty input yields an empty result.
//!
//! - [`average_rent_by_city`], [`average_rent_by_bhk`], [`max_rent_for_bhk`]
//! - [`listing_counts_by_city`], [`top_n_cities_by_listing_count`], [`max_size_listing`]
//! - [`furnishing_distribution_by_city`]
//!
//! ```rust
//! use rental_listings::report::average_rent_by_city;
//! use rental_listings::types::ListingRecord;
//!
//! let listing = |city: &str, rent: &str| ListingRecord {
//!     city: city.to_string(),
//!     rent: rent.to_string(),
//!     ..Default::default()
//! };
//! let report = average_rent_by_city(&[
//!     listing("Mumbai", "1000"),
//!     listing("mumbai ", "2000"),
//!     listing("Delhi", "abc"),
//! ]);
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.get("mumbai").unwrap().to_string(), "1500.00");
//! assert_eq!(report.skipped(), 1);
//! ```

pub mod furnishing;
pub mod listings;
pub mod rent;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

pub use furnishing::{furnishing_distribution_by_city, FurnishingBreakdown};
pub use listings::{listing_counts_by_city, max_size_listing, top_n_cities_by_listing_count};
pub use rent::{average_rent_by_bhk, average_rent_by_city, max_rent_for_bhk};

/// Mapping from a grouping key to a computed value, in a report-defined key order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult<K, V> {
    entries: Vec<(K, V)>,
    skipped: usize,
}

impl<K, V> AggregateResult<K, V> {
    pub(crate) fn new(entries: Vec<(K, V)>, skipped: usize) -> Self {
        Self { entries, skipped }
    }

    /// Entries in report order.
    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of input records left out because a field the report needs was malformed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Value for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }
}

/// Accumulates values per key in first-seen key order.
pub(crate) struct Tally<K, V> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub(crate) fn entry(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let pos = match self.positions.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.positions.insert(key.clone(), pos);
                self.entries.push((key, init()));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

/// Running total of valid rents for one group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RentAverage {
    pub total: f64,
    pub count: usize,
}

impl RentAverage {
    pub(crate) fn add(&mut self, rent: f64) {
        self.total += rent;
        self.count += 1;
    }

    /// Mean rent. Zero for an empty group.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Formats the mean with two decimals.
impl fmt::Display for RentAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.mean())
    }
}

/// A percentage in `0.0..=100.0`, displayed with two decimals and a `%` suffix.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(pub f64);

impl Percentage {
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            Self(0.0)
        } else {
            Self(part as f64 / whole as f64 * 100.0)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_seen_order() {
        let mut t: Tally<&str, usize> = Tally::new();
        for k in ["b", "a", "b", "c", "a", "b"] {
            *t.entry(k, || 0) += 1;
        }
        assert_eq!(t.into_entries(), vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn aggregate_get_by_borrowed_key() {
        let r = AggregateResult::new(vec![("x".to_string(), 1), ("y".to_string(), 2)], 0);
        assert_eq!(r.get("y"), Some(&2));
        assert_eq!(r.get("z"), None);
        assert_eq!(r.keys().cloned().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn averages_and_percentages_format_to_two_decimals() {
        let mut avg = RentAverage::default();
        avg.add(1000.0);
        avg.add(2001.0);
        assert_eq!(avg.to_string(), "1500.50");
        assert_eq!(RentAverage::default().mean(), 0.0);

        assert_eq!(Percentage::of(1, 3).to_string(), "33.33%");
        assert_eq!(Percentage::of(0, 0).to_string(), "0.00%");
    }
}
