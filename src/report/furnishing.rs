//! Furnishing mix per city.

use crate::types::{CityName, FurnishingStatus, ListingRecord};

use super::{AggregateResult, Percentage, Tally};

/// Furnishing counts for the listings of one city.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FurnishingBreakdown {
    /// Listings in the city.
    pub total: usize,
    /// Count per furnishing label, in first-seen order.
    pub counts: Vec<(String, usize)>,
}

impl FurnishingBreakdown {
    fn add(&mut self, label: String) {
        self.total += 1;
        match self.counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((label, 1)),
        }
    }

    /// Share of each furnishing label among the city's listings.
    pub fn percentages(&self) -> Vec<(String, Percentage)> {
        self.counts
            .iter()
            .map(|(label, n)| (label.clone(), Percentage::of(*n, self.total)))
            .collect()
    }

    /// Share of one label, if any listing carries it.
    pub fn share(&self, label: &str) -> Option<Percentage> {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| Percentage::of(*n, self.total))
    }
}

/// Label a record's furnishing status: the canonical label for known statuses, otherwise the
/// trimmed lowercase raw text (or `unspecified` when blank).
fn furnishing_label(record: &ListingRecord) -> String {
    match record.furnishing_status.parse::<FurnishingStatus>() {
        Ok(status) => status.label().to_string(),
        Err(_) => {
            let raw = record.furnishing_status.trim().to_lowercase();
            if raw.is_empty() {
                log::warn!("listing in {} has no furnishing status", record.city.trim());
                "unspecified".to_string()
            } else {
                raw
            }
        }
    }
}

/// For each city, the share of every furnishing status among that city's listings.
///
/// Every listing counts toward its city's total, so the shares of a city add up to 100%.
pub fn furnishing_distribution_by_city(
    records: &[ListingRecord],
) -> AggregateResult<CityName, FurnishingBreakdown> {
    let mut tally: Tally<CityName, FurnishingBreakdown> = Tally::new();
    for record in records {
        tally
            .entry(record.city_name(), FurnishingBreakdown::default)
            .add(furnishing_label(record));
    }
    AggregateResult::new(tally.into_entries(), 0)
}
