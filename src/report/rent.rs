//! Rent aggregates.

use crate::types::{CityName, ListingRecord};

use super::{AggregateResult, RentAverage, Tally};

/// Mean valid rent per normalized city, in first-seen city order.
///
/// Records with a malformed rent are skipped; a city whose records are all skipped does not
/// appear in the result.
pub fn average_rent_by_city(records: &[ListingRecord]) -> AggregateResult<CityName, RentAverage> {
    let mut tally: Tally<CityName, RentAverage> = Tally::new();
    let mut skipped = 0;

    for record in records {
        match record.rent() {
            Some(rent) => tally.entry(record.city_name(), RentAverage::default).add(rent),
            None => {
                skipped += 1;
                log::warn!(
                    "skipping invalid rent value for city {}: '{}'",
                    record.city.trim(),
                    record.rent
                );
            }
        }
    }

    AggregateResult::new(tally.into_entries(), skipped)
}

/// Mean valid rent per BHK count, ordered by ascending BHK.
///
/// Records with a malformed BHK or rent are skipped with a warning.
pub fn average_rent_by_bhk(records: &[ListingRecord]) -> AggregateResult<i64, RentAverage> {
    let mut tally: Tally<i64, RentAverage> = Tally::new();
    let mut skipped = 0;

    for record in records {
        match (record.bhk(), record.rent()) {
            (Some(bhk), Some(rent)) => tally.entry(bhk, RentAverage::default).add(rent),
            _ => {
                skipped += 1;
                log::warn!(
                    "skipping invalid BHK or Rent value. BHK: '{}', Rent: '{}'",
                    record.bhk,
                    record.rent
                );
            }
        }
    }

    let mut entries = tally.into_entries();
    entries.sort_by_key(|(bhk, _)| *bhk);
    AggregateResult::new(entries, skipped)
}

/// Highest valid rent among records whose BHK equals `bhk`.
///
/// Returns `0.0` when no record matches. Matching records with a malformed rent are skipped with a
/// warning.
pub fn max_rent_for_bhk(records: &[ListingRecord], bhk: i64) -> f64 {
    records
        .iter()
        .filter(|r| r.bhk() == Some(bhk))
        .filter_map(|r| {
            let rent = r.rent();
            if rent.is_none() {
                log::warn!(
                    "skipping invalid rent value for {bhk} BHK in {}: '{}'",
                    r.city.trim(),
                    r.rent
                );
            }
            rent
        })
        .fold(0.0, f64::max)
}
