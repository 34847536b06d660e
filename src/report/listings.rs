//! Listing counts and extremes.

use crate::types::{CityName, ListingRecord};

use super::{AggregateResult, Tally};

/// Number of listings per normalized city, in first-seen city order.
///
/// Every record counts, whatever the state of its numeric fields. The input must be flat; use
/// [`crate::processing::flatten`] on grouped results first.
pub fn listing_counts_by_city(records: &[ListingRecord]) -> AggregateResult<CityName, usize> {
    let mut tally: Tally<CityName, usize> = Tally::new();
    for record in records {
        *tally.entry(record.city_name(), || 0) += 1;
    }
    AggregateResult::new(tally.into_entries(), 0)
}

/// The `n` cities with the most listings, by descending count.
///
/// Cities with equal counts keep first-seen order.
pub fn top_n_cities_by_listing_count(
    records: &[ListingRecord],
    n: usize,
) -> AggregateResult<CityName, usize> {
    let mut entries = listing_counts_by_city(records).into_entries();
    entries.sort_by(|(_, a), (_, b)| b.cmp(a));
    entries.truncate(n);
    AggregateResult::new(entries, 0)
}

/// The listing with the largest valid size, or `None` if no listing has one.
///
/// On equal sizes the earliest listing wins. Listings with a missing, zero or non-numeric size
/// are skipped with a warning.
pub fn max_size_listing(records: &[ListingRecord]) -> Option<ListingRecord> {
    let mut best: Option<(f64, &ListingRecord)> = None;
    for record in records {
        match record.size() {
            Some(size) => {
                if best.is_none_or(|(max, _)| size > max) {
                    best = Some((size, record));
                }
            }
            None => log::warn!(
                "invalid size '{}' for listing (city='{}', posted_on='{}')",
                record.size,
                record.city,
                record.posted_on
            ),
        }
    }
    best.map(|(_, r)| r.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(city: &str, size: &str) -> ListingRecord {
        ListingRecord {
            city: city.to_string(),
            size: size.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn counts_merge_city_spellings() {
        let counts =
            listing_counts_by_city(&[listing("Pune", ""), listing("pune", ""), listing("Delhi", "")]);
        assert_eq!(counts.get("pune"), Some(&2));
        assert_eq!(counts.get("delhi"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn top_n_orders_by_count_then_first_seen() {
        let ds = vec![
            listing("Agra", ""),
            listing("Pune", ""),
            listing("Delhi", ""),
            listing("Pune", ""),
            listing("Delhi", ""),
            listing("Goa", ""),
        ];
        let top = top_n_cities_by_listing_count(&ds, 3);
        let keys: Vec<&str> = top.keys().map(CityName::as_str).collect();
        assert_eq!(keys, vec!["pune", "delhi", "agra"]);

        assert!(top_n_cities_by_listing_count(&ds, 0).is_empty());
        assert_eq!(top_n_cities_by_listing_count(&ds, 10).len(), 4);
    }

    #[test]
    fn max_size_returns_the_largest_valid_listing() {
        let ds = vec![
            listing("A", "900"),
            listing("B", "abc"),
            listing("C", "1500"),
            listing("D", "1500"),
            listing("E", ""),
        ];
        assert_eq!(max_size_listing(&ds).unwrap().city, "C");
    }

    #[test]
    fn max_size_is_none_when_no_size_is_valid() {
        let ds = vec![listing("A", "0"), listing("B", "n/a"), listing("C", "")];
        assert_eq!(max_size_listing(&ds), None);
        assert_eq!(max_size_listing(&[]), None);
    }
}
