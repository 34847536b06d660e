//! Record filtering.
//!
//! Predicates are plain closures over `&ListingRecord`. The `by_*` constructors build the
//! single-field predicates used by the menus, and [`and`] composes them; multi-field filters are
//! expressed as compositions rather than dedicated functions.

use crate::types::{normalize_city, FurnishingStatus, ListingRecord};

/// Returns a new collection containing only records for which `predicate` returns `true`.
///
/// Relative order is preserved and the input is left untouched.
pub fn filter_by_field<F>(records: &[ListingRecord], predicate: F) -> Vec<ListingRecord>
where
    F: Fn(&ListingRecord) -> bool,
{
    records.iter().filter(|r| predicate(r)).cloned().collect()
}

/// Records whose normalized city equals the normalized `name`.
pub fn filter_by_city(records: &[ListingRecord], name: &str) -> Vec<ListingRecord> {
    filter_by_field(records, by_city(name))
}

/// Records whose BHK parses to `bhk`.
pub fn filter_by_bhk(records: &[ListingRecord], bhk: i64) -> Vec<ListingRecord> {
    filter_by_field(records, by_bhk(bhk))
}

/// Records with a valid rent in `min..=max`.
pub fn filter_by_rent_range(records: &[ListingRecord], min: f64, max: f64) -> Vec<ListingRecord> {
    filter_by_field(records, by_rent_range(min, max))
}

/// Records with the given furnishing status.
pub fn filter_by_furnishing(
    records: &[ListingRecord],
    status: FurnishingStatus,
) -> Vec<ListingRecord> {
    filter_by_field(records, by_furnishing(status))
}

/// Predicate: city matches after trimming and case-folding both sides.
pub fn by_city(name: &str) -> impl Fn(&ListingRecord) -> bool + use<> {
    let wanted = normalize_city(name);
    move |r| normalize_city(&r.city) == wanted
}

/// Predicate: BHK parses to `bhk`. Unparseable BHK never matches.
pub fn by_bhk(bhk: i64) -> impl Fn(&ListingRecord) -> bool {
    move |r| r.bhk() == Some(bhk)
}

/// Predicate: rent is valid and within `min..=max`. Invalid rent never matches.
pub fn by_rent_range(min: f64, max: f64) -> impl Fn(&ListingRecord) -> bool {
    move |r| r.rent().is_some_and(|rent| rent >= min && rent <= max)
}

/// Predicate: rent is valid and at most `max`.
pub fn by_max_rent(max: f64) -> impl Fn(&ListingRecord) -> bool {
    move |r| r.rent().is_some_and(|rent| rent <= max)
}

/// Predicate: rent is valid and at least `min`.
pub fn by_min_rent(min: f64) -> impl Fn(&ListingRecord) -> bool {
    move |r| r.rent().is_some_and(|rent| rent >= min)
}

/// Predicate: furnishing status equals `status`. Unknown statuses never match.
pub fn by_furnishing(status: FurnishingStatus) -> impl Fn(&ListingRecord) -> bool {
    move |r| r.furnishing() == Some(status)
}

/// Conjunction of two predicates.
pub fn and<A, B>(a: A, b: B) -> impl Fn(&ListingRecord) -> bool
where
    A: Fn(&ListingRecord) -> bool,
    B: Fn(&ListingRecord) -> bool,
{
    move |r| a(r) && b(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(city: &str, bhk: &str, rent: &str, furnishing: &str) -> ListingRecord {
        ListingRecord {
            city: city.to_string(),
            bhk: bhk.to_string(),
            rent: rent.to_string(),
            furnishing_status: furnishing.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ListingRecord> {
        vec![
            listing("Mumbai", "2", "30000", "Furnished"),
            listing(" mumbai", "1", "12000", "Unfurnished"),
            listing("Delhi", "2", "abc", "Semi-Furnished"),
            listing("Pune", "x", "9000", "semi-furnished"),
            listing("Delhi", "3", "45000", "Furnished"),
        ]
    }

    #[test]
    fn filter_by_city_ignores_case_and_whitespace() {
        let ds = sample();
        let out = filter_by_city(&ds, "MUMBAI ");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].bhk, "2");
        assert_eq!(out[1].bhk, "1");
        // Original unchanged
        assert_eq!(ds.len(), 5);
    }

    #[test]
    fn explicit_empty_city_matches_nothing() {
        assert!(filter_by_city(&sample(), "").is_empty());
    }

    #[test]
    fn filter_by_bhk_skips_unparseable_values() {
        let out = filter_by_bhk(&sample(), 2);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.bhk() == Some(2)));
    }

    #[test]
    fn filter_by_rent_range_is_inclusive_and_skips_invalid_rent() {
        let out = filter_by_rent_range(&sample(), 9000.0, 30000.0);
        let rents: Vec<&str> = out.iter().map(|r| r.rent.as_str()).collect();
        assert_eq!(rents, vec!["30000", "12000", "9000"]);

        assert!(filter_by_rent_range(&sample(), 50000.0, 10.0).is_empty());
    }

    #[test]
    fn filter_by_furnishing_is_case_insensitive() {
        let out = filter_by_furnishing(&sample(), FurnishingStatus::SemiFurnished);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn and_composes_city_and_bhk() {
        let out = filter_by_field(&sample(), and(by_city("delhi"), by_bhk(2)));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rent, "abc");

        let out = filter_by_field(
            &sample(),
            and(by_rent_range(10000.0, 50000.0), by_furnishing(FurnishingStatus::Furnished)),
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn filter_on_empty_input_returns_empty() {
        assert!(filter_by_city(&[], "Pune").is_empty());
    }
}
