//! Multi-criteria search built from optional constraints.

use crate::processing::{
    and, by_bhk, by_city, by_furnishing, by_max_rent, by_min_rent, filter_by_field,
};
use crate::types::{FurnishingStatus, ListingRecord};

/// A boxed record predicate.
pub type Predicate = Box<dyn Fn(&ListingRecord) -> bool>;

/// Search criteria. Every field left as `None` places no constraint on the result.
///
/// `Some` values are always applied literally: `city: Some(String::new())` matches no record,
/// because every loaded record has a non-empty city.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub bhk: Option<i64>,
    pub city: Option<String>,
    pub min_rent: Option<f64>,
    pub max_rent: Option<f64>,
    pub furnishing: Option<FurnishingStatus>,
}

impl ListingQuery {
    /// A query with no constraints; matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bhk(mut self, bhk: i64) -> Self {
        self.bhk = Some(bhk);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_min_rent(mut self, min: f64) -> Self {
        self.min_rent = Some(min);
        self
    }

    pub fn with_max_rent(mut self, max: f64) -> Self {
        self.max_rent = Some(max);
        self
    }

    pub fn with_furnishing(mut self, status: FurnishingStatus) -> Self {
        self.furnishing = Some(status);
        self
    }

    /// Compose the configured constraints into a single predicate.
    pub fn predicate(&self) -> Predicate {
        let mut pred: Predicate = Box::new(|_: &ListingRecord| true);
        if let Some(bhk) = self.bhk {
            pred = Box::new(and(pred, by_bhk(bhk)));
        }
        if let Some(city) = &self.city {
            pred = Box::new(and(pred, by_city(city)));
        }
        if let Some(min) = self.min_rent {
            pred = Box::new(and(pred, by_min_rent(min)));
        }
        if let Some(max) = self.max_rent {
            pred = Box::new(and(pred, by_max_rent(max)));
        }
        if let Some(status) = self.furnishing {
            pred = Box::new(and(pred, by_furnishing(status)));
        }
        pred
    }

    /// Records matching every configured constraint, in original order.
    pub fn run(&self, records: &[ListingRecord]) -> Vec<ListingRecord> {
        filter_by_field(records, self.predicate())
    }
}

/// Predicate for the advanced search menu: any combination of BHK, city and maximum rent.
pub fn advanced_search(bhk: Option<i64>, city: Option<&str>, max_rent: Option<f64>) -> Predicate {
    ListingQuery {
        bhk,
        city: city.map(str::to_owned),
        max_rent,
        ..Default::default()
    }
    .predicate()
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
            listing("Delhi", "2", "20000", "Furnished"),
            listing("Mumbai", "2", "50000", "Furnished"),
            listing("delhi", "3", "35000", "Unfurnished"),
            listing("Chennai", "1", "abc", "Semi-Furnished"),
        ]
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(ListingQuery::new().run(&sample()).len(), 4);
        let pred = advanced_search(None, None, None);
        assert!(sample().iter().all(|r| pred(r)));
    }

    #[test]
    fn city_only_search_ignores_other_criteria() {
        let pred = advanced_search(None, Some("Delhi"), None);
        let out = filter_by_field(&sample(), pred);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.city_name().as_str() == "delhi"));
    }

    #[test]
    fn explicit_values_are_not_wildcards() {
        assert!(ListingQuery::new().with_city("").run(&sample()).is_empty());
        assert!(ListingQuery::new().with_bhk(0).run(&sample()).is_empty());
        // Only the invalid-rent listing would pass a zero ceiling, and invalid rent never matches.
        assert!(ListingQuery::new().with_max_rent(0.0).run(&sample()).is_empty());
    }

    #[test]
    fn combined_criteria_are_conjunctive() {
        let out = ListingQuery::new()
            .with_bhk(2)
            .with_max_rent(30000.0)
            .run(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].city, "Delhi");

        let out = ListingQuery::new()
            .with_min_rent(20000.0)
            .with_max_rent(40000.0)
            .with_furnishing(FurnishingStatus::Unfurnished)
            .run(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].bhk, "3");
    }
}
