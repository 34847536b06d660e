//! Filter-then-project composition.

use crate::processing::{by_city, filter_by_field, project};
use crate::types::{DataSet, ListingField, ListingRecord};

/// Keep the records matching `predicate`, then project them onto `fields`.
///
/// Filtering always runs first so the predicate can read fields the projection drops.
pub fn select_where<F>(records: &[ListingRecord], predicate: F, fields: &[ListingField]) -> DataSet
where
    F: Fn(&ListingRecord) -> bool,
{
    project(&filter_by_field(records, predicate), fields)
}

/// Listings of one city, projected onto `fields`.
pub fn city_view(records: &[ListingRecord], city: &str, fields: &[ListingField]) -> DataSet {
    select_where(records, by_city(city), fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::by_bhk;
    use crate::types::Value;

    fn listing(city: &str, bhk: &str, rent: &str) -> ListingRecord {
        ListingRecord {
            posted_on: "2022-06-01".to_string(),
            city: city.to_string(),
            bhk: bhk.to_string(),
            rent: rent.to_string(),
            size: "700".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn predicate_may_use_fields_the_projection_drops() {
        let ds = vec![listing("Pune", "1", "8000"), listing("Pune", "2", "15000")];
        let out = select_where(&ds, by_bhk(2), &[ListingField::Rent]);
        assert_eq!(out.rows, vec![vec![Value::Float64(15000.0)]]);
    }

    #[test]
    fn city_view_picks_requested_columns() {
        let ds = vec![
            listing("Pune", "1", "8000"),
            listing("Delhi", "2", "15000"),
            listing(" PUNE", "3", "20000"),
        ];
        let out = city_view(
            &ds,
            "pune",
            &[ListingField::PostedOn, ListingField::Rent, ListingField::Size],
        );
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.value(1, ListingField::Rent), Some(&Value::Float64(20000.0)));
        assert_eq!(out.value(0, ListingField::City), None);
    }
}
