//! Stable, key-based sorting of records.

use std::cmp::Ordering;

use crate::types::{ListingField, ListingRecord};

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Numeric fields offered by the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Rent,
    Bhk,
    Size,
}

impl SortField {
    /// Columns shown alongside a listing sorted by this field.
    pub fn view_fields(self) -> Vec<ListingField> {
        match self {
            Self::Rent => vec![
                ListingField::RentedOn,
                ListingField::Bhk,
                ListingField::Rent,
                ListingField::City,
            ],
            Self::Bhk => vec![
                ListingField::RentedOn,
                ListingField::Bhk,
                ListingField::City,
                ListingField::FurnishingStatus,
            ],
            Self::Size => vec![
                ListingField::RentedOn,
                ListingField::Size,
                ListingField::City,
                ListingField::Floor,
            ],
        }
    }

    fn key(self, record: &ListingRecord) -> Option<f64> {
        match self {
            Self::Rent => record.rent(),
            Self::Bhk => record.bhk().map(|v| v as f64),
            Self::Size => record.size(),
        }
    }
}

/// Returns a copy of `records` sorted by `key`.
///
/// The sort is stable in both directions: records with equal keys keep their original relative
/// order. Records for which `key` returns `None` have no sortable value; they are left out of the
/// result and reported with a warning.
pub fn sort_by<K, F>(records: &[ListingRecord], key: F, direction: SortDirection) -> Vec<ListingRecord>
where
    K: PartialOrd,
    F: Fn(&ListingRecord) -> Option<K>,
{
    let mut keyed: Vec<(K, &ListingRecord)> = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        match key(record) {
            Some(k) => keyed.push((k, record)),
            None => log::warn!("skipping listing #{idx} from sort: no sortable value (city='{}')", record.city),
        }
    }

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Sort by one of the numeric [`SortField`]s, skipping records whose value is malformed.
pub fn sort_by_field(
    records: &[ListingRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<ListingRecord> {
    sort_by(records, |r| field.key(r), direction)
}
