//! Loading of the listing dataset.
//!
//! Most callers should use [`load_listings`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`LoadOptions`])
//! - reads the whole dataset into memory once
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Format-specific functions are also available under [`csv`] and [`json`], together with
//! [`convert_csv_to_json`], the one-shot conversion of the raw CSV into the JSON dataset.

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use csv::convert_csv_to_json;
pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver,
};
pub use unified::{load_listings, ListingFormat, LoadOptions};

use crate::error::{ListingError, ListingResult};
use crate::types::ListingRecord;

/// Every loaded record must name a city.
fn validate_records(records: &[ListingRecord]) -> ListingResult<()> {
    for (idx0, record) in records.iter().enumerate() {
        if record.city.trim().is_empty() {
            return Err(ListingError::InvalidRecord {
                row: idx0 + 1,
                column: "City".to_string(),
                raw: record.city.clone(),
                message: "city must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
