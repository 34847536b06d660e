//! In-memory transformations over a collection of [`crate::types::ListingRecord`]s.
//!
//! Every operation takes a borrowed slice and returns a new collection; the loaded dataset is
//! never mutated.
//!
//! - [`filter`]: predicate filtering, single-field predicates and the [`and`] combinator
//! - [`sort`]: stable ascending/descending sort on a derived key
//! - [`group`]: grouping by key in first-seen order, and flattening back
//! - [`project`]: field projection into a [`crate::types::DataSet`]
//!
//! ## Example: filter → sort → project
//!
//! ```rust
//! use rental_listings::processing::{
//!     and, by_bhk, by_city, filter_by_field, project, sort_by_field, SortDirection, SortField,
//! };
//! use rental_listings::types::{ListingField, ListingRecord, Value};
//!
//! let listing = |city: &str, bhk: &str, rent: &str| ListingRecord {
//!     city: city.to_string(),
//!     bhk: bhk.to_string(),
//!     rent: rent.to_string(),
//!     ..Default::default()
//! };
//! let records = vec![
//!     listing("Mumbai", "2", "30000"),
//!     listing("mumbai ", "2", "18000"),
//!     listing("Delhi", "2", "15000"),
//! ];
//!
//! let two_bhk_mumbai = filter_by_field(&records, and(by_city("Mumbai"), by_bhk(2)));
//! let cheapest_first = sort_by_field(&two_bhk_mumbai, SortField::Rent, SortDirection::Ascending);
//! let view = project(&cheapest_first, &[ListingField::Rent]);
//!
//! assert_eq!(view.rows[0][0], Value::Float64(18000.0));
//! ```

pub mod filter;
pub mod group;
pub mod project;
pub mod sort;

pub use filter::{
    and, by_bhk, by_city, by_furnishing, by_max_rent, by_min_rent, by_rent_range, filter_by_bhk,
    filter_by_city, filter_by_field, filter_by_furnishing, filter_by_rent_range,
};
pub use group::{flatten, group_by, group_by_bhk_sorted_by_size, Group};
pub use project::{map_records, project};
pub use sort::{sort_by, sort_by_field, SortDirection, SortField};
