//! Parameterized query construction.
//!
//! - [`ListingQuery`]: optional BHK / city / rent bounds / furnishing constraints composed into one
//!   predicate; [`advanced_search`] is the BHK + city + maximum-rent form
//! - [`incremental_rent_adjustment`]: percentage rent scaling into a reduced view
//! - [`select_where`]: filter-then-project composition
//! - [`params`]: parsing of user-entered parameters into validated values

pub mod adjust;
pub mod compose;
pub mod params;
pub mod search;

pub use adjust::{adjustment_schema, apply_rent_adjustment, incremental_rent_adjustment, round_half_up};
pub use compose::{city_view, select_where};
pub use search::{advanced_search, ListingQuery, Predicate};
