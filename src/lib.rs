//! `rental-listings` is an in-memory query and report engine over house rental listings.
//!
//! The dataset is loaded once (see [`ingestion::load_listings`]) into a `Vec` of
//! [`types::ListingRecord`]s and never mutated afterwards. Everything else is a pure function
//! from a borrowed slice of records to a new collection, a [`types::DataSet`] projection or an
//! aggregate report.
//!
//! ## What you can load
//!
//! - **JSON**: `.json` (array of objects, or one object per line)
//! - **CSV**: `.csv` with the dataset's header row; [`ingestion::convert_csv_to_json`] turns it
//!   into the JSON form once
//!
//! Field values are kept as the text they arrived with. Numeric views ([`types::ListingRecord::rent`],
//! [`types::ListingRecord::bhk`], ...) parse on demand and return `None` for malformed values,
//! which filters exclude and reports skip.
//!
//! ## Quick example: load and report
//!
//! ```no_run
//! use rental_listings::ingestion::{load_listings, LoadOptions};
//! use rental_listings::report::average_rent_by_city;
//!
//! # fn main() -> Result<(), rental_listings::ListingError> {
//! let listings = load_listings("House_Rent_Dataset.json", &LoadOptions::default())?;
//! for (city, avg) in average_rent_by_city(&listings).iter() {
//!     println!("{city}: {avg}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the listing record, field names, and the tabular [`types::DataSet`]
//! - [`processing`]: filter, sort, group and project
//! - [`query`]: composed searches, rent adjustment and user-parameter parsing
//! - [`report`]: aggregate reports (averages, counts, maxima, furnishing shares)
//! - [`ingestion`]: JSON/CSV loading with load observers
//! - [`app`]: configuration, menu commands, pagination and table rendering for the console
//! - [`error`]: the crate-wide error type
//!
//! ## Query example
//!
//! ```rust
//! use rental_listings::query::{apply_rent_adjustment, ListingQuery};
//! use rental_listings::types::{ListingField, ListingRecord, Value};
//!
//! let listing = |city: &str, bhk: &str, rent: &str| ListingRecord {
//!     city: city.to_string(),
//!     bhk: bhk.to_string(),
//!     rent: rent.to_string(),
//!     ..Default::default()
//! };
//! let records = vec![listing("Kolkata", "2", "10000"), listing("Chennai", "2", "9000")];
//!
//! let hits = ListingQuery::new().with_bhk(2).with_max_rent(9500.0).run(&records);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].city, "Chennai");
//!
//! let adjusted = apply_rent_adjustment(&records, 10.0).unwrap();
//! assert_eq!(adjusted.value(0, ListingField::Rent), Some(&Value::Int64(11000)));
//! ```

pub mod app;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod query;
pub mod report;
pub mod types;

pub use error::{ListingError, ListingResult};
