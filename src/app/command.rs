//! Menu commands and their execution against the loaded dataset.
//!
//! The console binary turns menu choices and prompt answers into a [`Command`]; [`execute`] runs
//! it and returns an [`Outcome`] for display. Nothing here reads from or writes to the terminal.

use crate::error::ListingResult;
use crate::processing::{
    and, by_bhk, by_city, by_furnishing, by_rent_range, filter_by_bhk, filter_by_city,
    filter_by_field, filter_by_rent_range, flatten, group_by_bhk_sorted_by_size, project,
    sort_by_field, SortDirection, SortField,
};
use crate::query::{apply_rent_adjustment, city_view, ListingQuery};
use crate::report::{
    average_rent_by_bhk, average_rent_by_city, furnishing_distribution_by_city,
    listing_counts_by_city, max_rent_for_bhk, max_size_listing, top_n_cities_by_listing_count,
};
use crate::types::{DataSet, FurnishingStatus, ListingField, Value};

use super::context::AppContext;

/// One action reachable from the menus.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    DisplayAll,
    Sort(SortField, SortDirection),
    FilterCity(String),
    FilterRentRange { min: f64, max: f64 },
    FilterBhk(i64),
    FilterBhkAndCity { bhk: i64, city: String },
    FilterRentAndFurnishing {
        min: f64,
        max: f64,
        furnishing: FurnishingStatus,
    },
    AdvancedSearch(ListingQuery),
    AdjustRent { percent: f64 },
    CityView(String),
    BhkSizeBreakdown,
    AverageRentByCity,
    AverageRentByBhk,
    TopCities,
    MaxRentForBhk(i64),
    ListingCounts,
    MaxSizeListing,
    FurnishingDistribution,
}

/// Result of a command, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Listing rows, shown page by page.
    Table { title: String, data: DataSet },
    /// A short report.
    Summary {
        title: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A single line of feedback.
    Message(String),
}

fn table(title: impl Into<String>, data: DataSet) -> Outcome {
    Outcome::Table {
        title: title.into(),
        data,
    }
}

fn summary(title: impl Into<String>, headers: &[&str], rows: Vec<Vec<String>>) -> Outcome {
    Outcome::Summary {
        title: title.into(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

/// Run `command` against the context's dataset.
///
/// Fails only for parameters the core rejects (e.g. an out-of-range rent adjustment).
pub fn execute(ctx: &AppContext, command: &Command) -> ListingResult<Outcome> {
    let records = ctx.listings();
    let all = &ListingField::ALL;

    let outcome = match command {
        Command::DisplayAll => table("All listings", project(records, all)),
        Command::Sort(field, direction) => {
            let sorted = sort_by_field(records, *field, *direction);
            table(
                format!("Sorted by {field:?} ({direction:?})"),
                project(&sorted, &field.view_fields()),
            )
        }
        Command::FilterCity(city) => table(
            format!("Listings in {}", city.trim()),
            project(&filter_by_city(records, city), all),
        ),
        Command::FilterRentRange { min, max } => table(
            format!("Rent between {min} and {max}"),
            project(&filter_by_rent_range(records, *min, *max), all),
        ),
        Command::FilterBhk(bhk) => table(
            format!("{bhk} BHK listings"),
            project(&filter_by_bhk(records, *bhk), all),
        ),
        Command::FilterBhkAndCity { bhk, city } => table(
            format!("{bhk} BHK listings in {}", city.trim()),
            project(&filter_by_field(records, and(by_bhk(*bhk), by_city(city))), all),
        ),
        Command::FilterRentAndFurnishing {
            min,
            max,
            furnishing,
        } => table(
            format!("{furnishing} listings with rent between {min} and {max}"),
            project(
                &filter_by_field(
                    records,
                    and(by_rent_range(*min, *max), by_furnishing(*furnishing)),
                ),
                all,
            ),
        ),
        Command::AdvancedSearch(query) => table("Search results", project(&query.run(records), all)),
        Command::AdjustRent { percent } => table(
            format!("Rent adjusted by {percent}%"),
            apply_rent_adjustment(records, *percent)?,
        ),
        Command::CityView(city) => table(
            format!("Listings for city: {}", city.trim()),
            city_view(
                records,
                city,
                &[ListingField::PostedOn, ListingField::Rent, ListingField::Size],
            ),
        ),
        Command::BhkSizeBreakdown => {
            let groups = group_by_bhk_sorted_by_size(records);
            table(
                "Listings by BHK, smallest first",
                project(
                    &flatten(&groups),
                    &[
                        ListingField::RentedOn,
                        ListingField::Size,
                        ListingField::Bhk,
                        ListingField::City,
                    ],
                ),
            )
        }
        Command::AverageRentByCity => summary(
            "Average Rent by City",
            &["City", "Average_Rent"],
            average_rent_by_city(records)
                .iter()
                .map(|(city, avg)| vec![city.to_string(), avg.to_string()])
                .collect(),
        ),
        Command::AverageRentByBhk => summary(
            "Average Rent per BHK Category",
            &["BHK", "Average_Rent"],
            average_rent_by_bhk(records)
                .iter()
                .map(|(bhk, avg)| vec![bhk.to_string(), avg.to_string()])
                .collect(),
        ),
        Command::TopCities => summary(
            format!("Top {} Cities with the Most Rentals", ctx.config.top_cities),
            &["City", "Count"],
            top_n_cities_by_listing_count(records, ctx.config.top_cities)
                .iter()
                .map(|(city, n)| vec![city.to_string(), n.to_string()])
                .collect(),
        ),
        Command::MaxRentForBhk(bhk) => summary(
            format!("Results for {bhk}BHK category"),
            &["BHK", "Max_Rent"],
            vec![vec![
                bhk.to_string(),
                Value::Float64(max_rent_for_bhk(records, *bhk)).to_string(),
            ]],
        ),
        Command::ListingCounts => summary(
            "Listings per City",
            &["City", "Listings"],
            listing_counts_by_city(records)
                .iter()
                .map(|(city, n)| vec![city.to_string(), n.to_string()])
                .collect(),
        ),
        Command::MaxSizeListing => match max_size_listing(records) {
            Some(listing) => table(
                "Listing with the Maximum Size",
                project(std::slice::from_ref(&listing), all),
            ),
            None => Outcome::Message("No listings with a valid size found.".to_string()),
        },
        Command::FurnishingDistribution => summary(
            "Percentage of Each Furnishing Type in Each City",
            &["City", "Furnishing", "Share"],
            furnishing_distribution_by_city(records)
                .iter()
                .flat_map(|(city, breakdown)| {
                    breakdown
                        .percentages()
                        .into_iter()
                        .map(move |(label, pct)| vec![city.to_string(), label, pct.to_string()])
                })
                .collect(),
        ),
    };

    Ok(outcome)
}
