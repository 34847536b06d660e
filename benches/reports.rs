use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rental_listings::processing::{filter_by_city, sort_by_field, SortDirection, SortField};
use rental_listings::query::{apply_rent_adjustment, ListingQuery};
use rental_listings::report::{
    average_rent_by_bhk, average_rent_by_city, furnishing_distribution_by_city,
    top_n_cities_by_listing_count,
};
use rental_listings::types::{FurnishingStatus, ListingRecord};

const CITIES: [&str; 6] = ["Kolkata", "Mumbai", "Bangalore", "Delhi", "Chennai", "Hyderabad"];
const FURNISHING: [&str; 3] = ["Furnished", "Semi-Furnished", "Unfurnished"];

/// Roughly the size of the real dataset, with one malformed rent in every hundred rows.
fn synthetic_listings(n: usize) -> Vec<ListingRecord> {
    (0..n)
        .map(|i| ListingRecord {
            posted_on: format!("2022-0{}-{:02}", 4 + i % 4, 1 + i % 28),
            bhk: (1 + i % 4).to_string(),
            rent: if i % 100 == 99 {
                "n/a".to_string()
            } else {
                (5_000 + (i * 7_919) % 95_000).to_string()
            },
            size: (300 + (i * 37) % 2_000).to_string(),
            city: CITIES[i % CITIES.len()].to_string(),
            furnishing_status: FURNISHING[i % FURNISHING.len()].to_string(),
            ..Default::default()
        })
        .collect()
}

fn bench_reports(c: &mut Criterion) {
    let listings = synthetic_listings(5_000);

    c.bench_function("average_rent_by_city_5k", |b| {
        b.iter(|| average_rent_by_city(black_box(&listings)))
    });
    c.bench_function("average_rent_by_bhk_5k", |b| {
        b.iter(|| average_rent_by_bhk(black_box(&listings)))
    });
    c.bench_function("top_3_cities_5k", |b| {
        b.iter(|| top_n_cities_by_listing_count(black_box(&listings), 3))
    });
    c.bench_function("furnishing_distribution_5k", |b| {
        b.iter(|| furnishing_distribution_by_city(black_box(&listings)))
    });
}

fn bench_queries(c: &mut Criterion) {
    let listings = synthetic_listings(5_000);
    let query = ListingQuery::new()
        .with_bhk(2)
        .with_city("mumbai")
        .with_max_rent(40_000.0)
        .with_furnishing(FurnishingStatus::Furnished);

    c.bench_function("filter_by_city_5k", |b| {
        b.iter(|| filter_by_city(black_box(&listings), "Mumbai"))
    });
    c.bench_function("sort_by_rent_desc_5k", |b| {
        b.iter(|| sort_by_field(black_box(&listings), SortField::Rent, SortDirection::Descending))
    });
    c.bench_function("composed_query_5k", |b| b.iter(|| query.run(black_box(&listings))));
    c.bench_function("rent_adjustment_5k", |b| {
        b.iter(|| apply_rent_adjustment(black_box(&listings), 10.0))
    });
}

criterion_group!(benches, bench_reports, bench_queries);
criterion_main!(benches);
