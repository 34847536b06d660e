//! One-shot conversion of the raw rental CSV into the JSON dataset read by `rental-explorer`.
//!
//! Usage: `csv-to-json [INPUT.csv] [OUTPUT.json]`

use anyhow::{Context, Result};
use rental_listings::ingestion::convert_csv_to_json;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let csv_path = args.next().unwrap_or_else(|| "House_Rent_Dataset.csv".to_string());
    let json_path = args.next().unwrap_or_else(|| "House_Rent_Dataset.json".to_string());

    let count = convert_csv_to_json(&csv_path, &json_path)
        .with_context(|| format!("failed to convert {csv_path} to {json_path}"))?;
    println!("Conversion complete. {count} listings saved to {json_path}");
    Ok(())
}
