//! CSV loading and the one-shot CSV → JSON conversion.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{ListingError, ListingResult};
use crate::types::{ListingField, ListingRecord};

use super::validate_records;

/// Load listings from a CSV file.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain every listing column, in either the underscore (`Posted_On`) or the
///   spaced (`Posted On`) spelling; order can differ and extra columns are ignored.
/// - Values are kept as text; malformed numbers are handled later by the consumers.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> ListingResult<Vec<ListingRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load listings from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ListingResult<Vec<ListingRecord>> {
    let headers = rdr.headers()?.clone();

    for field in ListingField::ALL {
        let underscored = field.column_name();
        let spaced = underscored.replace('_', " ");
        if !headers.iter().any(|h| h == underscored || h == spaced) {
            return Err(ListingError::SchemaMismatch {
                message: format!(
                    "missing required column '{underscored}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            });
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize::<ListingRecord>() {
        records.push(result?);
    }
    // Row numbers are 1-based data rows; the header is not counted.
    validate_records(&records)?;
    Ok(records)
}

/// Convert a CSV dataset into a pretty-printed JSON array of listing objects.
///
/// Returns the number of records written.
pub fn convert_csv_to_json(
    csv_path: impl AsRef<Path>,
    json_path: impl AsRef<Path>,
) -> ListingResult<usize> {
    let records = load_csv_from_path(csv_path)?;

    let mut out = BufWriter::new(File::create(json_path)?);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut ser)?;
    out.flush()?;

    log::debug!("converted {} listings to json", records.len());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Posted On,BHK,Rent,Size,Floor,Area Type,Area Locality,City,Furnishing Status,Tenant Preferred,Bathroom,Point of Contact";

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes())
    }

    #[test]
    fn reads_spaced_headers() {
        let input = format!(
            "{HEADER}\n2022-05-18,2,10000,1100,Ground out of 2,Super Area,Bandel,Kolkata,Unfurnished,Bachelors/Family,2,Contact Owner\n"
        );
        let records = load_csv_from_reader(&mut reader(&input)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].posted_on, "2022-05-18");
        assert_eq!(records[0].floor, "Ground out of 2");
        assert_eq!(records[0].rent(), Some(10000.0));
        assert_eq!(records[0].point_of_contact, "Contact Owner");
    }

    #[test]
    fn keeps_malformed_numbers_as_text() {
        let input = format!(
            "{HEADER}\n2022-05-18,two,abc,,1 out of 3,Carpet Area,Salt Lake,Kolkata,Furnished,Family,1,Contact Agent\n"
        );
        let records = load_csv_from_reader(&mut reader(&input)).unwrap();
        assert_eq!(records[0].bhk, "two");
        assert_eq!(records[0].rent, "abc");
        assert_eq!(records[0].size(), None);
    }

    #[test]
    fn errors_on_missing_required_column() {
        let input = "Posted On,BHK,Rent\n2022-05-18,2,10000\n";
        let msg = load_csv_from_reader(&mut reader(input)).unwrap_err().to_string();
        assert!(msg.contains("schema mismatch"));
        assert!(msg.contains("missing required column 'Size'"));
    }
}
