//! Percentage rent adjustment.

use crate::error::{ListingError, ListingResult};
use crate::processing::map_records;
use crate::types::{DataSet, ListingField, ListingRecord, Schema, Value};

/// Columns produced by a rent adjustment: the adjusted rent, the city and the posting date.
pub fn adjustment_schema() -> Schema {
    Schema::new(vec![ListingField::Rent, ListingField::City, ListingField::PostedOn])
}

/// Round to the nearest integer, with halves rounded up (`1105.5` → `1106`).
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Build a mapper that scales rent by `(1 + percent / 100)`, rounded half-up to whole currency
/// units.
///
/// Each output row follows [`adjustment_schema`]; every other record field is dropped. A record
/// whose rent is malformed keeps its raw rent text and is reported with a warning.
///
/// `percent` must be finite and at least `-100`.
pub fn incremental_rent_adjustment(
    percent: f64,
) -> ListingResult<impl Fn(&ListingRecord) -> Vec<Value>> {
    if !percent.is_finite() || percent < -100.0 {
        return Err(ListingError::invalid_parameter(
            "percent",
            percent.to_string(),
            "expected a finite percentage of at least -100",
        ));
    }

    Ok(move |record: &ListingRecord| {
        let rent = match record.rent() {
            Some(rent) => Value::Int64(round_half_up(rent * (100.0 + percent) / 100.0) as i64),
            None => {
                log::warn!(
                    "cannot adjust invalid rent '{}' (city='{}')",
                    record.rent,
                    record.city
                );
                ListingField::Rent.value_of(record)
            }
        };
        vec![
            rent,
            ListingField::City.value_of(record),
            ListingField::PostedOn.value_of(record),
        ]
    })
}

/// Apply [`incremental_rent_adjustment`] to every record.
pub fn apply_rent_adjustment(records: &[ListingRecord], percent: f64) -> ListingResult<DataSet> {
    let mapper = incremental_rent_adjustment(percent)?;
    Ok(map_records(records, adjustment_schema(), mapper))
}
