//! Field projection of records into a [`DataSet`] of derived views.

use crate::types::{DataSet, ListingField, ListingRecord, Schema, Value};

/// Project each record onto `fields`, in the given column order.
///
/// Use [`ListingField::RentedOn`] to show the posting date under the `Rented_On` label.
pub fn project(records: &[ListingRecord], fields: &[ListingField]) -> DataSet {
    map_records(records, Schema::new(fields.to_vec()), |r| {
        fields.iter().map(|f| f.value_of(r)).collect()
    })
}

/// Build a [`DataSet`] by applying `mapper` to every record.
///
/// # Panics
///
/// Panics if `mapper` returns a row with a different length than the schema field count.
pub fn map_records<F>(records: &[ListingRecord], schema: Schema, mut mapper: F) -> DataSet
where
    F: FnMut(&ListingRecord) -> Vec<Value>,
{
    let expected_len = schema.fields.len();
    let rows = records
        .iter()
        .map(|record| {
            let out = mapper(record);
            assert!(
                out.len() == expected_len,
                "mapped row length {} does not match schema length {}",
                out.len(),
                expected_len
            );
            out
        })
        .collect();
    DataSet::new(schema, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> ListingRecord {
        ListingRecord {
            posted_on: "2022-05-18".to_string(),
            bhk: "2".to_string(),
            rent: "10000".to_string(),
            size: "1100".to_string(),
            city: "Kolkata".to_string(),
            area_locality: "Bandel".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn project_keeps_only_named_fields_in_order() {
        let ds = project(&[listing()], &[ListingField::City, ListingField::Bhk]);
        assert_eq!(ds.schema.column_names().collect::<Vec<_>>(), vec!["City", "BHK"]);
        assert_eq!(
            ds.rows,
            vec![vec![Value::Utf8("Kolkata".to_string()), Value::Int64(2)]]
        );
    }

    #[test]
    fn rented_on_is_an_explicit_rename_of_posted_on() {
        let ds = project(&[listing()], &[ListingField::RentedOn]);
        assert_eq!(ds.schema.column_names().next(), Some("Rented_On"));
        assert_eq!(ds.rows[0][0], Value::Utf8("2022-05-18".to_string()));
    }

    #[test]
    fn project_empty_input_keeps_schema() {
        let ds = project(&[], &[ListingField::Rent]);
        assert!(ds.is_empty());
        assert_eq!(ds.schema.fields, vec![ListingField::Rent]);
    }

    #[test]
    #[should_panic(expected = "mapped row length")]
    fn map_records_panics_if_mapper_returns_wrong_arity() {
        let schema = Schema::new(vec![ListingField::Rent, ListingField::City]);
        let _ = map_records(&[listing()], schema, |_r| vec![Value::Null]);
    }
}
