//! Core data model: the listing record, its normalization rules, and the projected table type.
//!
//! A [`ListingRecord`] keeps every field as the raw text it was loaded with. Numeric fields are
//! parsed on demand through accessors ([`ListingRecord::bhk`], [`ListingRecord::rent`],
//! [`ListingRecord::size`]) that return `None` for malformed values, so one bad cell never stops a
//! record from being listed or counted.
//!
//! Projections of records (see [`crate::processing::project`]) are returned as a [`DataSet`]: a
//! [`Schema`] of [`ListingField`] columns plus rows of typed [`Value`]s. Each row is one derived
//! view of a record.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ListingError;

/// Normalize a city name for comparison: trim surrounding whitespace, then lowercase.
pub fn normalize_city(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A normalized city name, used as the grouping key of city-level reports.
///
/// Equality and hashing use the normalized (trimmed, lowercased) form. [`fmt::Display`] renders
/// it with the first letter capitalized (`"mumbai "` displays as `Mumbai`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityName(String);

impl CityName {
    /// Build a city name from raw record text.
    pub fn from_raw(raw: &str) -> Self {
        Self(normalize_city(raw))
    }

    /// The normalized form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => {
                for c in first.to_uppercase() {
                    write!(f, "{c}")?;
                }
                f.write_str(chars.as_str())
            }
            None => Ok(()),
        }
    }
}

/// Furnishing status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FurnishingStatus {
    Furnished,
    SemiFurnished,
    Unfurnished,
}

impl FurnishingStatus {
    /// Canonical label as it appears in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            Self::Furnished => "Furnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::Unfurnished => "Unfurnished",
        }
    }
}

impl fmt::Display for FurnishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FurnishingStatus {
    type Err = ListingError;

    /// Case-insensitive; spaces and underscores are accepted in place of the hyphen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        match key.as_str() {
            "furnished" => Ok(Self::Furnished),
            "semi-furnished" | "semifurnished" => Ok(Self::SemiFurnished),
            "unfurnished" => Ok(Self::Unfurnished),
            _ => Err(ListingError::invalid_parameter(
                "furnishing_status",
                s,
                "expected Furnished, Semi-Furnished or Unfurnished",
            )),
        }
    }
}

/// One rental listing, as loaded from the converted dataset.
///
/// Field names follow the JSON produced by the CSV conversion step (`Posted_On`, `Area_Type`, ...);
/// the spaced header spelling of the raw CSV (`Posted On`, `Area Type`, ...) is accepted as an
/// alias. Numeric columns accept either JSON strings or JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingRecord {
    #[serde(rename = "Posted_On", alias = "Posted On")]
    pub posted_on: String,
    #[serde(rename = "BHK", deserialize_with = "text_or_number")]
    pub bhk: String,
    #[serde(rename = "Rent", deserialize_with = "text_or_number")]
    pub rent: String,
    #[serde(rename = "Size", deserialize_with = "text_or_number")]
    pub size: String,
    #[serde(rename = "Floor", deserialize_with = "text_or_number")]
    pub floor: String,
    #[serde(rename = "Area_Type", alias = "Area Type")]
    pub area_type: String,
    #[serde(rename = "Area_Locality", alias = "Area Locality")]
    pub area_locality: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Furnishing_Status", alias = "Furnishing Status")]
    pub furnishing_status: String,
    #[serde(rename = "Tenant_Preferred", alias = "Tenant Preferred")]
    pub tenant_preferred: String,
    #[serde(rename = "Bathroom", deserialize_with = "text_or_number")]
    pub bathroom: String,
    #[serde(rename = "Point_of_Contact", alias = "Point of Contact")]
    pub point_of_contact: String,
}

impl ListingRecord {
    /// Bedroom count. `None` when the raw text is not an integer.
    pub fn bhk(&self) -> Option<i64> {
        self.bhk.trim().parse().ok()
    }

    /// Monthly rent. `None` when the raw text is not a finite, non-negative number.
    pub fn rent(&self) -> Option<f64> {
        parse_number(&self.rent).filter(|v| *v >= 0.0)
    }

    /// Floor area. `None` when missing, non-numeric, or zero.
    pub fn size(&self) -> Option<f64> {
        parse_number(&self.size).filter(|v| *v > 0.0)
    }

    /// Bathroom count. `None` when the raw text is not an integer.
    pub fn bathroom(&self) -> Option<i64> {
        self.bathroom.trim().parse().ok()
    }

    /// Normalized city.
    pub fn city_name(&self) -> CityName {
        CityName::from_raw(&self.city)
    }

    /// Parsed furnishing status, if the raw text is one of the known statuses.
    pub fn furnishing(&self) -> Option<FurnishingStatus> {
        self.furnishing_status.parse().ok()
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts a JSON/CSV string, number, bool or null and keeps it as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextOrNumber;

    impl<'de> Visitor<'de> for TextOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TextOrNumber)
}

/// A column that can appear in a projected view of a [`ListingRecord`].
///
/// [`ListingField::RentedOn`] is the explicit rename of `Posted_On` used by the sorted and
/// grouped views: it reads the posting date but is labelled `Rented_On`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingField {
    PostedOn,
    RentedOn,
    Bhk,
    Rent,
    Size,
    Floor,
    AreaType,
    AreaLocality,
    City,
    FurnishingStatus,
    TenantPreferred,
    Bathroom,
    PointOfContact,
}

impl ListingField {
    /// Every column of a full record, in dataset order.
    pub const ALL: [ListingField; 12] = [
        Self::PostedOn,
        Self::Bhk,
        Self::Rent,
        Self::Size,
        Self::Floor,
        Self::AreaType,
        Self::AreaLocality,
        Self::City,
        Self::FurnishingStatus,
        Self::TenantPreferred,
        Self::Bathroom,
        Self::PointOfContact,
    ];

    /// Column label used for display and serialization.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::PostedOn => "Posted_On",
            Self::RentedOn => "Rented_On",
            Self::Bhk => "BHK",
            Self::Rent => "Rent",
            Self::Size => "Size",
            Self::Floor => "Floor",
            Self::AreaType => "Area_Type",
            Self::AreaLocality => "Area_Locality",
            Self::City => "City",
            Self::FurnishingStatus => "Furnishing_Status",
            Self::TenantPreferred => "Tenant_Preferred",
            Self::Bathroom => "Bathroom",
            Self::PointOfContact => "Point_of_Contact",
        }
    }

    /// Extract this column from a record as a typed [`Value`].
    ///
    /// Numeric columns become `Int64`/`Float64` when they parse, `Null` when empty, and keep the
    /// raw text as `Utf8` otherwise so the malformed value stays visible.
    pub fn value_of(self, record: &ListingRecord) -> Value {
        match self {
            Self::PostedOn | Self::RentedOn => Value::text(&record.posted_on),
            Self::Bhk => Value::integer_or_raw(&record.bhk, record.bhk()),
            Self::Rent => Value::float_or_raw(&record.rent, record.rent()),
            Self::Size => Value::float_or_raw(&record.size, record.size()),
            Self::Floor => Value::text(&record.floor),
            Self::AreaType => Value::text(&record.area_type),
            Self::AreaLocality => Value::text(&record.area_locality),
            Self::City => Value::text(&record.city),
            Self::FurnishingStatus => Value::text(&record.furnishing_status),
            Self::TenantPreferred => Value::text(&record.tenant_preferred),
            Self::Bathroom => Value::integer_or_raw(&record.bathroom, record.bathroom()),
            Self::PointOfContact => Value::text(&record.point_of_contact),
        }
    }
}

impl fmt::Display for ListingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for ListingField {
    type Err = ListingError;

    /// Accepts the column label in any case, with or without underscores/spaces
    /// (`Posted_On`, `posted on`, `postedOn`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        let field = match key.as_str() {
            "postedon" => Self::PostedOn,
            "rentedon" => Self::RentedOn,
            "bhk" => Self::Bhk,
            "rent" => Self::Rent,
            "size" => Self::Size,
            "floor" => Self::Floor,
            "areatype" => Self::AreaType,
            "arealocality" => Self::AreaLocality,
            "city" => Self::City,
            "furnishingstatus" | "furnishing" => Self::FurnishingStatus,
            "tenantpreferred" => Self::TenantPreferred,
            "bathroom" => Self::Bathroom,
            "pointofcontact" => Self::PointOfContact,
            _ => {
                return Err(ListingError::invalid_parameter(
                    "field",
                    s,
                    "unknown listing field",
                ));
            }
        };
        Ok(field)
    }
}

/// A single typed cell of a projected view.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    fn text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Null
        } else {
            Self::Utf8(trimmed.to_owned())
        }
    }

    fn integer_or_raw(raw: &str, parsed: Option<i64>) -> Self {
        match parsed {
            Some(v) => Self::Int64(v),
            None => Self::text(raw),
        }
    }

    fn float_or_raw(raw: &str, parsed: Option<f64>) -> Self {
        match parsed {
            Some(v) => Self::Float64(v),
            None => Self::text(raw),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
        }
    }
}

/// Ordered list of columns describing the shape of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of columns.
    pub fields: Vec<ListingField>,
}

impl Schema {
    /// Create a new schema from columns.
    pub fn new(fields: Vec<ListingField>) -> Self {
        Self { fields }
    }

    /// Iterate column labels in order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.column_name())
    }

    /// Returns the index of a column, if present.
    pub fn index_of(&self, field: ListingField) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

/// In-memory table of derived views.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` for `field`, if both exist.
    pub fn value(&self, row: usize, field: ListingField) -> Option<&Value> {
        let idx = self.schema.index_of(field)?;
        self.rows.get(row)?.get(idx)
    }
}
