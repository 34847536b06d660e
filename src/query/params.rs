//! Parsing of user-entered parameters.
//!
//! Every function trims its input and returns [`ListingError::InvalidParameter`] instead of
//! silently defaulting. Blank input means "no constraint" only where a parameter is optional
//! (see [`optional`]).

use crate::error::{ListingError, ListingResult};
use crate::types::FurnishingStatus;

use super::search::ListingQuery;

/// A BHK count: a non-negative integer.
pub fn parse_bhk(raw: &str) -> ListingResult<i64> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v),
        Ok(_) => Err(ListingError::invalid_parameter("bhk", raw, "must not be negative")),
        Err(e) => Err(ListingError::invalid_parameter("bhk", raw, e.to_string())),
    }
}

/// A rent amount: a finite, non-negative number. `name` labels the parameter in errors.
pub fn parse_amount(name: &str, raw: &str) -> ListingResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err(ListingError::invalid_parameter(
            name,
            raw,
            "expected a finite, non-negative amount",
        )),
        Err(e) => Err(ListingError::invalid_parameter(name, raw, e.to_string())),
    }
}

/// A percentage: any finite number.
pub fn parse_percent(raw: &str) -> ListingResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(ListingError::invalid_parameter("percent", raw, "expected a finite number")),
        Err(e) => Err(ListingError::invalid_parameter("percent", raw, e.to_string())),
    }
}

/// A furnishing status (case-insensitive).
pub fn parse_furnishing(raw: &str) -> ListingResult<FurnishingStatus> {
    raw.parse()
}

/// A count (`n` for top-N reports): a positive integer.
pub fn parse_count(name: &str, raw: &str) -> ListingResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ListingError::invalid_parameter(name, raw, "must be greater than zero")),
        Ok(v) => Ok(v),
        Err(e) => Err(ListingError::invalid_parameter(name, raw, e.to_string())),
    }
}

/// Inclusive rent range. A minimum above the maximum is rejected.
pub fn parse_rent_range(min_raw: &str, max_raw: &str) -> ListingResult<(f64, f64)> {
    let min = parse_amount("min_rent", min_raw)?;
    let max = parse_amount("max_rent", max_raw)?;
    if min > max {
        return Err(ListingError::invalid_parameter(
            "min_rent",
            min_raw,
            format!("minimum rent is greater than maximum rent ({max})"),
        ));
    }
    Ok((min, max))
}

/// Blank input becomes `None`; anything else must parse.
pub fn optional<T, F>(raw: &str, parse: F) -> ListingResult<Option<T>>
where
    F: FnOnce(&str) -> ListingResult<T>,
{
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse(raw).map(Some)
    }
}

/// Build an advanced-search query from three prompt answers, each of which may be left blank.
pub fn parse_search_inputs(bhk: &str, city: &str, max_rent: &str) -> ListingResult<ListingQuery> {
    Ok(ListingQuery {
        bhk: optional(bhk, parse_bhk)?,
        city: optional(city, |c| Ok(c.trim().to_owned()))?,
        max_rent: optional(max_rent, |m| parse_amount("max_rent", m))?,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bhk_must_be_a_whole_non_negative_number() {
        assert_eq!(parse_bhk(" 2 ").unwrap(), 2);
        assert!(parse_bhk("2abc").is_err());
        assert!(parse_bhk("2.5").is_err());
        assert!(parse_bhk("-1").is_err());
        let msg = parse_bhk("two").unwrap_err().to_string();
        assert!(msg.contains("invalid parameter 'bhk'"));
        assert!(msg.contains("raw='two'"));
    }

    #[test]
    fn amounts_reject_negative_and_non_numeric() {
        assert_eq!(parse_amount("max_rent", "15000").unwrap(), 15000.0);
        assert!(parse_amount("max_rent", "-1").is_err());
        assert!(parse_amount("max_rent", "inf").is_err());
        assert!(parse_amount("max_rent", "lots").is_err());
    }

    #[test]
    fn rent_range_must_be_ordered() {
        assert_eq!(parse_rent_range("100", "200").unwrap(), (100.0, 200.0));
        assert!(parse_rent_range("300", "200").is_err());
    }

    #[test]
    fn percent_and_count_parse() {
        assert_eq!(parse_percent("-12.5").unwrap(), -12.5);
        assert!(parse_percent("ten").is_err());
        assert_eq!(parse_count("n", "3").unwrap(), 3);
        assert!(parse_count("n", "0").is_err());
    }

    #[test]
    fn blank_search_inputs_are_wildcards() {
        assert_eq!(parse_search_inputs("", "  ", "").unwrap(), ListingQuery::new());

        let q = parse_search_inputs("", "Delhi ", "").unwrap();
        assert_eq!(q, ListingQuery::new().with_city("Delhi"));

        let q = parse_search_inputs("3", "", "25000").unwrap();
        assert_eq!(q.bhk, Some(3));
        assert_eq!(q.max_rent, Some(25000.0));
    }

    #[test]
    fn malformed_search_inputs_are_rejected() {
        assert!(parse_search_inputs("x", "", "").is_err());
        assert!(parse_search_inputs("", "", "cheap").is_err());
    }
}
