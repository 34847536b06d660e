//! Application configuration.

use std::path::PathBuf;

use crate::error::ListingResult;
use crate::query::params::parse_count;

/// Environment variable naming the dataset file.
pub const ENV_DATA_PATH: &str = "RENTAL_DATA_PATH";
/// Environment variable overriding the page size.
pub const ENV_PAGE_SIZE: &str = "RENTAL_PAGE_SIZE";
/// Environment variable overriding how many cities the top-cities report shows.
pub const ENV_TOP_CITIES: &str = "RENTAL_TOP_CITIES";

/// Settings for the console explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dataset to load at startup (`.json` or `.csv`).
    pub data_path: PathBuf,
    /// Rows per page of a paginated table.
    pub page_size: usize,
    /// Number of cities in the top-cities report.
    pub top_cities: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("House_Rent_Dataset.json"),
            page_size: 500,
            top_cities: 3,
        }
    }
}

impl AppConfig {
    /// Build a configuration from defaults, then a variable lookup, then positional arguments.
    ///
    /// `lookup` is normally `|k| std::env::var(k).ok()`. The first positional argument, if any,
    /// is the dataset path and wins over [`ENV_DATA_PATH`].
    pub fn resolve<F, I>(lookup: F, args: I) -> ListingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA_PATH).filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_count(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TOP_CITIES) {
            config.top_cities = parse_count(ENV_TOP_CITIES, &raw)?;
        }
        if let Some(path) = args.into_iter().next() {
            config.data_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// [`Self::resolve`] against the process environment and command line.
    pub fn from_env() -> ListingResult<Self> {
        Self::resolve(|k| std::env::var(k).ok(), std::env::args().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = AppConfig::resolve(|_| None, Vec::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 500);
        assert_eq!(config.top_cities, 3);
    }

    #[test]
    fn environment_then_arguments_override() {
        let env = vars(&[
            (ENV_DATA_PATH, "from_env.json"),
            (ENV_PAGE_SIZE, "25"),
            (ENV_TOP_CITIES, "5"),
        ]);
        let config = AppConfig::resolve(|k| env.get(k).cloned(), Vec::new()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("from_env.json"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.top_cities, 5);

        let config =
            AppConfig::resolve(|k| env.get(k).cloned(), vec!["cli.csv".to_string()]).unwrap();
        assert_eq!(config.data_path, PathBuf::from("cli.csv"));
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        let env = vars(&[(ENV_PAGE_SIZE, "0")]);
        let err = AppConfig::resolve(|k| env.get(k).cloned(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains(ENV_PAGE_SIZE));

        let env = vars(&[(ENV_TOP_CITIES, "many")]);
        assert!(AppConfig::resolve(|k| env.get(k).cloned(), Vec::new()).is_err());
    }
}
