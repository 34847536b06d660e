use std::sync::Arc;

use crate::error::ListingResult;
use crate::ingestion::{load_listings, LoadOptions, LogObserver};
use crate::types::ListingRecord;

use super::config::AppConfig;

/// Process-wide state, built once at startup and passed to whatever needs the dataset.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    listings: Vec<ListingRecord>,
}

impl AppContext {
    pub fn new(config: AppConfig, listings: Vec<ListingRecord>) -> Self {
        Self { config, listings }
    }

    /// Load `config.data_path`, reporting the outcome through [`LogObserver`].
    pub fn load(config: AppConfig) -> ListingResult<Self> {
        let opts = LoadOptions {
            observer: Some(Arc::new(LogObserver)),
            ..Default::default()
        };
        let listings = load_listings(&config.data_path, &opts)?;
        Ok(Self::new(config, listings))
    }

    /// The loaded dataset. Read-only for the lifetime of the process.
    pub fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }
}
