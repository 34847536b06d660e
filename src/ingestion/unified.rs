//! Unified loading entrypoint.
//!
//! Most callers should use [`load_listings`], which reads a dataset file into memory once.
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the file extension.
//! - If a [`LoadObserver`] is provided, success/failure/alerts are reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ListingError, ListingResult};
use crate::types::ListingRecord;

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::{csv, json};

/// Supported dataset formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormat {
    /// The raw comma-separated dataset.
    Csv,
    /// JSON array-of-objects or NDJSON (the converted dataset).
    Json,
}

impl ListingFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling [`load_listings`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<ListingFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a listing dataset from `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the record count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rental_listings::ingestion::{load_listings, LoadOptions, LogObserver};
///
/// # fn main() -> Result<(), rental_listings::ListingError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let listings = load_listings("House_Rent_Dataset.json", &opts)?;
/// println!("listings={}", listings.len());
/// # Ok(())
/// # }
/// ```
pub fn load_listings(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> ListingResult<Vec<ListingRecord>> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };
    let ctx = LoadContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        ListingFormat::Csv => csv::load_csv_from_path(path),
        ListingFormat::Json => json::load_json_from_path(path),
    };

    match &result {
        Ok(records) => {
            log::debug!("loaded {} listings from {}", records.len(), path.display());
            if let Some(obs) = &options.observer {
                obs.on_success(&ctx, LoadStats { records: records.len() });
            }
        }
        Err(e) => {
            if let Some(obs) = &options.observer {
                let severity = LoadSeverity::of(e);
                obs.on_failure(&ctx, severity, e);
                if severity >= options.alert_at_or_above {
                    obs.on_alert(&ctx, severity, e);
                }
            }
        }
    }

    result
}

fn infer_format_from_path(path: &Path) -> ListingResult<ListingFormat> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    ListingFormat::from_extension(ext).ok_or_else(|| ListingError::SchemaMismatch {
        message: format!(
            "unable to infer dataset format from extension '{ext}' (path={})",
            path.display()
        ),
    })
}
