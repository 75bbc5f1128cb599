// Cached reference file status.
// Reports which model reference files are present in the cache root, without reading them.

use std::fs;
use std::io;

use chrono::{DateTime, Utc};

use crate::category::ReferenceCategory;
use crate::config::PathConfig;
use crate::error::Result;

/// Check if the reference file for a category exists in the cache root.
pub fn is_cached<C: ReferenceCategory>(config: &PathConfig<C>, category: C) -> bool {
    config
        .get_file_path(category, None)
        .map(|path| path.is_file())
        .unwrap_or(false)
}

/// Get the modification time of a category's reference file, if present.
pub fn modified_at<C: ReferenceCategory>(
    config: &PathConfig<C>,
    category: C,
) -> Result<Option<DateTime<Utc>>> {
    let path = config.get_file_path(category, None)?;

    match fs::metadata(&path) {
        Ok(metadata) => Ok(Some(DateTime::<Utc>::from(metadata.modified()?))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Categories whose reference file exists in the cache root.
pub fn cached_categories<C: ReferenceCategory>(config: &PathConfig<C>) -> Vec<C> {
    C::members()
        .iter()
        .copied()
        .filter(|category| is_cached(config, *category))
        .collect()
}
