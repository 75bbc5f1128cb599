// Cache module for model reference files.
// Resolves the local cache layout and reports on files stored in it.

pub mod paths;
pub mod store;

pub use paths::{
    CACHE_HOME_ENV, DEFAULT_SHOWCASE_FOLDER_NAME, LEGACY_REFERENCE_FOLDER_NAME, LOG_FOLDER_NAME,
    PACKAGE_NAME, ResolveOptions, default_cache_dir, ensure_structure, resolve_base_path,
};
pub use store::{cached_categories, is_cached, modified_at};
