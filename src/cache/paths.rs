// Cache path utilities.
// Resolves the cache root for model reference files and creates its fixed subfolders.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{ReferenceError, Result};
use crate::github::RemoteRepo;

/// The name of this package. Also the name of the cache root folder.
pub const PACKAGE_NAME: &str = "horde_model_reference";

/// Environment variable relocating all AI-Horde-Worker cache (model) files.
pub const CACHE_HOME_ENV: &str = "AIWORKER_CACHE_HOME";

pub const LOG_FOLDER_NAME: &str = "logs";

/// The default name of the legacy model reference folder.
pub const LEGACY_REFERENCE_FOLDER_NAME: &str = "legacy";

/// The default name of the stable diffusion showcase folder.
pub const DEFAULT_SHOWCASE_FOLDER_NAME: &str = "showcase";

/// Inputs to cache root resolution.
///
/// Built from the process environment with [`ResolveOptions::from_env`], or
/// from an injected lookup so tests never touch the real environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Value of `AIWORKER_CACHE_HOME`. The cache root is `<cache_home>/horde_model_reference`.
    pub cache_home: Option<PathBuf>,
    /// Used as the cache root when `cache_home` is unset. Falls back to the platform cache dir.
    pub default_root: Option<PathBuf>,
    /// Repository serving the remote reference files.
    pub remote: RemoteRepo,
}

impl ResolveOptions {
    /// Read options from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Read options through the given environment lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let cache_home = lookup(CACHE_HOME_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            cache_home,
            ..Self::default()
        }
    }

    pub fn with_cache_home(mut self, cache_home: impl Into<PathBuf>) -> Self {
        let cache_home = cache_home.into();
        self.cache_home = (!cache_home.as_os_str().is_empty()).then_some(cache_home);
        self
    }

    pub fn with_default_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.default_root = Some(root.into());
        self
    }

    pub fn with_remote(mut self, remote: RemoteRepo) -> Self {
        self.remote = remote;
        self
    }
}

/// Platform cache directory for this package (~/.cache/horde_model_reference on Linux).
pub fn default_cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", PACKAGE_NAME).map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Resolve the cache root without touching the filesystem.
pub fn resolve_base_path(options: &ResolveOptions) -> Result<PathBuf> {
    if let Some(cache_home) = &options.cache_home {
        debug!(cache_home = %cache_home.display(), "using {} for cache root", CACHE_HOME_ENV);
        return Ok(cache_home.join(PACKAGE_NAME));
    }

    if let Some(root) = &options.default_root {
        return Ok(root.clone());
    }

    default_cache_dir().ok_or(ReferenceError::CacheDirUnavailable)
}

/// Path to the log folder under a cache root.
pub fn log_folder(root: &Path) -> PathBuf {
    root.join(LOG_FOLDER_NAME)
}

/// Path to the legacy model reference folder under a cache root.
pub fn legacy_folder(root: &Path) -> PathBuf {
    root.join(LEGACY_REFERENCE_FOLDER_NAME)
}

/// Path to the stable diffusion showcase folder under a cache root.
pub fn showcase_folder(root: &Path) -> PathBuf {
    root.join(DEFAULT_SHOWCASE_FOLDER_NAME)
}

/// Create a directory and its parents if missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ReferenceError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "ensured directory");
    Ok(())
}

/// Create the cache root and its fixed subfolders.
pub fn ensure_structure(root: &Path) -> Result<()> {
    ensure_dir(root)?;
    ensure_dir(&log_folder(root))?;
    ensure_dir(&legacy_folder(root))?;
    ensure_dir(&showcase_folder(root))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_cache_home_from_lookup() {
        let options = ResolveOptions::from_lookup(lookup_from(&[(CACHE_HOME_ENV, "/tmp/x")]));
        assert_eq!(options.cache_home, Some(PathBuf::from("/tmp/x")));

        let base = resolve_base_path(&options).unwrap();
        assert_eq!(base, PathBuf::from("/tmp/x/horde_model_reference"));
    }

    #[test]
    fn test_empty_cache_home_is_unset() {
        let options = ResolveOptions::from_lookup(lookup_from(&[(CACHE_HOME_ENV, "")]));
        assert!(options.cache_home.is_none());

        let options = ResolveOptions::default().with_cache_home("");
        assert!(options.cache_home.is_none());
    }

    #[test]
    fn test_default_root_used_without_cache_home() {
        let options = ResolveOptions::default().with_default_root("/opt/models");
        assert_eq!(
            resolve_base_path(&options).unwrap(),
            PathBuf::from("/opt/models")
        );
    }

    #[test]
    fn test_cache_home_wins_over_default_root() {
        let options = ResolveOptions::default()
            .with_default_root("/opt/models")
            .with_cache_home("/srv/cache");
        assert_eq!(
            resolve_base_path(&options).unwrap(),
            PathBuf::from("/srv/cache/horde_model_reference")
        );
    }

    #[test]
    fn test_subfolder_paths() {
        let root = Path::new("/cache/root");
        assert!(log_folder(root).ends_with("root/logs"));
        assert!(legacy_folder(root).ends_with("root/legacy"));
        assert!(showcase_folder(root).ends_with("root/showcase"));
    }

    #[test]
    fn test_ensure_structure_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested").join(PACKAGE_NAME);

        ensure_structure(&root).unwrap();
        ensure_structure(&root).unwrap();

        assert!(root.is_dir());
        assert!(log_folder(&root).is_dir());
        assert!(legacy_folder(&root).is_dir());
        assert!(showcase_folder(&root).is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_under_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_structure(&blocker.join("root")).unwrap_err();
        assert!(matches!(err, ReferenceError::CreateDir { path, .. } if path.starts_with(&blocker)));
    }
}
