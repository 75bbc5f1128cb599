// Resolved path configuration.
// Holds the cache layout and the per-category filename and remote URL lookups.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::info;
use url::Url;

use crate::cache::paths::{self, ResolveOptions};
use crate::category::{ModelReferenceCategory, ReferenceCategory};
use crate::error::{ReferenceError, Result};
use crate::github::RemoteRepo;

/// Immutable cache layout and lookups for model reference files.
///
/// Construct it once with [`PathConfig::init`] and hand it to consumers. Both
/// lookups hold exactly one entry per member of `C` and never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig<C: ReferenceCategory = ModelReferenceCategory> {
    base_path: PathBuf,
    log_folder: PathBuf,
    legacy_folder: PathBuf,
    showcase_folder: PathBuf,
    remote: RemoteRepo,
    repo_url: Url,
    filenames: HashMap<C, String>,
    github_urls: HashMap<C, Url>,
}

impl<C: ReferenceCategory> PathConfig<C> {
    /// Resolve the layout and build the lookups without touching the filesystem.
    pub fn resolve(options: &ResolveOptions) -> Result<Self> {
        let base_path = paths::resolve_base_path(options)?;

        let mut filenames = HashMap::with_capacity(C::members().len());
        let mut github_urls = HashMap::with_capacity(C::members().len());
        for category in C::members() {
            let filename = format!("{}.json", category.name());
            github_urls.insert(*category, options.remote.file_url(&filename)?);
            filenames.insert(*category, filename);
        }

        Ok(Self {
            log_folder: paths::log_folder(&base_path),
            legacy_folder: paths::legacy_folder(&base_path),
            showcase_folder: paths::showcase_folder(&base_path),
            base_path,
            remote: options.remote.clone(),
            repo_url: options.remote.base_url()?,
            filenames,
            github_urls,
        })
    }

    /// Resolve the layout and create the cache root and its subfolders.
    pub fn init(options: &ResolveOptions) -> Result<Self> {
        let config = Self::resolve(options)?;
        config.ensure_directories()?;
        info!(base_path = %config.base_path.display(), "model reference cache ready");
        Ok(config)
    }

    /// Initialize from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::init(&ResolveOptions::from_env())
    }

    /// Create the cache root and its subfolders if missing. Safe to call repeatedly.
    pub fn ensure_directories(&self) -> Result<()> {
        paths::ensure_structure(&self.base_path)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn log_folder(&self) -> &Path {
        &self.log_folder
    }

    pub fn legacy_folder(&self) -> &Path {
        &self.legacy_folder
    }

    pub fn showcase_folder(&self) -> &Path {
        &self.showcase_folder
    }

    pub fn remote(&self) -> &RemoteRepo {
        &self.remote
    }

    /// Base URL of the remote branch; every file URL starts with it.
    pub fn repo_url(&self) -> &Url {
        &self.repo_url
    }

    /// Filename (not path) of the reference file for a category.
    pub fn get_filename(&self, category: C) -> Result<&str> {
        self.filenames
            .get(&category)
            .map(String::as_str)
            .ok_or_else(|| unknown(category))
    }

    /// Path to the reference file for a category, under `base_path` or the cache root.
    ///
    /// Does not check that the file exists.
    pub fn get_file_path(&self, category: C, base_path: Option<&Path>) -> Result<PathBuf> {
        let filename = self.get_filename(category)?;
        Ok(base_path.unwrap_or(self.base_path.as_path()).join(filename))
    }

    /// Path to the legacy-format reference file for a category.
    pub fn legacy_file_path(&self, category: C) -> Result<PathBuf> {
        self.get_file_path(category, Some(self.legacy_folder.as_path()))
    }

    /// Fully qualified remote URL of the reference file for a category.
    pub fn github_url(&self, category: C) -> Result<&Url> {
        self.github_urls
            .get(&category)
            .ok_or_else(|| unknown(category))
    }

    /// Filenames in category order.
    pub fn filenames(&self) -> impl Iterator<Item = (C, &str)> {
        C::members()
            .iter()
            .filter_map(|c| self.filenames.get(c).map(|f| (*c, f.as_str())))
    }

    /// Remote URLs in category order.
    pub fn github_urls(&self) -> impl Iterator<Item = (C, &Url)> {
        C::members()
            .iter()
            .filter_map(|c| self.github_urls.get(c).map(|u| (*c, u)))
    }

    /// Serializable snapshot of the whole layout.
    pub fn report(&self) -> LayoutReport {
        let categories = self
            .filenames()
            .filter_map(|(category, filename)| {
                let url = self.github_urls.get(&category)?;
                Some(CategoryEntry {
                    category: category.name().to_string(),
                    filename: filename.to_string(),
                    path: self.base_path.join(filename),
                    url: url.clone(),
                })
            })
            .collect();

        LayoutReport {
            base_path: self.base_path.clone(),
            log_folder: self.log_folder.clone(),
            legacy_folder: self.legacy_folder.clone(),
            showcase_folder: self.showcase_folder.clone(),
            repo_url: self.repo_url.clone(),
            categories,
        }
    }
}

impl PathConfig<ModelReferenceCategory> {
    /// Process-wide config, initialized from the environment on first success.
    pub fn shared() -> Result<&'static Self> {
        static SHARED: OnceLock<PathConfig> = OnceLock::new();

        if let Some(config) = SHARED.get() {
            return Ok(config);
        }
        let config = Self::from_env()?;
        Ok(SHARED.get_or_init(|| config))
    }
}

fn unknown<C: ReferenceCategory>(category: C) -> ReferenceError {
    ReferenceError::UnknownCategory(category.name().to_string())
}

/// Snapshot of a resolved layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub base_path: PathBuf,
    pub log_folder: PathBuf,
    pub legacy_folder: PathBuf,
    pub showcase_folder: PathBuf,
    pub repo_url: Url,
    pub categories: Vec<CategoryEntry>,
}

/// One category's file locations.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub category: String,
    pub filename: String,
    pub path: PathBuf,
    pub url: Url,
}
