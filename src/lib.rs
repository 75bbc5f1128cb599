// Paths and URLs for AI Horde model reference files.
// Resolves the local cache root and maps each reference category to its file and remote URL.

pub mod cache;
pub mod category;
pub mod config;
pub mod error;
pub mod github;

pub use cache::ResolveOptions;
pub use category::{ModelReferenceCategory, ReferenceCategory};
pub use config::{CategoryEntry, LayoutReport, PathConfig};
pub use error::{ReferenceError, Result};
pub use github::RemoteRepo;
