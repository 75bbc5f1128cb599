// GitHub module.
// Locates model reference files in the live GitHub repository that powers the horde.

pub mod repo;

pub use repo::{
    GITHUB_RAW_BASE, GITHUB_REPO_BRANCH, GITHUB_REPO_NAME, GITHUB_REPO_OWNER, GITHUB_REPO_URL,
    RemoteRepo,
};
