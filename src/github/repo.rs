// Remote repository location.
// Builds raw.githubusercontent.com URLs for model reference files.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ReferenceError, Result};

pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const GITHUB_REPO_OWNER: &str = "Haidra-Org";
pub const GITHUB_REPO_NAME: &str = "AI-Horde-image-model-reference";
pub const GITHUB_REPO_BRANCH: &str = "main";

/// The base URL to the live GitHub repo used to power the horde.
pub const GITHUB_REPO_URL: &str =
    "https://raw.githubusercontent.com/Haidra-Org/AI-Horde-image-model-reference/main/";

/// A GitHub repository branch serving raw model reference files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepo {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl Default for RemoteRepo {
    fn default() -> Self {
        Self::new(GITHUB_REPO_OWNER, GITHUB_REPO_NAME, GITHUB_REPO_BRANCH)
    }
}

impl RemoteRepo {
    pub fn new(owner: &str, name: &str, branch: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            branch: branch.to_string(),
        }
    }

    /// Base URL of the branch, always ending in `/`.
    pub fn base_url(&self) -> Result<Url> {
        self.url_with_tail("")
    }

    /// Fully qualified URL of a file at the root of the branch.
    pub fn file_url(&self, filename: &str) -> Result<Url> {
        self.url_with_tail(filename)
    }

    /// Each component is pushed as one percent-encoded path segment, so `#`, `?`
    /// and `/` inside a component never leak into the query, fragment or path.
    fn url_with_tail(&self, tail: &str) -> Result<Url> {
        let mut url = Url::parse(GITHUB_RAW_BASE)?;
        url.path_segments_mut()
            .map_err(|_| ReferenceError::NotABaseUrl(GITHUB_RAW_BASE.to_string()))?
            .pop_if_empty()
            .extend([
                self.owner.as_str(),
                self.name.as_str(),
                self.branch.as_str(),
                tail,
            ]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_repo_url() {
        let repo = RemoteRepo::default();
        assert_eq!(repo.base_url().unwrap().as_str(), GITHUB_REPO_URL);
    }

    #[test]
    fn test_file_url() {
        let url = RemoteRepo::default().file_url("clip.json").unwrap();
        assert_eq!(url.as_str(), format!("{}clip.json", GITHUB_REPO_URL));
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("raw.githubusercontent.com"));
        assert!(url.path().ends_with("/main/clip.json"));
    }

    #[test]
    fn test_custom_branch() {
        let repo = RemoteRepo::new("someone", "fork", "dev");
        let url = repo.file_url("esrgan.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://raw.githubusercontent.com/someone/fork/dev/esrgan.json"
        );
    }

    #[test]
    fn test_special_characters_stay_in_path() {
        let repo = RemoteRepo::new("a#b", "re?po", "feature/x");
        let url = repo.file_url("clip.json").unwrap();

        assert_eq!(url.fragment(), None);
        assert_eq!(url.query(), None);
        assert_eq!(url.path(), "/a%23b/re%3Fpo/feature%2Fx/clip.json");

        let base = repo.base_url().unwrap();
        assert_eq!(base.path(), "/a%23b/re%3Fpo/feature%2Fx/");
        assert!(url.as_str().starts_with(base.as_str()));
    }

    #[test]
    fn test_non_ascii_base_and_file_agree() {
        let repo = RemoteRepo::new("zoë", "modèles", "main");
        let base = repo.base_url().unwrap();
        let url = repo.file_url("blip.json").unwrap();

        assert!(base.as_str().is_ascii());
        assert_eq!(url.as_str(), format!("{}blip.json", base));
    }
}
