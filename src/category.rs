// Model reference categories.
// Defines the category abstraction consumed by the path config and the built-in AI Horde set.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;

/// A closed set of model reference categories.
///
/// Each member maps to one `<name>.json` reference file. Implementors must
/// list every member exactly once in [`ReferenceCategory::members`].
pub trait ReferenceCategory: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every member of the set, in a stable order.
    fn members() -> &'static [Self];

    /// The name used for the reference file and remote URL.
    fn name(&self) -> &'static str;
}

/// Model reference categories published by the AI Horde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelReferenceCategory {
    Blip,
    Clip,
    Codeformer,
    Controlnet,
    Esrgan,
    Gfpgan,
    SafetyChecker,
    StableDiffusion,
    Miscellaneous,
}

impl ModelReferenceCategory {
    pub const ALL: [ModelReferenceCategory; 9] = [
        ModelReferenceCategory::Blip,
        ModelReferenceCategory::Clip,
        ModelReferenceCategory::Codeformer,
        ModelReferenceCategory::Controlnet,
        ModelReferenceCategory::Esrgan,
        ModelReferenceCategory::Gfpgan,
        ModelReferenceCategory::SafetyChecker,
        ModelReferenceCategory::StableDiffusion,
        ModelReferenceCategory::Miscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelReferenceCategory::Blip => "blip",
            ModelReferenceCategory::Clip => "clip",
            ModelReferenceCategory::Codeformer => "codeformer",
            ModelReferenceCategory::Controlnet => "controlnet",
            ModelReferenceCategory::Esrgan => "esrgan",
            ModelReferenceCategory::Gfpgan => "gfpgan",
            ModelReferenceCategory::SafetyChecker => "safety_checker",
            ModelReferenceCategory::StableDiffusion => "stable_diffusion",
            ModelReferenceCategory::Miscellaneous => "miscellaneous",
        }
    }
}

impl ReferenceCategory for ModelReferenceCategory {
    fn members() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ModelReferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelReferenceCategory {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ReferenceError::UnknownCategory(s.to_string()))
    }
}
