// changelog validation configuration

use serde::{Deserialize, Serialize};

/// feature flags for changelog validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// require exactly one '## [Unreleased]' section
    #[serde(default)]
    pub require_unreleased: bool,

    /// require a release date on every version heading
    #[serde(default)]
    pub require_dates: bool,
}

impl ChangelogConfig {
    /// create a new configuration with defaults (both checks off)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_unreleased(mut self, required: bool) -> Self {
        self.require_unreleased = required;
        self
    }

    pub fn require_dates(mut self, required: bool) -> Self {
        self.require_dates = required;
        self
    }
}
