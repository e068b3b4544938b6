// hygiene linter configuration

use serde::{Deserialize, Serialize};

fn default_max_file_lines() -> usize {
    500
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string(), "hs".to_string(), "elm".to_string()]
}

fn default_scan_dirs() -> Vec<String> {
    vec!["src".to_string(), "scripts".to_string()]
}

/// thresholds and scan targets for the hygiene linter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygieneConfig {
    /// maximum lines a source file may carry
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,

    /// file extensions scanned
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// directories scanned, relative to the project root
    #[serde(default = "default_scan_dirs")]
    pub scan_dirs: Vec<String>,
}

impl Default for HygieneConfig {
    fn default() -> Self {
        Self {
            max_file_lines: default_max_file_lines(),
            extensions: default_extensions(),
            scan_dirs: default_scan_dirs(),
        }
    }
}

impl HygieneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_file_lines(mut self, max: usize) -> Self {
        self.max_file_lines = max;
        self
    }

    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn scan_dirs(mut self, dirs: Vec<String>) -> Self {
        self.scan_dirs = dirs;
        self
    }
}
