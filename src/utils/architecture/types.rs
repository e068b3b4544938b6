// architecture violation data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// forbidden-import constraint with the boundary it protects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerRule {
    /// substring that must not appear on an import line
    pub pattern: &'static str,
    /// rule text shown when the pattern fires
    pub rule: &'static str,
}

/// one forbidden import found in a domain source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchViolation {
    /// path relative to the scanned root
    pub path: PathBuf,
    /// 1-based line number of the import
    pub line: usize,
    /// the offending import line, trimmed
    pub import: String,
    pub rule: String,
}

impl ArchViolation {
    pub fn new(path: PathBuf, line: usize, import: String, rule: String) -> Self {
        Self {
            path,
            line,
            import,
            rule,
        }
    }
}

impl fmt::Display for ArchViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} ({})",
            self.path.display(),
            self.line,
            self.import,
            self.rule
        )
    }
}
