// hygiene violation data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// one hygiene finding, accumulated across the whole scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HygieneViolation {
    /// a source file grew past the line cap
    FileTooLarge {
        path: PathBuf,
        lines: usize,
        max: usize,
    },
    /// a work marker without an owner or issue reference
    BareTodo {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

impl HygieneViolation {
    pub fn path(&self) -> &PathBuf {
        match self {
            HygieneViolation::FileTooLarge { path, .. } => path,
            HygieneViolation::BareTodo { path, .. } => path,
        }
    }
}

impl fmt::Display for HygieneViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HygieneViolation::FileTooLarge { path, lines, max } => {
                write!(f, "{}: {} lines (Max: {})", path.display(), lines, max)
            }
            HygieneViolation::BareTodo { path, line, text } => {
                write!(f, "{}:{}: '{}'", path.display(), line, text)
            }
        }
    }
}
