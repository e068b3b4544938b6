// release bump data structures

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// kind of semantic version increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => write!(f, "MAJOR"),
            BumpKind::Minor => write!(f, "MINOR"),
            BumpKind::Patch => write!(f, "PATCH"),
        }
    }
}

/// one commit message split into subject and body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub subject: String,
    pub body: String,
}

impl CommitMessage {
    pub fn new(subject: String, body: String) -> Self {
        Self { subject, body }
    }

    /// split a raw commit message on the first newline
    pub fn from_raw(raw: &str) -> Self {
        match raw.split_once('\n') {
            Some((subject, body)) => Self {
                subject: subject.trim_end().to_string(),
                body: body.to_string(),
            },
            None => Self {
                subject: raw.trim_end().to_string(),
                body: String::new(),
            },
        }
    }
}

/// recommendation for the next release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpAdvice {
    /// latest reachable tag, or the fallback when none exists
    pub tag: String,
    pub current_version: Version,
    /// how many commits were classified
    pub commits_scanned: usize,
    /// recommended increment, absent when there is nothing to release
    pub bump: Option<BumpKind>,
    pub next_version: Option<Version>,
    pub reason: String,
}

impl BumpAdvice {
    pub fn has_changes(&self) -> bool {
        self.bump.is_some()
    }
}
