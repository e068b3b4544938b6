// changelog section model and validation outcomes

use chrono::NaiveDate;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// kind of changelog section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// the pending-changes section at the top of the document
    Unreleased,
    /// a released version section
    Version,
}

/// a contiguous block of the document headed by an unreleased or version heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// release triple, absent for the unreleased section
    pub version: Option<Version>,
    /// release date, absent when the heading carries none
    pub date: Option<NaiveDate>,
    /// 1-based line number of the heading
    pub start_line: usize,
    /// raw lines between this heading and the next, heading excluded
    pub body: Vec<String>,
}

impl Section {
    pub fn unreleased(start_line: usize) -> Self {
        Self {
            kind: SectionKind::Unreleased,
            version: None,
            date: None,
            start_line,
            body: Vec::new(),
        }
    }

    pub fn release(version: Version, date: Option<NaiveDate>, start_line: usize) -> Self {
        Self {
            kind: SectionKind::Version,
            version: Some(version),
            date,
            start_line,
            body: Vec::new(),
        }
    }

    pub fn push_body_line(&mut self, line: &str) {
        self.body.push(line.to_string());
    }

    pub fn is_release(&self) -> bool {
        self.kind == SectionKind::Version
    }
}

/// reason a document failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// no markdown heading in the opening lines
    MissingHeader,
    /// unreleased section absent, or present more than once
    MissingUnreleased,
    /// no version section at all
    NoVersions,
    /// the same version appears twice
    DuplicateVersion,
    /// versions are not in strictly descending order
    OutOfOrder,
    /// a version heading lacks a date
    MissingDate,
    /// a version section has no bullet entries
    EmptySection,
    /// category headings present but none followed by a bullet
    UncategorizedContent,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingHeader => write!(f, "missing_header"),
            ViolationKind::MissingUnreleased => write!(f, "missing_unreleased"),
            ViolationKind::NoVersions => write!(f, "no_versions"),
            ViolationKind::DuplicateVersion => write!(f, "duplicate_version"),
            ViolationKind::OutOfOrder => write!(f, "out_of_order"),
            ViolationKind::MissingDate => write!(f, "missing_date"),
            ViolationKind::EmptySection => write!(f, "empty_section"),
            ViolationKind::UncategorizedContent => write!(f, "uncategorized_content"),
        }
    }
}

/// the first rule failure found in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// stable machine-readable reason
    pub kind: ViolationKind,
    /// human-readable description
    pub message: String,
    /// version the violation concerns, when one applies
    pub version: Option<String>,
    /// 1-based line number, when one applies
    pub line: Option<usize>,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: String) -> Self {
        Self {
            kind,
            message,
            version: None,
            line: None,
        }
    }

    pub fn with_version(mut self, version: &Version) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {}: {}", self.kind, line, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

/// result of running the full rule pipeline over one document
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Violation),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(violation) => Some(violation),
        }
    }
}
