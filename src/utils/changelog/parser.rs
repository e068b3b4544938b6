// changelog section parser

use super::types::{Section, SectionKind};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static UNRELEASED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^##\s+\[unreleased\]\s*$").expect("invalid unreleased heading regex")
});

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s+\[(\d+)\.(\d+)\.(\d+)\](?:\s*-\s*(\d{4}-\d{2}-\d{2}))?\s*$")
        .expect("invalid version heading regex")
});

static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^###\s+(added|changed|fixed|removed|security)\s*$")
        .expect("invalid category heading regex")
});

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\S+").expect("invalid bullet regex"));

/// scanner position within the document
#[derive(Debug, Default)]
enum ScanState {
    /// before the first recognized heading, lines are discarded
    #[default]
    Preamble,
    /// inside an open section, lines accumulate into its body
    InSection(Section),
}

/// single-pass scanner turning lines into an ordered section sequence
#[derive(Debug, Default)]
pub struct SectionScanner {
    state: ScanState,
    sections: Vec<Section>,
}

impl SectionScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// consume one line, `line_number` is 1-based
    pub fn feed(&mut self, line_number: usize, line: &str) {
        if let Some(section) = parse_heading(line_number, line) {
            self.open(section);
            return;
        }
        match &mut self.state {
            ScanState::Preamble => {}
            ScanState::InSection(section) => section.push_body_line(line),
        }
    }

    /// close the open section and return every section in document order
    pub fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }

    fn open(&mut self, section: Section) {
        self.flush();
        self.state = ScanState::InSection(section);
    }

    fn flush(&mut self) {
        if let ScanState::InSection(section) = std::mem::take(&mut self.state) {
            self.sections.push(section);
        }
    }
}

/// parse a complete document into its ordered section sequence
pub fn parse_sections(content: &str) -> Vec<Section> {
    let mut scanner = SectionScanner::new();
    for (index, line) in content.lines().enumerate() {
        scanner.feed(index + 1, line);
    }
    scanner.finish()
}

fn parse_heading(line_number: usize, line: &str) -> Option<Section> {
    if UNRELEASED_RE.is_match(line) {
        return Some(Section::unreleased(line_number));
    }

    let caps = VERSION_RE.captures(line)?;
    // a digit run that overflows u64 is not a version heading
    let major = caps.get(1)?.as_str().parse::<u64>().ok()?;
    let minor = caps.get(2)?.as_str().parse::<u64>().ok()?;
    let patch = caps.get(3)?.as_str().parse::<u64>().ok()?;

    // shape-valid but calendar-invalid dates are treated as absent
    let date = caps
        .get(4)
        .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok());

    Some(Section::release(
        semver::Version::new(major, minor, patch),
        date,
        line_number,
    ))
}

/// true for category sub-headings (Added, Changed, Fixed, Removed, Security)
pub fn is_category_heading(line: &str) -> bool {
    CATEGORY_RE.is_match(line)
}

/// true for entry lines: a dash or asterisk, whitespace, then content
pub fn is_bullet_line(line: &str) -> bool {
    BULLET_RE.is_match(line)
}
