// changelog validation rules

use super::config::ChangelogConfig;
use super::parser::{is_bullet_line, is_category_heading, parse_sections};
use super::types::{Section, SectionKind, ValidationOutcome, Violation, ViolationKind};
use chrono::NaiveDate;
use semver::Version;
use std::collections::HashSet;

/// how many opening lines are probed for a markdown header
const HEADER_PROBE_LINES: usize = 20;

/// borrowed view of one version section
struct ReleaseView<'a> {
    version: &'a Version,
    date: Option<NaiveDate>,
    line: usize,
    body: &'a [String],
}

/// everything a rule may inspect
struct RuleContext<'a> {
    lines: &'a [&'a str],
    sections: &'a [Section],
    releases: &'a [ReleaseView<'a>],
    config: &'a ChangelogConfig,
}

/// rules run in this order, stopping at the first failure
const RULES: [fn(&RuleContext<'_>) -> Option<Violation>; 7] = [
    check_header,
    check_unreleased,
    check_versions_present,
    check_duplicate_versions,
    check_descending_order,
    check_dates,
    check_section_content,
];

/// parse `content` and run the full rule pipeline over it
pub fn validate_changelog(content: &str, config: &ChangelogConfig) -> ValidationOutcome {
    let sections = parse_sections(content);
    validate_parsed(content, &sections, config)
}

/// run the rule pipeline over an already-parsed section sequence
pub fn validate_parsed(
    content: &str,
    sections: &[Section],
    config: &ChangelogConfig,
) -> ValidationOutcome {
    let lines: Vec<&str> = content.lines().collect();
    let releases = release_views(sections);
    let ctx = RuleContext {
        lines: &lines,
        sections,
        releases: &releases,
        config,
    };

    for rule in RULES {
        if let Some(violation) = rule(&ctx) {
            return ValidationOutcome::Invalid(violation);
        }
    }
    ValidationOutcome::Valid
}

fn release_views(sections: &[Section]) -> Vec<ReleaseView<'_>> {
    sections
        .iter()
        .filter_map(|section| {
            section.version.as_ref().map(|version| ReleaseView {
                version,
                date: section.date,
                line: section.start_line,
                body: &section.body,
            })
        })
        .collect()
}

/// at least one markdown heading must appear in the opening lines
fn check_header(ctx: &RuleContext<'_>) -> Option<Violation> {
    let has_header = ctx
        .lines
        .iter()
        .take(HEADER_PROBE_LINES)
        .any(|line| line.trim().starts_with('#'));
    if has_header {
        return None;
    }
    Some(Violation::new(
        ViolationKind::MissingHeader,
        format!(
            "changelog appears to have no header (no '# ...' line in the first {} lines)",
            HEADER_PROBE_LINES
        ),
    ))
}

/// exactly one unreleased section, when the flag requires it
fn check_unreleased(ctx: &RuleContext<'_>) -> Option<Violation> {
    if !ctx.config.require_unreleased {
        return None;
    }
    let count = ctx
        .sections
        .iter()
        .filter(|section| section.kind == SectionKind::Unreleased)
        .count();
    match count {
        1 => None,
        0 => Some(Violation::new(
            ViolationKind::MissingUnreleased,
            "missing '## [Unreleased]' section".to_string(),
        )),
        n => Some(Violation::new(
            ViolationKind::MissingUnreleased,
            format!("found {} '## [Unreleased]' sections, expected exactly one", n),
        )),
    }
}

/// the document must contain at least one version section
fn check_versions_present(ctx: &RuleContext<'_>) -> Option<Violation> {
    if !ctx.releases.is_empty() {
        return None;
    }
    Some(Violation::new(
        ViolationKind::NoVersions,
        "no version sections found (expected: '## [x.y.z]')".to_string(),
    ))
}

/// no version may appear twice, the second occurrence is reported
fn check_duplicate_versions(ctx: &RuleContext<'_>) -> Option<Violation> {
    let mut seen: HashSet<&Version> = HashSet::new();
    for release in ctx.releases {
        if !seen.insert(release.version) {
            return Some(
                Violation::new(
                    ViolationKind::DuplicateVersion,
                    format!(
                        "duplicate version [{}] (line {})",
                        release.version, release.line
                    ),
                )
                .with_version(release.version)
                .with_line(release.line),
            );
        }
    }
    None
}

/// versions must read strictly descending from top to bottom, compared numerically
fn check_descending_order(ctx: &RuleContext<'_>) -> Option<Violation> {
    let in_file: Vec<&Version> = ctx.releases.iter().map(|release| release.version).collect();
    let mut expected = in_file.clone();
    expected.sort_by(|a, b| b.cmp(a));

    if in_file == expected {
        return None;
    }

    let found: Vec<String> = in_file.iter().map(|v| v.to_string()).collect();
    let wanted: Vec<String> = expected.iter().map(|v| v.to_string()).collect();
    Some(Violation::new(
        ViolationKind::OutOfOrder,
        format!(
            "version sections are not in descending order (found: {:?}, expected: {:?})",
            found, wanted
        ),
    ))
}

/// every version heading must carry a date, when the flag requires it
fn check_dates(ctx: &RuleContext<'_>) -> Option<Violation> {
    if !ctx.config.require_dates {
        return None;
    }
    for release in ctx.releases {
        if release.date.is_none() {
            return Some(
                Violation::new(
                    ViolationKind::MissingDate,
                    format!(
                        "missing date in [{}] (line {}), use: '## [{}] - YYYY-MM-DD'",
                        release.version, release.line, release.version
                    ),
                )
                .with_version(release.version)
                .with_line(release.line),
            );
        }
    }
    None
}

/// each version section needs a bullet entry, and categorized sections need
/// at least one bullet under some category
fn check_section_content(ctx: &RuleContext<'_>) -> Option<Violation> {
    for release in ctx.releases {
        let has_bullet = release.body.iter().any(|line| is_bullet_line(line));
        if !has_bullet {
            return Some(
                Violation::new(
                    ViolationKind::EmptySection,
                    format!(
                        "section [{}] (line {}) contains no list entries",
                        release.version, release.line
                    ),
                )
                .with_version(release.version)
                .with_line(release.line),
            );
        }

        let mut categories = Vec::new();
        for (index, line) in release.body.iter().enumerate() {
            if is_category_heading(line) {
                categories.push(index);
            }
        }
        if categories.is_empty() {
            continue;
        }

        // one bullet under any category satisfies the rule
        let mut covered = false;
        for &start in &categories {
            for line in &release.body[start + 1..] {
                if line.trim().starts_with("### ") {
                    break;
                }
                if is_bullet_line(line) {
                    covered = true;
                    break;
                }
            }
            if covered {
                break;
            }
        }

        if !covered {
            return Some(
                Violation::new(
                    ViolationKind::UncategorizedContent,
                    format!(
                        "section [{}] has categories but no bullet under any of them (line {})",
                        release.version, release.line
                    ),
                )
                .with_version(release.version)
                .with_line(release.line),
            );
        }
    }
    None
}
