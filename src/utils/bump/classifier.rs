// commit classification for release bumps

use super::types::{BumpKind, CommitMessage};
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

static BREAKING_SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+(\(.*\))?!:").expect("invalid breaking subject regex")
});

/// classify commits into a bump recommendation and a reason
///
/// a breaking change wins immediately, a feature raises the floor to minor,
/// anything else lands on patch. an empty history means nothing to release.
pub fn classify_commits(commits: &[CommitMessage]) -> (Option<BumpKind>, String) {
    if commits.is_empty() {
        return (None, "No changes detected".to_string());
    }

    let mut feature_reason: Option<String> = None;

    for commit in commits {
        if is_breaking(commit) {
            return (
                Some(BumpKind::Major),
                format!("Breaking change detected: '{}'", commit.subject),
            );
        }

        if commit.subject.starts_with("feat") {
            feature_reason = Some(format!("Feature detected: '{}'", commit.subject));
        }
    }

    match feature_reason {
        Some(reason) => (Some(BumpKind::Minor), reason),
        None => (
            Some(BumpKind::Patch),
            "Only fixes/chores detected".to_string(),
        ),
    }
}

fn is_breaking(commit: &CommitMessage) -> bool {
    commit.subject.contains("BREAKING CHANGE")
        || commit.body.contains("BREAKING CHANGE")
        || BREAKING_SUBJECT_RE.is_match(&commit.subject)
}

/// compute the version an increment lands on
pub fn next_version(current: &Version, bump: BumpKind) -> Version {
    match bump {
        BumpKind::Major => Version::new(current.major + 1, 0, 0),
        BumpKind::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpKind::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}
