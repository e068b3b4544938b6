// git-backed release advisor

use super::classifier::{classify_commits, next_version};
use super::types::{BumpAdvice, CommitMessage};
use crate::error::{Error, Result};
use crate::utils::git_ops::GitOps;
use semver::Version;
use std::path::Path;

/// fallback used when the repository has no release tag yet
const FALLBACK_TAG: &str = "v0.0.0";

/// analyze history since the latest release tag and recommend the next version
pub fn advise<P: AsRef<Path>>(repo_path: P) -> Result<BumpAdvice> {
    let repo_path = repo_path.as_ref();

    if !GitOps::is_repository(repo_path)? {
        return Err(Error::RepositoryNotFound {
            path: repo_path.to_path_buf(),
        });
    }

    let release = GitOps::latest_release_tag(repo_path)?;
    let (tag, current_version, stop_commit) = match &release {
        Some(release) => (
            release.tag.clone(),
            release.version.clone(),
            Some(release.commit_id.as_str()),
        ),
        None => (FALLBACK_TAG.to_string(), Version::new(0, 0, 0), None),
    };

    let raw_messages = GitOps::commits_since(repo_path, stop_commit)?;
    let commits: Vec<CommitMessage> = raw_messages
        .iter()
        .map(|raw| CommitMessage::from_raw(raw))
        .collect();

    let (bump, reason) = classify_commits(&commits);
    let next = bump.map(|kind| next_version(&current_version, kind));

    Ok(BumpAdvice {
        tag,
        current_version,
        commits_scanned: commits.len(),
        bump,
        next_version: next,
        reason,
    })
}
