use super::types::TaggedRelease;
use crate::error::{Error, Result};
use gix;
use gix::bstr::ByteSlice;
use semver::Version;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct GitOps;

impl GitOps {
    pub fn new() -> Self {
        Self
    }

    /// detect root of the repository (path as a result)
    pub fn detect_repository_root<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
        let repo = gix::discover(path.as_ref())?;

        // working directory for normal repos, git dir for bare ones
        let root_path = if let Some(work_dir) = repo.work_dir() {
            work_dir.to_path_buf()
        } else {
            repo.git_dir().to_path_buf()
        };

        Ok(root_path)
    }

    /// detect if the given path is inside a repository
    pub fn is_repository<P: AsRef<Path>>(path: P) -> Result<bool> {
        match gix::discover(path.as_ref()) {
            Ok(_) => Ok(true),
            Err(_) => Ok(false), // any error means it's not a repository
        }
    }

    /// find the most recent release tag reachable from HEAD
    ///
    /// tag references are peeled to the commits they point at, then the HEAD
    /// ancestry is walked newest-first until a tagged commit turns up. a repo
    /// with no tags or an unborn HEAD yields `None`.
    pub fn latest_release_tag<P: AsRef<Path>>(repo_path: P) -> Result<Option<TaggedRelease>> {
        let repo = gix::discover(repo_path.as_ref())?;

        // map peeled tag targets to their tag names
        let mut tags: HashMap<gix::ObjectId, String> = HashMap::new();
        let references = repo.references().map_err(Error::from_git_error)?;
        for reference_result in references.all().map_err(Error::from_git_error)? {
            let Ok(reference) = reference_result else {
                continue;
            };
            let Ok(name) = reference.name().as_bstr().to_str() else {
                continue;
            };
            let Some(tag_name) = name.strip_prefix("refs/tags/") else {
                continue;
            };
            let tag_name = tag_name.to_string();
            if let Ok(id) = reference.into_fully_peeled_id() {
                tags.insert(id.detach(), tag_name);
            }
        }

        if tags.is_empty() {
            return Ok(None);
        }

        let head_commit = match repo.head_commit() {
            Ok(commit) => commit,
            Err(_) => return Ok(None), // unborn HEAD, nothing released yet
        };

        let walk = repo
            .rev_walk([head_commit.id])
            .all()
            .map_err(Error::from_git_error)?;
        for info_result in walk {
            let info = info_result.map_err(Error::from_git_error)?;
            if let Some(tag_name) = tags.get(&info.id) {
                let version = Self::parse_tag_version(tag_name)?;
                return Ok(Some(TaggedRelease::new(
                    tag_name.clone(),
                    version,
                    info.id.to_string(),
                )));
            }
        }

        Ok(None)
    }

    /// raw commit messages from HEAD back to (excluding) `stop_commit`
    ///
    /// with no stop commit the whole reachable history is collected. the walk
    /// treats history as linear past the stop commit, which matches the
    /// trunk-based flow these repositories use.
    pub fn commits_since<P: AsRef<Path>>(
        repo_path: P,
        stop_commit: Option<&str>,
    ) -> Result<Vec<String>> {
        let repo = gix::discover(repo_path.as_ref())?;

        let head_commit = match repo.head_commit() {
            Ok(commit) => commit,
            Err(_) => return Ok(Vec::new()), // unborn HEAD, no history
        };

        let stop_id = match stop_commit {
            Some(hex) => {
                Some(gix::ObjectId::from_hex(hex.as_bytes()).map_err(Error::from_git_error)?)
            }
            None => None,
        };

        let mut messages = Vec::new();
        let walk = repo
            .rev_walk([head_commit.id])
            .all()
            .map_err(Error::from_git_error)?;
        for info_result in walk {
            let info = info_result.map_err(Error::from_git_error)?;
            if Some(info.id) == stop_id {
                break;
            }

            let commit = repo
                .find_object(info.id)
                .map_err(Error::from_git_error)?
                .try_into_commit()
                .map_err(|_| {
                    Error::GitError(Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "Not a commit",
                    )))
                })?;
            messages.push(commit.message_raw_sloppy().to_str_lossy().into_owned());
        }

        Ok(messages)
    }

    /// parse a release tag name into a version, tolerating a leading 'v'
    pub fn parse_tag_version(tag: &str) -> Result<Version> {
        let clean = tag.strip_prefix('v').unwrap_or(tag);
        Version::parse(clean).map_err(|source| Error::TagParseError {
            tag: tag.to_string(),
            source,
        })
    }
}

impl Default for GitOps {
    fn default() -> Self {
        Self::new()
    }
}
