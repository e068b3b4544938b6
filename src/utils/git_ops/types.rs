use semver::Version;
use serde::{Deserialize, Serialize};

/// a release tag resolved to the commit it points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedRelease {
    pub tag: String,
    pub version: Version,
    pub commit_id: String,
}

impl TaggedRelease {
    pub fn new(tag: String, version: Version, commit_id: String) -> Self {
        Self {
            tag,
            version,
            commit_id,
        }
    }
}
