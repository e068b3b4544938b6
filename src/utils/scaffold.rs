// project component renaming for fresh scaffolds

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// a directory move performed during initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedPath {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenamedPath {
    pub fn new(from: PathBuf, to: PathBuf) -> Self {
        RenamedPath { from, to }
    }
}

/// what the initializer did and what is left for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitReport {
    pub renamed: Vec<RenamedPath>,
    pub manual_steps: Vec<String>,
}

/// rename the scaffold components under `root/src` to the given names
///
/// Missing component directories are skipped silently, so the initializer
/// can run on partial scaffolds. Package manifests are never rewritten;
/// those edits are reported as manual steps instead.
pub fn initialize_project(root: &Path, backend: &str, frontend: &str) -> Result<InitReport> {
    let src = root.join("src");
    let mut renamed = Vec::new();

    for (old_name, new_name) in [("backend", backend), ("frontend", frontend)] {
        let from = src.join(old_name);
        // a rename onto itself would be a no-op, skip it
        if old_name == new_name || !from.exists() {
            continue;
        }
        let to = src.join(new_name);
        fs::rename(&from, &to).map_err(|e| Error::RenameError {
            from: from.clone(),
            to: to.clone(),
            source: e,
        })?;
        renamed.push(RenamedPath::new(from, to));
    }

    let manual_steps = vec![
        format!("Rename 'name: backend' in src/{}/package.yaml", backend),
        format!(
            "Rename 'name: frontend' in src/{}/package.json (if applicable)",
            frontend
        ),
    ];

    Ok(InitReport {
        renamed,
        manual_steps,
    })
}
