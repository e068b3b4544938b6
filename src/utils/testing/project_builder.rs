// builder for creating test project trees

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// builder for project trees used in tests
pub struct ProjectTreeBuilder {
    files: Vec<(String, String)>,
    git_init: bool,
}

impl ProjectTreeBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            git_init: false,
        }
    }

    /// add a file with the given content (parent directories are created)
    pub fn file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    /// add a CHANGELOG.md with the given content
    pub fn changelog(self, content: impl Into<String>) -> Self {
        self.file("CHANGELOG.md", content)
    }

    /// initialize a git repository in the tree
    pub fn with_git(mut self) -> Self {
        self.git_init = true;
        self
    }

    /// build the tree and return a handle to it
    pub fn build(self) -> Result<TestProject, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        for (rel_path, content) in &self.files {
            let file_path = path.join(rel_path);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(file_path, content)?;
        }

        if self.git_init {
            Self::init_git(&path)?;
        }

        Ok(TestProject {
            path,
            _temp_dir: temp_dir,
        })
    }

    fn init_git(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::process::Command::new("git")
            .arg("init")
            .current_dir(path)
            .output()?;

        // configure git for tests
        std::process::Command::new("git")
            .args(["config", "user.email", "test@warden.test"])
            .current_dir(path)
            .output()?;

        std::process::Command::new("git")
            .args(["config", "user.name", "Warden Test"])
            .current_dir(path)
            .output()?;

        // disable GPG signing
        std::process::Command::new("git")
            .args(["config", "commit.gpgsign", "false"])
            .current_dir(path)
            .output()?;

        Ok(())
    }
}

impl Default for ProjectTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// a built test project tree
pub struct TestProject {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TestProject {
    /// get the path to the project root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// write or overwrite a file inside the tree
    pub fn write_file(&self, rel_path: &str, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let file_path = self.path.join(rel_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(file_path, content)?;
        Ok(())
    }

    /// stage everything and create a commit
    pub fn commit_all(&self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        std::process::Command::new("git")
            .args(["add", "."])
            .current_dir(&self.path)
            .output()?;

        std::process::Command::new("git")
            .args(["commit", "-m", message, "--no-gpg-sign"])
            .current_dir(&self.path)
            .output()?;

        Ok(())
    }

    /// create a lightweight tag at HEAD
    pub fn tag(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        std::process::Command::new("git")
            .args(["tag", name])
            .current_dir(&self.path)
            .output()?;
        Ok(())
    }
}

/// check whether the git binary is available on this machine
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok()
}
