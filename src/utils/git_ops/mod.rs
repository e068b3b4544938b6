pub mod repository;
pub mod types;

pub use repository::GitOps;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_git_repo(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // initialize git repo
        let _repo = gix::init(dir)?;

        // create a simple file
        let test_file = dir.join("test.txt");
        fs::write(&test_file, "test content")?;

        // for now, just create the repo structure without commits
        // actual commit creation with gix is complex and not essential for basic tests

        Ok(())
    }

    #[test]
    fn test_is_repository_with_git_repo() {
        let temp_dir = TempDir::new().unwrap();
        create_git_repo(temp_dir.path()).unwrap();

        let result = GitOps::is_repository(temp_dir.path());
        assert!(result.is_ok());
        assert!(result.unwrap());
    }

    #[test]
    fn test_is_repository_with_non_repo() {
        let temp_dir = TempDir::new().unwrap();

        let result = GitOps::is_repository(temp_dir.path());
        assert!(result.is_ok());
        assert!(!result.unwrap());
    }

    #[test]
    fn test_detect_repository_root() {
        let temp_dir = TempDir::new().unwrap();
        create_git_repo(temp_dir.path()).unwrap();

        // create a subdirectory
        let sub_dir = temp_dir.path().join("subdir");
        fs::create_dir(&sub_dir).unwrap();

        // test from root
        let root_result = GitOps::detect_repository_root(temp_dir.path());
        assert!(root_result.is_ok());

        // test from subdirectory
        let sub_result = GitOps::detect_repository_root(&sub_dir);
        assert!(sub_result.is_ok());

        // both should return the same root
        assert_eq!(root_result.unwrap(), sub_result.unwrap());
    }

    #[test]
    fn test_detect_repository_root_error_non_repo() {
        let temp_dir = TempDir::new().unwrap();

        let result = GitOps::detect_repository_root(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_latest_release_tag_empty_repo() {
        let temp_dir = TempDir::new().unwrap();
        create_git_repo(temp_dir.path()).unwrap();

        // no tags and an unborn HEAD
        let result = GitOps::latest_release_tag(temp_dir.path());
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_latest_release_tag_non_repo() {
        let temp_dir = TempDir::new().unwrap();

        let result = GitOps::latest_release_tag(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_commits_since_empty_repo() {
        let temp_dir = TempDir::new().unwrap();
        create_git_repo(temp_dir.path()).unwrap();

        let result = GitOps::commits_since(temp_dir.path(), None);
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_parse_tag_version_with_prefix() {
        let version = GitOps::parse_tag_version("v1.2.3").unwrap();
        assert_eq!(version, semver::Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_tag_version_bare() {
        let version = GitOps::parse_tag_version("0.4.0").unwrap();
        assert_eq!(version, semver::Version::new(0, 4, 0));
    }

    #[test]
    fn test_parse_tag_version_invalid() {
        let result = GitOps::parse_tag_version("release-2025");
        assert!(result.is_err());
    }
}
