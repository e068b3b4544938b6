// recursive source tree walking

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// build and vendor directories never worth descending into
const SKIPPED_DIRS: [&str; 4] = ["node_modules", "elm-stuff", "dist", "target"];

/// collect files under `root` carrying one of `extensions`, sorted for
/// deterministic reports
///
/// dot-directories and build directories are skipped. a missing root yields
/// an empty list.
pub fn collect_files_with_extensions(root: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if root.is_dir() {
        visit(root, extensions, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn visit(dir: &Path, extensions: &[&str], files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str())
                && (name.starts_with('.') || SKIPPED_DIRS.contains(&name))
            {
                continue;
            }
            visit(&path, extensions, files)?;
        } else if path.is_file()
            && let Some(ext) = path.extension().and_then(|e| e.to_str())
            && extensions.contains(&ext)
        {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collects_matching_extensions_recursively() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src/Domain")).unwrap();
        fs::write(temp_dir.path().join("src/App.hs"), "module App where").unwrap();
        fs::write(
            temp_dir.path().join("src/Domain/Core.hs"),
            "module Core where",
        )
        .unwrap();
        fs::write(temp_dir.path().join("src/Main.elm"), "module Main").unwrap();
        fs::write(temp_dir.path().join("README.md"), "# readme").unwrap();

        let files = collect_files_with_extensions(temp_dir.path(), &["hs", "elm"]).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| {
            let ext = p.extension().and_then(|e| e.to_str());
            ext == Some("hs") || ext == Some("elm")
        }));
    }

    #[test]
    fn test_skips_dot_and_build_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".git")).unwrap();
        fs::create_dir_all(temp_dir.path().join("node_modules/pkg")).unwrap();
        fs::write(temp_dir.path().join(".git/config.py"), "x = 1").unwrap();
        fs::write(temp_dir.path().join("node_modules/pkg/index.py"), "y = 2").unwrap();
        fs::write(temp_dir.path().join("keep.py"), "z = 3").unwrap();

        let files = collect_files_with_extensions(temp_dir.path(), &["py"]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.py"));
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let files =
            collect_files_with_extensions(&temp_dir.path().join("absent"), &["py"]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_results_are_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.py"), "pass").unwrap();
        fs::write(temp_dir.path().join("a.py"), "pass").unwrap();
        fs::write(temp_dir.path().join("c.py"), "pass").unwrap();

        let files = collect_files_with_extensions(temp_dir.path(), &["py"]).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.py", "b.py", "c.py"]);
    }
}
