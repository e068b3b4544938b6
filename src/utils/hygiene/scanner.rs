// complexity and work-marker scanner

use super::config::HygieneConfig;
use super::types::HygieneViolation;
use crate::error::{Error, Result};
use crate::utils::walker::collect_files_with_extensions;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// assembled from pieces so the pattern never matches its own source
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"\b(TO", "DO|FIX", r"ME)\b")).expect("invalid marker regex")
});

/// scan the configured directories under `root` for oversized files and
/// unowned work markers, accumulating every finding
pub fn scan_hygiene(root: &Path, config: &HygieneConfig) -> Result<Vec<HygieneViolation>> {
    let extensions: Vec<&str> = config.extensions.iter().map(|e| e.as_str()).collect();
    let mut violations = Vec::new();

    for dir in &config.scan_dirs {
        for path in collect_files_with_extensions(&root.join(dir), &extensions)? {
            let relative = path
                .strip_prefix(root)
                .unwrap_or(path.as_path())
                .to_path_buf();

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) if err.kind() == std::io::ErrorKind::InvalidData => continue,
                Err(err) => {
                    return Err(Error::FileReadError { path, source: err });
                }
            };

            let line_count = content.lines().count();
            if line_count > config.max_file_lines {
                violations.push(HygieneViolation::FileTooLarge {
                    path: relative.clone(),
                    lines: line_count,
                    max: config.max_file_lines,
                });
            }

            for (index, line) in content.lines().enumerate() {
                if has_bare_marker(line) {
                    violations.push(HygieneViolation::BareTodo {
                        path: relative.clone(),
                        line: index + 1,
                        text: line.trim().to_string(),
                    });
                }
            }
        }
    }

    Ok(violations)
}

/// a marker is bare when it is not immediately followed by an opening paren,
/// so `X(owner)` and `X(#123)` forms pass
fn has_bare_marker(line: &str) -> bool {
    MARKER_RE
        .find_iter(line)
        .any(|found| !line[found.end()..].starts_with('('))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_clean_tree_passes() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "src/app.py", "def main():\n    pass\n");

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_file_over_line_cap_flagged() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "src/big.py", &"x = 1\n".repeat(6));

        let config = HygieneConfig::new().max_file_lines(5);
        let violations = scan_hygiene(temp_dir.path(), &config).unwrap();
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            HygieneViolation::FileTooLarge { lines: 6, max: 5, .. }
        ));
    }

    #[test]
    fn test_file_at_line_cap_passes() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "src/ok.py", &"x = 1\n".repeat(5));

        let config = HygieneConfig::new().max_file_lines(5);
        let violations = scan_hygiene(temp_dir.path(), &config).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_bare_marker_flagged_with_location() {
        let temp_dir = TempDir::new().unwrap();
        let source = concat!("def f():\n", "    # TO", "DO fix the rounding\n");
        write_file(temp_dir.path(), "src/math.py", source);

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert_eq!(violations.len(), 1);
        match &violations[0] {
            HygieneViolation::BareTodo { line, text, .. } => {
                assert_eq!(*line, 2);
                assert!(text.contains("fix the rounding"));
            }
            other => panic!("unexpected violation: {:?}", other),
        }
    }

    #[test]
    fn test_owned_marker_passes() {
        let temp_dir = TempDir::new().unwrap();
        let source = concat!("# TO", "DO(alice): revisit\n", "# FIX", "ME(#42): flaky\n");
        write_file(temp_dir.path(), "src/owned.py", source);

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_bare_fixme_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let source = concat!("-- FIX", "ME this is broken\n");
        write_file(temp_dir.path(), "src/Broken.hs", source);

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_marker_inside_word_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let source = concat!("todos = load_TO", "DOS()\n");
        write_file(temp_dir.path(), "src/list.py", source);

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_owned_then_bare_on_one_line_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let source = concat!("# TO", "DO(bob): ok, but FIX", "ME later\n");
        write_file(temp_dir.path(), "src/mixed.py", source);

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_scan_limited_to_configured_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let source = concat!("# TO", "DO elsewhere\n");
        write_file(temp_dir.path(), "docs/notes.py", source);

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_extension_filter_applies() {
        let temp_dir = TempDir::new().unwrap();
        let source = concat!("TO", "DO: markdown is not scanned\n");
        write_file(temp_dir.path(), "src/notes.md", source);

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_non_utf8_file_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/blob.py"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let violations = scan_hygiene(temp_dir.path(), &HygieneConfig::default()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_loc_violation_reported_before_markers_in_same_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut source = "x = 1\n".repeat(6);
        source.push_str(concat!("# TO", "DO trailing\n"));
        write_file(temp_dir.path(), "src/both.py", &source);

        let config = HygieneConfig::new().max_file_lines(5);
        let violations = scan_hygiene(temp_dir.path(), &config).unwrap();
        assert_eq!(violations.len(), 2);
        assert!(matches!(violations[0], HygieneViolation::FileTooLarge { .. }));
        assert!(matches!(violations[1], HygieneViolation::BareTodo { .. }));
    }
}
