// domain boundary scanner

use super::rules::{ELM_DOMAIN_RULES, HASKELL_DOMAIN_RULES};
use super::types::{ArchViolation, LayerRule};
use crate::error::{Error, Result};
use crate::utils::walker::collect_files_with_extensions;
use std::fs;
use std::path::Path;

/// scan the tree under `root` for forbidden imports in domain sources
///
/// only files whose root-relative path passes through `src/Domain` are
/// checked. every matching rule fires, so one import line can produce
/// several violations. non-UTF-8 files are skipped.
pub fn scan_architecture(root: &Path) -> Result<Vec<ArchViolation>> {
    let mut violations = Vec::new();

    for path in collect_files_with_extensions(root, &["hs", "elm"])? {
        let relative = path.strip_prefix(root).unwrap_or(path.as_path()).to_path_buf();
        if !relative.to_string_lossy().contains("src/Domain") {
            continue;
        }

        let rules: &[LayerRule] = match path.extension().and_then(|e| e.to_str()) {
            Some("hs") => &HASKELL_DOMAIN_RULES,
            Some("elm") => &ELM_DOMAIN_RULES,
            _ => continue,
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::InvalidData => continue,
            Err(err) => {
                return Err(Error::FileReadError { path, source: err });
            }
        };

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if !line.starts_with("import") {
                continue;
            }
            for rule in rules {
                if line.contains(rule.pattern) {
                    violations.push(ArchViolation::new(
                        relative.clone(),
                        index + 1,
                        line.to_string(),
                        rule.rule.to_string(),
                    ));
                }
            }
        }
    }

    Ok(violations)
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
    fn test_clean_domain_passes() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/Domain/Invoice.hs",
            "module Domain.Invoice where\n\nimport Data.Text (Text)\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_haskell_effect_import_flagged() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/Domain/Invoice.hs",
            "module Domain.Invoice where\n\nimport Effect.Clock\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 3);
        assert_eq!(violations[0].import, "import Effect.Clock");
        assert!(violations[0].rule.contains("Inversion of Control"));
    }

    #[test]
    fn test_haskell_purity_rules_flagged() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/Domain/Billing.hs",
            "import Network.HTTP.Client\nimport Database.Persist\nimport System.IO\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_elm_decoder_import_flagged() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/Domain/Cart.elm",
            "module Domain.Cart exposing (..)\n\nimport Json.Decode as Decode\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].rule.contains("use Api/"));
    }

    #[test]
    fn test_files_outside_domain_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/App/Server.hs",
            "import Effect.Clock\nimport Database.Persist\n",
        );
        write_file(
            temp_dir.path(),
            "src/Pages/Home.elm",
            "import Http\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_indented_import_is_checked() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/Domain/Odd.elm",
            "    import Http\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_commented_import_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/Domain/Notes.hs",
            "-- import Effect would be wrong here\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_violation_paths_are_root_relative() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "src/Domain/Deep/Nested.hs",
            "import App.Config\n",
        );

        let violations = scan_architecture(temp_dir.path()).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].path,
            Path::new("src/Domain/Deep/Nested.hs")
        );
    }
}
