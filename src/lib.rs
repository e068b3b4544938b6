pub mod error;
pub mod utils;

pub use error::*;
pub use utils::architecture::{ArchViolation, LayerRule, scan_architecture};
pub use utils::bump::{BumpAdvice, BumpKind, CommitMessage, advise, classify_commits, next_version};
pub use utils::changelog::{
    ChangelogConfig, Section, SectionKind, SectionScanner, ValidationOutcome, Violation,
    ViolationKind, is_bullet_line, is_category_heading, parse_sections, validate_changelog,
    validate_parsed,
};
pub use utils::config::WardenConfig;
pub use utils::git_ops::{GitOps, TaggedRelease};
pub use utils::hygiene::{HygieneConfig, HygieneViolation, scan_hygiene};
pub use utils::project_config::{DEFAULT_CONFIG_FILE, read_config_value};
pub use utils::scaffold::{InitReport, RenamedPath, initialize_project};
pub use utils::walker::collect_files_with_extensions;
