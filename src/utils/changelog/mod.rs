// changelog verification module

pub mod config;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::ChangelogConfig;
pub use parser::{SectionScanner, is_bullet_line, is_category_heading, parse_sections};
pub use types::{Section, SectionKind, ValidationOutcome, Violation, ViolationKind};
pub use validator::{validate_changelog, validate_parsed};
