// testing utilities for generating project fixtures

pub mod changelog_builder;
pub mod project_builder;
pub mod scenarios;

pub use changelog_builder::ChangelogBuilder;
pub use project_builder::{ProjectTreeBuilder, TestProject, git_available};
pub use scenarios::TestScenario;
