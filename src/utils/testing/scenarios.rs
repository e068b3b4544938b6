// pre-defined test project scenarios

use super::changelog_builder::ChangelogBuilder;
use super::project_builder::{ProjectTreeBuilder, TestProject};

/// pre-defined test scenarios
pub enum TestScenario {
    /// valid changelog, pure domain, nothing to flag
    Healthy,
    /// changelog with releases in ascending order and a missing date
    MessyChangelog,
    /// domain layer reaching into effects, storage and transport
    LeakyDomain,
}

impl TestScenario {
    /// build a project tree from a predefined scenario
    pub fn build(self) -> Result<TestProject, Box<dyn std::error::Error>> {
        match self {
            TestScenario::Healthy => Self::build_healthy(),
            TestScenario::MessyChangelog => Self::build_messy_changelog(),
            TestScenario::LeakyDomain => Self::build_leaky_domain(),
        }
    }

    fn build_healthy() -> Result<TestProject, Box<dyn std::error::Error>> {
        let changelog = ChangelogBuilder::new()
            .title("Changelog")
            .unreleased()
            .release("1.1.0", "2024-03-01")
            .category("Added")
            .bullet("order cancellation flow")
            .blank()
            .release("1.0.0", "2024-01-15")
            .category("Added")
            .bullet("initial release")
            .build();

        ProjectTreeBuilder::new()
            .changelog(changelog)
            .file(
                "src/Domain/Order.hs",
                "module Domain.Order where\n\nimport Data.Text (Text)\n\nnewtype OrderId = OrderId Text\n",
            )
            .file(
                "src/App/Main.hs",
                "module Main where\n\nimport Domain.Order\nimport Effect.Database\n\nmain :: IO ()\nmain = pure ()\n",
            )
            .build()
    }

    fn build_messy_changelog() -> Result<TestProject, Box<dyn std::error::Error>> {
        let changelog = ChangelogBuilder::new()
            .title("Changelog")
            .release("1.0.0", "2024-01-15")
            .bullet("first release")
            .blank()
            .release_undated("2.0.0")
            .bullet("breaking rework")
            .build();

        ProjectTreeBuilder::new().changelog(changelog).build()
    }

    fn build_leaky_domain() -> Result<TestProject, Box<dyn std::error::Error>> {
        ProjectTreeBuilder::new()
            .file(
                "src/Domain/User.hs",
                "module Domain.User where\n\nimport Effect.Database\nimport Database.Persist\n\ndata User = User\n",
            )
            .file(
                "src/Domain/Profile.elm",
                "module Domain.Profile exposing (..)\n\nimport Http\nimport Json.Decode\n",
            )
            .build()
    }
}
