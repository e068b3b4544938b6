// release bump advisor module

pub mod advisor;
pub mod classifier;
pub mod types;

pub use advisor::advise;
pub use classifier::{classify_commits, next_version};
pub use types::{BumpAdvice, BumpKind, CommitMessage};
