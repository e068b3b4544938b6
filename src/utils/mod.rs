pub mod architecture;
pub mod bump;
pub mod changelog;
pub mod config;
pub mod git_ops;
pub mod hygiene;
pub mod project_config;
pub mod scaffold;
pub mod walker;

pub mod testing;
