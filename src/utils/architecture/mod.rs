// architectural boundary checks

pub mod rules;
pub mod scanner;
pub mod types;

pub use rules::{ELM_DOMAIN_RULES, HASKELL_DOMAIN_RULES};
pub use scanner::scan_architecture;
pub use types::{ArchViolation, LayerRule};
