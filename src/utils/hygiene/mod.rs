// complexity and hygiene checks

pub mod config;
pub mod scanner;
pub mod types;

pub use config::HygieneConfig;
pub use scanner::scan_hygiene;
pub use types::HygieneViolation;
