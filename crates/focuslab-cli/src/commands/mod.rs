//! Command implementations.

pub mod analyze;
pub mod config;
pub mod playbooks;
pub mod sample;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::playbooks::execute_playbooks;
pub use self::sample::execute_sample;
