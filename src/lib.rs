// Credential resolution and logging setup
pub mod config;

// The purge pipeline itself
pub mod purge;

pub use config::Config;
pub use purge::{purge_all_commands, CommandRegistry};
