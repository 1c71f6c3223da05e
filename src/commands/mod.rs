//! CLI command implementations

pub mod setup;

pub use setup::SetupCommand;
