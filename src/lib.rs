//! express-init CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod manifest;
pub mod templates;

pub use commands::SetupCommand;
pub use manifest::Manifest;
pub use templates::ProjectTemplate;
