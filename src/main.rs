//! express-init CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use express_init_lib::SetupCommand;

#[derive(Parser)]
#[command(name = "express-init")]
#[command(version)]
#[command(about = "Scaffold a minimal Express + MongoDB API project in the current directory", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let cmd = SetupCommand::new()?;
    cmd.execute()
}
