//! reduxify CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;

use reduxify::SetupCommand;

/// Wire Redux state management into the project in the current directory
#[derive(Parser)]
#[command(name = "reduxify")]
#[command(version)]
#[command(about = "Scaffold Redux state management into an existing project", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let root = std::env::current_dir().context("Failed to resolve current directory")?;
    SetupCommand::new(root).execute()
}
