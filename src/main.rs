//! Petrify - prerenders component routes into a static HTML tree.

#![allow(dead_code)]

mod cli;
mod config;
mod emit;
mod event;
mod logger;
mod registry;
mod render;
mod route;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { name } => cli::init::new_site(&config, name.is_some()),
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Routes { args } => cli::routes::run_routes(args, &config),
    }
}
