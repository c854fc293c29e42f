//! Sitemapper - a multilingual XML sitemap generator and server.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod embed;
mod expand;
mod generator;
mod logger;
mod source;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SitemapConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = init_config(SitemapConfig::load(cli)?);

    match &cli.command {
        Commands::Generate => cli::generate::run(&config),
        Commands::Serve { .. } => cli::serve::run(&config),
    }
}
