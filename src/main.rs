#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use anyhow::Result;
use clap::Parser;
use sdherbs::Config;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod app;
mod cli;

pub(crate) use cli::commands::{AdminCommands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_init()?;

    // Logs go to stderr; stdout carries the transcript.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::from_str(&config.logging.level).unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    app::dispatch::dispatch(cli, config).await
}
