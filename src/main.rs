#![doc = include_str!("../README.md")]

mod cli;
mod config;
mod core;
mod prelude;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{cli::Args, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    Args::parse().command.run()?;

    info!("done!");
    Ok(())
}
