//! # vsync — valuesync CLI
//!
//! One-shot synchronization of the image tags in a Helm values file with
//! the versions pinned in upstream docker-compose manifests.

mod cli;
mod fetch;
mod plan;
mod sync;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    match sync::run(&config) {
        Ok(sync::SyncOutcome::Applied { .. }) => ExitCode::SUCCESS,
        Ok(sync::SyncOutcome::EmptyPlan) => {
            println!("No updates found. Check service mappings or compose files.");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}
