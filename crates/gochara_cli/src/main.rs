mod bodies_cmd;
mod cli;
mod config;
mod conjunction_cmd;
mod display;
mod logging;
mod retrograde_cmd;
mod transit_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::{FileConfig, Settings};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = || -> Result<Settings> {
        let file = FileConfig::load(cli.config.as_deref())?;
        Ok(Settings::resolve(file, cli.timezone.as_deref())?)
    };
    match cli.command {
        Command::Conjunction(args) => conjunction_cmd::run(args, &settings()?),
        Command::Transit(args) => transit_cmd::run(args, &settings()?),
        Command::Retrograde(args) => retrograde_cmd::run(args, &settings()?),
        Command::ListBodies => {
            bodies_cmd::run();
            Ok(())
        }
    }
}
