mod args;
mod pipeline;
mod stats;
mod util;

use args::{Cli, SubCommands};
use pipeline::{clean, scan};

use clap::Parser;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        SubCommands::Scan(args) => {
            scan(&args)?;
        }
        SubCommands::Clean(args) => {
            clean(&args)?;
        }
    }
    Ok(())
}
