//! Command dispatch logic for wayfarer

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use wayfarer_core::error::{Result, WayfarerError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(WayfarerError::UsageError(
            "no command given (try `wayfarer solve --help`)".to_string(),
        )),

        Some(Commands::Solve {
            scenario,
            algorithm,
            metric,
            dims,
        }) => commands::solve::execute(cli, scenario, *algorithm, *metric, *dims, start),

        Some(Commands::Inspect { scenario, dims }) => {
            commands::inspect::execute(cli, scenario, *dims)
        }
    }
}
