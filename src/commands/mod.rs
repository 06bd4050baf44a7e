mod build;

use anyhow::Result;

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<()> {
    build::run_build_command(cli)
}
