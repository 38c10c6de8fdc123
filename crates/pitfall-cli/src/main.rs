// SPDX-License-Identifier: Apache-2.0

//! Pitfall - vulnerable vs hardened code, side by side.
//!
//! A teaching CLI that contrasts broken and fixed versions of three classic
//! web-application mistakes: SQL injection, cross-site scripting, and weak
//! password storage. The original material ran as a script of prints; here
//! each lesson is an explicit subcommand.

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.output);

    let output_ctx = OutputContext::from_cli(cli.output);
    debug!("dispatching lesson");

    match commands::run(cli.command, &output_ctx) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            Err(e)
        }
    }
}
