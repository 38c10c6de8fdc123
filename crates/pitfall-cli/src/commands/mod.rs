// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the pitfall CLI.

pub mod injection;
pub mod passwords;
pub mod xss;

use anyhow::Result;

use crate::cli::{Commands, OutputContext, PasswordsArgs};

/// Dispatch to the appropriate lesson handler.
pub fn run(command: Commands, ctx: &OutputContext) -> Result<()> {
    match command {
        Commands::Injection => injection::run(ctx),
        Commands::Xss => xss::run(ctx),
        Commands::Passwords(args) => passwords::run(ctx, &args),
        Commands::All => {
            injection::run(ctx)?;
            xss::run(ctx)?;
            passwords::run(ctx, &PasswordsArgs::default())
        }
    }
}
