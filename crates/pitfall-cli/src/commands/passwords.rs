// SPDX-License-Identifier: Apache-2.0

//! Password storage lesson output.
//!
//! Walks the four strategies from [`Strategy::ALL`] against one plaintext,
//! then closes the loop by verifying the adaptive hash. With `--verify`, the
//! command instead checks the plaintext against a previously produced
//! encoded hash.

use anyhow::{Context, Result};
use console::style;
use pitfall_core::password::{
    Salt, Strategy, hash_adaptive, hash_fast, hash_with_salt, verify_adaptive,
};
use serde::Serialize;

use crate::cli::{OutputContext, PasswordsArgs};

#[derive(Serialize)]
struct StrategyRow {
    strategy: Strategy,
    stored: String,
    acceptable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    weakness: Option<&'static str>,
}

#[derive(Serialize)]
struct PasswordsReport {
    lesson: &'static str,
    iterations: u32,
    strategies: Vec<StrategyRow>,
    adaptive_round_trip: bool,
}

#[derive(Serialize)]
struct VerifyReport {
    lesson: &'static str,
    matches: bool,
}

/// Runs the password storage lesson or, with `--verify`, a single
/// verification.
pub fn run(ctx: &OutputContext, args: &PasswordsArgs) -> Result<()> {
    if let Some(encoded) = &args.verify {
        return run_verify(ctx, &args.plaintext, encoded);
    }

    let plaintext = args.plaintext.as_bytes();

    let salt = Salt::generate().context("Failed to generate salt")?;
    let fast = hash_fast(plaintext);
    let salted = hash_with_salt(plaintext, salt.as_bytes(), args.iterations)
        .context("Failed to derive salted digest")?;
    let encoded = hash_adaptive(plaintext).context("Failed to produce adaptive hash")?;
    let round_trip =
        verify_adaptive(plaintext, &encoded).context("Failed to verify adaptive hash")?;

    let rows: Vec<StrategyRow> = Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let stored = match strategy {
                Strategy::Plaintext => "(the credential itself - never stored here)".to_string(),
                Strategy::FastDigest => hex::encode(fast),
                Strategy::SaltedKdf => {
                    format!("{} (salt {})", hex::encode(salted), hex::encode(salt.as_bytes()))
                }
                Strategy::Adaptive => encoded.clone(),
            };
            StrategyRow {
                strategy,
                stored,
                acceptable: strategy.is_acceptable(),
                weakness: strategy.weakness(),
            }
        })
        .collect();

    if ctx.is_text() {
        println!("{}", style("=== Password Storage ===").cyan().bold());
        println!();
        for row in &rows {
            let verdict = if row.acceptable {
                style("ok ").green().bold()
            } else {
                style("bad").red().bold()
            };
            println!("[{verdict}] {}", style(row.strategy.name()).bold());
            println!("      {}", row.strategy.summary());
            println!("      stored: {}", row.stored);
            if let Some(weakness) = row.weakness {
                println!("      weakness: {}", style(weakness).yellow());
            }
            println!();
        }
        let check = if round_trip {
            style("matches").green().bold()
        } else {
            style("does not match").red().bold()
        };
        println!("adaptive verification round-trip: {check}");
    } else {
        let report = PasswordsReport {
            lesson: "password-storage",
            iterations: args.iterations,
            strategies: rows,
            adaptive_round_trip: round_trip,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn run_verify(ctx: &OutputContext, plaintext: &str, encoded: &str) -> Result<()> {
    let matches = verify_adaptive(plaintext.as_bytes(), encoded)
        .context("Failed to verify encoded hash")?;

    if ctx.is_text() {
        if matches {
            println!("{}", style("Password matches!").green().bold());
        } else {
            println!("{}", style("Invalid password!").red().bold());
        }
    } else {
        let report = VerifyReport {
            lesson: "password-verify",
            matches,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
