// SPDX-License-Identifier: Apache-2.0

//! SQL injection lesson output.

use anyhow::Result;
use console::style;
use pitfall_core::{ParameterizedQuery, login_query};
use serde::Serialize;

use crate::cli::OutputContext;

/// The classic tautology payload used as the hostile demo input.
const HOSTILE_USERNAME: &str = "' OR '1'='1";

#[derive(Serialize)]
struct InjectionReport<'a> {
    lesson: &'static str,
    hostile_username: &'a str,
    query: &'a ParameterizedQuery,
    preview: String,
}

/// Runs the SQL injection lesson.
pub fn run(ctx: &OutputContext) -> Result<()> {
    let query = login_query(HOSTILE_USERNAME, "password");

    if ctx.is_text() {
        println!("{}", style("=== SQL Injection ===").cyan().bold());
        println!();
        println!(
            "{} string-built SQL lets input become syntax:",
            style("vulnerable:").red().bold()
        );
        println!(
            "  SELECT * FROM users WHERE username = '{HOSTILE_USERNAME}' AND password = '...'"
        );
        println!("  the quote in the input closes the literal; the OR makes the filter true");
        println!();
        println!(
            "{} the template is fixed, values are bound by the driver:",
            style("hardened:").green().bold()
        );
        println!("  {}", query.preview());
        println!();
    } else {
        let report = InjectionReport {
            lesson: "sql-injection",
            hostile_username: HOSTILE_USERNAME,
            preview: query.preview(),
            query: &query,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
