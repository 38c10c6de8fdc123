// SPDX-License-Identifier: Apache-2.0

//! Cross-site scripting lesson output.

use anyhow::Result;
use console::style;
use pitfall_core::render_comment;
use serde::Serialize;

use crate::cli::OutputContext;

/// The hostile demo input every XSS writeup uses.
const HOSTILE_INPUT: &str = "<script>alert('Hacked!');</script>";

#[derive(Serialize)]
struct XssReport {
    lesson: &'static str,
    hostile_input: &'static str,
    rendered: String,
}

/// Runs the XSS lesson.
pub fn run(ctx: &OutputContext) -> Result<()> {
    let rendered = render_comment(HOSTILE_INPUT);

    if ctx.is_text() {
        println!(
            "{}",
            style("=== Cross-Site Scripting (XSS) ===").cyan().bold()
        );
        println!();
        println!(
            "{} interpolating input into markup ships it as HTML:",
            style("vulnerable:").red().bold()
        );
        println!("  <div>{HOSTILE_INPUT}</div>");
        println!("  the script tag executes in every visitor's browser");
        println!();
        println!(
            "{} escape first, then interpolate:",
            style("hardened:").green().bold()
        );
        println!("  {rendered}");
        println!();
    } else {
        let report = XssReport {
            lesson: "xss",
            hostile_input: HOSTILE_INPUT,
            rendered,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
