// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for the pitfall teaching CLI.
//!
//! Uses clap's derive API with one subcommand per lesson.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pitfall_core::password::DEFAULT_ITERATIONS;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
}

/// Global output configuration passed to commands.
#[derive(Clone, Copy)]
pub struct OutputContext {
    /// Output format (text or json)
    pub format: OutputFormat,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    #[must_use]
    pub fn from_cli(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns true if human-readable narration should be printed.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }
}

/// Pitfall - vulnerable vs hardened code, side by side.
#[derive(Parser)]
#[command(
    name = "pitfall",
    version,
    about = "Teaching CLI contrasting vulnerable and hardened code for SQL injection, XSS and password storage"
)]
pub struct Cli {
    /// Output format (text, json)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per lesson.
#[derive(Subcommand)]
pub enum Commands {
    /// Contrast string-built SQL with parameterized queries
    Injection,
    /// Contrast raw HTML interpolation with escaped output
    Xss,
    /// Walk the four password storage strategies, weakest to strongest
    Passwords(PasswordsArgs),
    /// Run every lesson in order with default settings
    All,
}

/// Options for the password storage lesson.
#[derive(Args)]
pub struct PasswordsArgs {
    /// Plaintext to run the strategies against
    #[arg(long, default_value = "password123")]
    pub plaintext: String,

    /// PBKDF2 iteration count for the salted KDF strategy
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Verify the plaintext against a previously produced encoded hash
    /// instead of running the walkthrough
    #[arg(long, value_name = "ENCODED")]
    pub verify: Option<String>,
}

impl Default for PasswordsArgs {
    fn default() -> Self {
        Self {
            plaintext: "password123".to_string(),
            iterations: DEFAULT_ITERATIONS,
            verify: None,
        }
    }
}
