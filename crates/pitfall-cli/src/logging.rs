// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the pitfall CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to
//! stderr. Log level is controlled via the `RUST_LOG` environment variable:
//!
//! ```bash
//! RUST_LOG=pitfall_core=debug pitfall passwords
//! ```
//!
//! Lesson output itself goes to stdout and is not routed through tracing.
//! Credential material (plaintexts, raw salts) is never logged.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::OutputFormat;

/// Initialize the logging subsystem.
///
/// Structured output formats suppress everything below error level so that
/// stdout stays machine-parseable and stderr stays quiet.
pub fn init_logging(format: OutputFormat) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = match format {
        OutputFormat::Json => "pitfall_cli=error,pitfall_core=error",
        OutputFormat::Text => "pitfall_cli=warn,pitfall_core=warn",
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
