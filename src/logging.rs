// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Diagnostic logging for the solution binaries
//!
//! Logs are written to stderr, leaving stdout for the answers themselves.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the log filter, e.g. `ADVENT_LOG=advent2023=trace`
pub const LOG_ENV: &str = "ADVENT_LOG";

/// The default filter directive for a given number of `-v` flags
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "advent2023=warn,day1=warn,day2=warn,day3=warn",
        1 => "advent2023=info,day1=info,day2=info,day3=info",
        2 => "advent2023=debug,day1=debug,day2=debug,day3=debug",
        _ => "advent2023=trace,day1=trace,day2=trace,day3=trace",
    }
}

/// Install the global logger.
///
/// The filter comes from [`LOG_ENV`] if it's set and valid, and from `verbosity` otherwise. Calling
/// this more than once is harmless; only the first call installs anything.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // fails only if a logger was already installed
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
