//! stderr diagnostics for a post-copy run.
//!
//! stdout carries the progress lines a user reads; everything here goes to
//! stderr so `postcopy pkg > log.txt` stays readable and `-vv` never mixes
//! rule names into the progress output.
//!
//! | Flag(s)   | Shows                                   |
//! |-----------|-----------------------------------------|
//! | `-q`      | errors only                             |
//! | (none)    | warnings                                |
//! | `-v`      | each file rewritten or removed          |
//! | `-vv`     | each pyproject rule that fired          |
//! | `-vvv`    | each filesystem call, with its target   |
//!
//! `RUST_LOG` replaces the filter entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Target prefix shared by the binary, `postcopy_core` and
/// `postcopy_adapters`; one directive covers all three.
const LOG_TARGET: &str = "postcopy";

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    // A run lasts well under a second: timestamps are noise. Targets only
    // help once filesystem calls from both library crates are interleaved.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(level == LevelFilter::TRACE)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn default_directive(level: LevelFilter) -> String {
    format!("{LOG_TARGET}={level}")
}
