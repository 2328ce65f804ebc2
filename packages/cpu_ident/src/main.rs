#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the `cpu_ident` tool.
//!
//! The process exit code is the classification code of the processor that the tool ran on
//! (0 if unrecognized). See the library documentation for the meaning of the codes.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::io;
use std::process::ExitCode;

use argh::FromArgs;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Identify the current processor and exit with its classification code.
#[derive(Debug, FromArgs)]
struct Args {
    /// also log the raw register values and decoded fields
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// do not log anything
    #[argh(switch, short = 'q')]
    quiet: bool,

    /// print a one-line summary of the classification to stdout
    #[argh(switch)]
    describe: bool,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let args: Args = argh::from_env();

    if !args.quiet {
        init_logging(args.verbose);
    }

    let classification = cpu_ident::classify();
    classification.log();

    if args.describe {
        println!("{classification}");
    }

    // Every classification code fits in the exit code range.
    u8::try_from(classification.code()).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // RUST_LOG overrides the default level if set.
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
