//! `abet-scan`: drives the detection pipeline from the shell.
//!
//! Reports are printed as JSON on stdout; logs go to stderr.

pub mod args;

use crate::args::Commands;
use abet::detector::Detector;
use abet::kernel::context::AppContext;
use std::io::Write;
use tracing::debug;

/// Executes one subcommand against a bootstrapped context.
///
/// # Errors
/// Fails on unreadable input files, invalid request JSON, or output errors.
pub fn run(ctx: &AppContext, command: Commands, out: &mut impl Write) -> anyhow::Result<()> {
    let detector = ctx.try_get_slice::<Detector>()?;

    match command {
        Commands::Check(args) => {
            let request = args.into_request()?;
            debug!(
                url = %request.url,
                chars = request.text_content.chars().count(),
                "Checking page"
            );
            let report = detector.check(&request);
            writeln!(out, "{}", report.to_json()?)?;
        },
        Commands::Verify { url } => {
            let verification = detector.verify(&url);
            writeln!(out, "{}", serde_json::to_string_pretty(&verification)?)?;
        },
        Commands::Registry => {
            let snapshot = ctx.registry.snapshot();
            writeln!(
                out,
                "{} authorized domains from {}",
                snapshot.len(),
                ctx.registry.source_name()
            )?;
            if snapshot.is_empty() {
                // Re-read once to tell an empty list apart from an unavailable one.
                if let Err(err) = ctx.registry.try_load() {
                    writeln!(out, "registry unavailable ({}): {err}", err.reason())?;
                }
            }
            for domain in snapshot.sorted() {
                writeln!(out, "{domain}")?;
            }
        },
    }

    Ok(())
}
