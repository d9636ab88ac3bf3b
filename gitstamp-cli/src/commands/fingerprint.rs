//! gitstamp fingerprint command.

use anyhow::Result;
use gitstamp_core::{fingerprint, history};
use serde::Serialize;

use super::{Context, HistoryArgs, SourceArgs};

#[derive(Serialize)]
struct FingerprintOutput {
    fingerprint: String,
    entries: usize,
}

/// Run the fingerprint command.
pub fn run(ctx: &Context, history_args: HistoryArgs, sources: SourceArgs) -> Result<()> {
    let unit = sources.unit(ctx)?;
    let h = history(&ctx.git, &unit, &history_args.options())?;
    let report = FingerprintOutput {
        fingerprint: fingerprint(&h),
        entries: h.len(),
    };
    ctx.output.emit(&report, |r| r.fingerprint.clone())
}
