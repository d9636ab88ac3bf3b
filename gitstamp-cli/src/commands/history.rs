//! gitstamp history command.

use anyhow::Result;
use chrono::{Local, TimeZone};
use gitstamp_core::{fingerprint, history, TimestampEntry};
use serde::Serialize;

use super::{Context, HistoryArgs, SourceArgs};

#[derive(Serialize)]
struct HistoryOutput {
    entries: Vec<EntryOutput>,
    fingerprint: String,
}

#[derive(Serialize)]
struct EntryOutput {
    instant: i64,
    datetime: String,
    /// `None` for the working-tree entry.
    commit_message: Option<String>,
}

fn render_local(instant: i64) -> String {
    Local
        .timestamp_opt(instant, 0)
        .single()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| instant.to_string())
}

impl From<&TimestampEntry> for EntryOutput {
    fn from(entry: &TimestampEntry) -> Self {
        Self {
            instant: entry.instant,
            datetime: render_local(entry.instant),
            commit_message: entry.commit_message.clone(),
        }
    }
}

impl HistoryOutput {
    fn human(&self) -> String {
        if self.entries.is_empty() {
            return "No history".to_string();
        }
        self.entries
            .iter()
            .map(|e| {
                let summary = match &e.commit_message {
                    Some(message) => message.lines().next().unwrap_or("").to_string(),
                    None => "(working tree)".to_string(),
                };
                format!("{}  {}", e.datetime, summary)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Run the history command.
pub fn run(ctx: &Context, history_args: HistoryArgs, sources: SourceArgs) -> Result<()> {
    let unit = sources.unit(ctx)?;
    let h = history(&ctx.git, &unit, &history_args.options())?;
    let report = HistoryOutput {
        entries: h.iter().map(EntryOutput::from).collect(),
        fingerprint: fingerprint(&h),
    };
    ctx.output.emit(&report, HistoryOutput::human)
}
