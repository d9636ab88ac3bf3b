//! gitstamp resolve command.

use anyhow::{anyhow, Result};
use chrono::{Local, TimeZone};
use clap::Args;
use gitstamp_core::types::CONFIG_FILE_NAME;
use gitstamp_core::{field_value, Config, FieldConfig, FieldValue, ResolvedTimestamp, Strategy};
use serde::Serialize;

use super::{Context, HistoryArgs, SourceArgs};

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Start from a field defined in gitstamp.toml
    #[clap(long)]
    pub field: Option<String>,

    /// first, earliest, latest or last
    #[clap(long)]
    pub strategy: Option<String>,

    /// Ignore commits whose message matches this regex
    #[clap(long)]
    pub ignore_commits: Option<String>,

    /// Disregard the chronologically first commit
    #[clap(long)]
    pub skip_first_commit: bool,

    /// Explicit field value; used as is when non-empty
    #[clap(long)]
    pub value: Option<String>,

    #[clap(flatten)]
    pub history: HistoryArgs,

    #[clap(flatten)]
    pub sources: SourceArgs,
}

impl ResolveArgs {
    /// The named field (or defaults) with command-line flags applied on top.
    fn field_config(&self, ctx: &Context) -> Result<FieldConfig> {
        let mut field = match &self.field {
            Some(name) => {
                let config = Config::find(&ctx.repo_dir)
                    .ok_or_else(|| anyhow!("No {} found for --field {}", CONFIG_FILE_NAME, name))??;
                config.require_field(name)?.clone()
            }
            None => FieldConfig::default(),
        };
        if let Some(strategy) = &self.strategy {
            field.strategy = strategy.parse::<Strategy>()?;
        }
        if let Some(pattern) = &self.ignore_commits {
            field.ignore_commits = Some(pattern.clone());
        }
        if self.skip_first_commit {
            field.skip_first_commit = true;
        }
        if self.history.follow_renames {
            field.follow_renames = true;
        }
        if let Some(threshold) = self.history.rename_threshold {
            field.follow_rename_threshold = Some(threshold);
        }
        Ok(field)
    }
}

/// JSON output for the resolve command.
#[derive(Debug, Serialize)]
struct ResolveOutput {
    /// "explicit" or "git"
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<String>,
}

impl From<&FieldValue> for ResolveOutput {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Explicit(dt) => ResolveOutput {
                source: "explicit",
                epoch: Local.from_local_datetime(dt).earliest().map(|d| d.timestamp()),
                datetime: Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
                missing: None,
            },
            FieldValue::Resolved(resolved) => ResolveOutput {
                source: "git",
                epoch: resolved.epoch(),
                datetime: resolved.to_local().map(|d| d.to_rfc3339()),
                missing: match resolved {
                    ResolvedTimestamp::Missing { reason } => Some(reason.clone()),
                    ResolvedTimestamp::Instant { .. } => None,
                },
            },
        }
    }
}

impl ResolveOutput {
    fn human(&self) -> String {
        match (&self.datetime, &self.missing) {
            (Some(datetime), _) => datetime.clone(),
            (None, Some(reason)) => format!("undefined ({})", reason),
            (None, None) => "undefined".to_string(),
        }
    }
}

/// Run the resolve command. A missing timestamp is not a failure.
pub fn run(ctx: &Context, args: ResolveArgs) -> Result<()> {
    let field = args.field_config(ctx)?;
    let policy = field.policy()?;
    let options = field.history_options();
    let unit = args.sources.unit(ctx)?;

    let value = field_value(args.value.as_deref(), &ctx.git, &unit, &policy, &options)?;
    let report = ResolveOutput::from(&value);
    ctx.output.emit(&report, ResolveOutput::human)
}
