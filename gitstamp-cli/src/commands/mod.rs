//! gitstamp command implementations.
//!
//! Each subcommand is implemented in its own module and delegates
//! to gitstamp-core for the actual work.

pub mod fingerprint;
pub mod history;
pub mod resolve;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gitstamp_core::{ContentUnit, GitCli, HistoryOptions};

use crate::output::Output;
use crate::paths::collect_paths;

/// Shared state for every command.
pub struct Context {
    pub git: GitCli,
    /// Directory the user ran gitstamp from.
    pub cwd: PathBuf,
    /// Directory git runs in (`-C`, defaults to `cwd`).
    pub repo_dir: PathBuf,
    pub output: Output,
}

/// Source paths of one content unit.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Source files of the content unit (e.g. a page and its translations)
    #[clap(required_unless_present = "stdin")]
    pub paths: Vec<PathBuf>,

    /// Read source paths from stdin, one per line
    #[clap(long)]
    pub stdin: bool,
}

impl SourceArgs {
    pub fn unit(self, ctx: &Context) -> Result<ContentUnit> {
        let paths = collect_paths(self.paths, self.stdin, &ctx.cwd)?;
        Ok(ContentUnit::new(paths)?)
    }
}

/// Options for the history query.
#[derive(Debug, Default, Args)]
pub struct HistoryArgs {
    /// Follow the file across renames (single path only)
    #[clap(long)]
    pub follow_renames: bool,

    /// Rename similarity threshold in percent (0-100)
    #[clap(long)]
    pub rename_threshold: Option<i64>,
}

impl HistoryArgs {
    pub fn options(&self) -> HistoryOptions {
        let opts = HistoryOptions {
            follow_renames: self.follow_renames,
            rename_threshold: None,
        };
        match self.rename_threshold {
            Some(threshold) => opts.with_rename_threshold(threshold),
            None => opts,
        }
    }
}
