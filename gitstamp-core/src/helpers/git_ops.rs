//! Git invocation.
//!
//! The `GitOps` trait is the seam between history extraction and the git
//! tool. `GitCli` runs the system `git` binary; tests substitute scripted
//! implementations.
//!
//! Invocation failures are never retried: a missing binary, a path outside
//! the repository, or a directory that is not a repository will fail the
//! same way every time.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::types::{GitstampError, Result};

/// Trait for running git subcommands.
pub trait GitOps: Send + Sync {
    /// Run `git <args> -- <paths>` and return stdout with trailing
    /// whitespace removed.
    ///
    /// # Errors
    ///
    /// * `Invocation` - git could not be spawned or exited non-zero; the
    ///   message carries git's stderr
    fn run(&self, args: &[&str], paths: &[PathBuf]) -> Result<String>;

    /// Get the backend name for logging.
    fn backend_name(&self) -> &'static str;
}

/// Git operations using the system `git` CLI.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
            work_dir: None,
        }
    }
}

impl GitCli {
    /// Run git in the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git as if started in `dir` (`git -C <dir>`).
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Use a different git executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }
}

impl GitOps for GitCli {
    fn run(&self, args: &[&str], paths: &[PathBuf]) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = &self.work_dir {
            cmd.arg("-C").arg(dir);
        }
        cmd.args(args);
        if !paths.is_empty() {
            cmd.arg("--").args(paths);
        }
        log::debug!("running git {} -- {:?}", args.join(" "), paths);

        let output = cmd
            .output()
            .map_err(|e| GitstampError::invocation(args.join(" "), format!("failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitstampError::invocation(args.join(" "), stderr.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }

    fn backend_name(&self) -> &'static str {
        "cli"
    }
}
