//! Test repository utilities.

use std::path::{Path, PathBuf};

use filetime::FileTime;
use fs_err as fs;
use fs_err::OpenOptions;
use git2::{Commit, Repository, Signature, Time};
use gitstamp_core::GitCli;
use std::io::Write;
use tempfile::TempDir;

/// Author time of the empty commit every repository starts with.
pub const INITIAL_COMMIT_TIME: i64 = 1_500_000_000;

/// A temporary git repository.
///
/// The repository starts with one empty commit so that `git log` has a
/// HEAD to walk. It is deleted when dropped.
pub struct TestRepo {
    /// Temporary directory containing the repo.
    _temp: TempDir,
    /// Canonical path to the repository root.
    root: PathBuf,
    repo: Repository,
}

impl TestRepo {
    /// Create a new repository with an initial empty commit.
    pub fn new() -> Result<Self, TestRepoError> {
        let temp = TempDir::new()?;
        let root = fs::canonicalize(temp.path())?;
        let repo = Repository::init(&root)?;
        {
            let mut config = repo.config()?;
            config.set_str("user.name", "gitstamp")?;
            config.set_str("user.email", "gitstamp@example.com")?;
        }

        let test_repo = Self {
            _temp: temp,
            root,
            repo,
        };
        test_repo.commit_index(INITIAL_COMMIT_TIME, "initial")?;
        Ok(test_repo)
    }

    /// Get the repository root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the absolute path for a relative path.
    pub fn path(&self, rel_path: &str) -> PathBuf {
        self.root.join(rel_path)
    }

    /// A git adapter running in this repository.
    pub fn git(&self) -> GitCli {
        GitCli::in_dir(&self.root)
    }

    /// Create the file if needed and optionally set its mtime.
    pub fn touch(&self, rel_path: &str, mtime: Option<i64>) -> Result<PathBuf, TestRepoError> {
        let path = self.path(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            fs::write(&path, b"")?;
        }
        if let Some(ts) = mtime {
            filetime::set_file_mtime(&path, FileTime::from_unix_time(ts, 0))?;
        }
        Ok(path)
    }

    /// Append a line to the file, creating it if needed.
    pub fn modify(&self, rel_path: &str) -> Result<PathBuf, TestRepoError> {
        let path = self.touch(rel_path, None)?;
        let mut file = OpenOptions::new().append(true).open(&path)?;
        writeln!(file, "changed")?;
        Ok(path)
    }

    /// Modify `rel_path` and commit it with the given author time.
    pub fn commit(&self, rel_path: &str, ts: i64, message: &str) -> Result<(), TestRepoError> {
        self.commit_files(&[rel_path], ts, message)
    }

    /// Modify every file in `rel_paths` and commit them together.
    pub fn commit_files(&self, rel_paths: &[&str], ts: i64, message: &str) -> Result<(), TestRepoError> {
        let mut index = self.repo.index()?;
        for rel_path in rel_paths {
            self.modify(rel_path)?;
            index.add_path(Path::new(rel_path))?;
        }
        index.write()?;
        self.commit_index(ts, message)
    }

    /// Rename a tracked file and commit the move.
    pub fn rename(&self, from: &str, to: &str, ts: i64, message: &str) -> Result<(), TestRepoError> {
        let target = self.path(to);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(self.path(from), &target)?;
        let mut index = self.repo.index()?;
        index.remove_path(Path::new(from))?;
        index.add_path(Path::new(to))?;
        index.write()?;
        self.commit_index(ts, message)
    }

    fn commit_index(&self, ts: i64, message: &str) -> Result<(), TestRepoError> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = Signature::new("gitstamp", "gitstamp@example.com", &Time::new(ts, 0))?;
        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&Commit> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        Ok(())
    }
}

/// Error type for TestRepo operations.
#[derive(Debug)]
pub enum TestRepoError {
    /// I/O error.
    Io(std::io::Error),
    /// Git error.
    Git(git2::Error),
}

impl std::fmt::Display for TestRepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestRepoError::Io(e) => write!(f, "I/O error: {}", e),
            TestRepoError::Git(e) => write!(f, "Git error: {}", e),
        }
    }
}

impl std::error::Error for TestRepoError {}

impl From<std::io::Error> for TestRepoError {
    fn from(e: std::io::Error) -> Self {
        TestRepoError::Io(e)
    }
}

impl From<git2::Error> for TestRepoError {
    fn from(e: git2::Error) -> Self {
        TestRepoError::Git(e)
    }
}
