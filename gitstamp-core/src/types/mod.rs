//! Core type definitions for gitstamp.

mod config;
mod error;
mod history;
mod policy;
mod resolved;

pub use config::{find_repo_root, Config, FieldConfig, CONFIG_FILE_NAME};
pub use error::{GitstampError, Result};
pub use history::{ContentUnit, History, TimestampEntry};
pub use policy::{bool_from_string, HistoryOptions, SelectionPolicy, Strategy};
pub use resolved::{FieldValue, ResolvedTimestamp, NO_SUITABLE_TIMESTAMP};
