//! High-level gitstamp operations.

pub mod cached;
pub mod dependency;
pub mod field;
pub mod history;
pub mod resolve;

pub use cached::resolve_cached;
pub use dependency::ContentDependency;
pub use field::{field_value, parse_datetime};
pub use history::history;
pub use resolve::{resolve, resolve_timestamp, select, select_entry};
