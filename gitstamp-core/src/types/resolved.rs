//! Resolution outcome types.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Reason reported when no entry survives filtering.
pub const NO_SUITABLE_TIMESTAMP: &str = "no suitable git timestamp exists";

/// The result of resolving a content unit's timestamp.
///
/// `Missing` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedTimestamp {
    /// Unix epoch seconds.
    Instant { epoch: i64 },
    Missing { reason: String },
}

impl ResolvedTimestamp {
    pub fn instant(epoch: i64) -> Self {
        Self::Instant { epoch }
    }

    pub fn missing() -> Self {
        Self::Missing {
            reason: NO_SUITABLE_TIMESTAMP.to_string(),
        }
    }

    pub fn epoch(&self) -> Option<i64> {
        match self {
            Self::Instant { epoch } => Some(*epoch),
            Self::Missing { .. } => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.epoch()
            .and_then(|epoch| Utc.timestamp_opt(epoch, 0).single())
    }

    pub fn to_local(&self) -> Option<DateTime<Local>> {
        self.to_utc().map(|dt| dt.with_timezone(&Local))
    }
}

impl From<Option<i64>> for ResolvedTimestamp {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(epoch) => Self::instant(epoch),
            None => Self::missing(),
        }
    }
}

/// Value of a timestamp field: an explicit value wins over history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Value written by hand in the content source, local wall-clock time.
    Explicit(NaiveDateTime),
    /// Value derived from history.
    Resolved(ResolvedTimestamp),
}

impl FieldValue {
    /// The value as local wall-clock time, if there is one.
    pub fn to_naive_local(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Explicit(dt) => Some(*dt),
            FieldValue::Resolved(r) => r.to_local().map(|dt| dt.naive_local()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Resolved(r) if r.is_missing())
    }
}
