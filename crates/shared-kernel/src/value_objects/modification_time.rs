// crates/shared-kernel/src/value_objects/modification_time.rs
use std::{fmt, time::SystemTime};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last-modified timestamp of a file.
///
/// Missing files are represented by [`ModificationTime::absent`], the Unix
/// epoch, so any real file compares as newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ModificationTime(DateTime<Utc>);

impl ModificationTime {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self(timestamp)
    }

    /// Sentinel used for a file that does not exist.
    pub fn absent() -> Self {
        Self(DateTime::<Utc>::from(SystemTime::UNIX_EPOCH))
    }

    pub fn is_absent(&self) -> bool {
        *self == Self::absent()
    }
}

impl From<DateTime<Utc>> for ModificationTime {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self::new(timestamp)
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self::new(DateTime::<Utc>::from(time))
    }
}

impl From<Option<ModificationTime>> for ModificationTime {
    fn from(time: Option<ModificationTime>) -> Self {
        time.unwrap_or_else(Self::absent)
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}
