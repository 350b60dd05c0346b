//! Severity levels and the shared minimum-level filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity of a log record, ordered by ascending rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Diagnostic detail for development.
    Debug,
    /// Routine operational events.
    Info,
    /// Normal but significant conditions.
    Notice,
    /// Conditions that may require attention.
    Warning,
    /// Runtime errors.
    Error,
    /// A component is unavailable or failed unexpectedly.
    Critical,
    /// Action must be taken immediately.
    Alert,
    /// The system is unusable.
    Emergency,
}

impl Level {
    /// All levels in ascending rank order.
    pub const ALL: [Self; 8] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
    ];

    /// Total-order rank used for filtering: 1 (debug) through 8 (emergency).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Debug => 1,
            Self::Info => 2,
            Self::Notice => 3,
            Self::Warning => 4,
            Self::Error => 5,
            Self::Critical => 6,
            Self::Alert => 7,
            Self::Emergency => 8,
        }
    }

    /// Lowercase name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Alert => "alert",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "alert" => Ok(Self::Alert),
            "emergency" => Ok(Self::Emergency),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Shared minimum-severity gate.
///
/// One handle is held by the [`Logger`](crate::Logger) for its setter and a
/// clone by the sink for its write-path gate, so a level change takes effect
/// on the very next write. Defaults to [`Level::Error`].
#[derive(Debug)]
pub struct LevelFilter {
    min_rank: AtomicU8,
}

impl LevelFilter {
    /// Create a filter admitting `min` and everything above it.
    #[must_use]
    pub fn new(min: Level) -> Self {
        Self {
            min_rank: AtomicU8::new(min.rank()),
        }
    }

    /// Set the minimum level by name. Unknown names are ignored.
    pub fn set(&self, name: &str) {
        if let Ok(level) = name.parse::<Level>() {
            self.set_level(level);
        }
    }

    /// Set the minimum level directly.
    pub fn set_level(&self, level: Level) {
        self.min_rank.store(level.rank(), Ordering::Relaxed);
    }

    /// Current minimum rank.
    #[must_use]
    pub fn min_rank(&self) -> u8 {
        self.min_rank.load(Ordering::Relaxed)
    }

    /// Whether a record at `level` passes the gate.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level.rank() >= self.min_rank()
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Level::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_ascending_and_dense() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.rank() as usize, i + 1);
        }
    }

    #[test]
    fn parse_round_trips_every_level() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("warn".parse::<Level>().is_err());
        assert!("ERROR".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Level::Emergency).unwrap(), "\"emergency\"");
        let level: Level = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(level, Level::Notice);
    }

    #[test]
    fn filter_defaults_to_error() {
        let filter = LevelFilter::default();
        assert!(!filter.enabled(Level::Debug));
        assert!(!filter.enabled(Level::Warning));
        assert!(filter.enabled(Level::Error));
        assert!(filter.enabled(Level::Emergency));
    }

    #[test]
    fn unknown_name_leaves_filter_unchanged() {
        let filter = LevelFilter::default();
        filter.set("verbose");
        assert_eq!(filter.min_rank(), Level::Error.rank());

        filter.set("debug");
        assert_eq!(filter.min_rank(), Level::Debug.rank());

        filter.set("chatty");
        assert_eq!(filter.min_rank(), Level::Debug.rank());
    }
}
