//! Log record construction and wire shape.

use crate::{Identity, Level};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

/// Wall-clock format stamped into `time`, second precision.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reserved `meta` key the category is injected under.
pub const META_CATEGORY_KEY: &str = "cate";

/// Placeholder used when the caller location cannot be resolved.
const UNRESOLVED_LOCATION: &str = "???:0";

/// A single structured log event, fully populated at build time and
/// serialized exactly once.
///
/// Field order here is wire order: `time`, `level`, `msg`, `cate`, `sys`,
/// `meta`, `file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Local wall-clock time, formatted per [`TIME_FORMAT`].
    pub time: String,
    /// Severity.
    pub level: Level,
    /// Caller-supplied free-text message.
    pub msg: String,
    /// Caller-supplied category.
    pub cate: String,
    /// Shared process identity at build time.
    pub sys: Arc<Identity>,
    /// Free-form metadata; always carries the category under
    /// [`META_CATEGORY_KEY`].
    pub meta: Map<String, Value>,
    /// `basename:line` of the application call site.
    pub file: String,
}

impl Record {
    /// Build a fully populated record.
    ///
    /// Merges `cate` into `meta` under [`META_CATEGORY_KEY`], overwriting any
    /// caller-supplied value there, stamps the current wall-clock time, and
    /// formats the caller location (`"???:0"` when unavailable). The record
    /// is not written anywhere.
    #[must_use]
    pub fn build(
        level: Level,
        cate: &str,
        msg: &str,
        meta: Option<Map<String, Value>>,
        sys: Arc<Identity>,
        location: Option<&Location<'_>>,
    ) -> Self {
        let mut meta = meta.unwrap_or_default();
        meta.insert(
            META_CATEGORY_KEY.to_string(),
            Value::String(cate.to_string()),
        );

        Self {
            time: Local::now().format(TIME_FORMAT).to_string(),
            level,
            msg: msg.to_string(),
            cate: cate.to_string(),
            sys,
            meta,
            file: location.map_or_else(|| UNRESOLVED_LOCATION.to_string(), format_location),
        }
    }

    /// Short alarm payload: `[<level>-<cate>]-<msg>`.
    #[must_use]
    pub fn alarm_payload(&self) -> String {
        format!("[{}-{}]-{}", self.level, self.cate, self.msg)
    }
}

/// Truncate the caller's file path to its basename and join the line number.
fn format_location(location: &Location<'_>) -> String {
    let basename = Path::new(location.file())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("???");
    format!("{}:{}", basename, location.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(meta: Option<Map<String, Value>>) -> Record {
        Record::build(
            Level::Error,
            "db",
            "conn lost",
            meta,
            Arc::new(Identity::default()),
            Some(Location::caller()),
        )
    }

    #[test]
    fn category_is_injected_into_meta() {
        let record = build(None);
        assert_eq!(record.meta[META_CATEGORY_KEY], "db");
    }

    #[test]
    fn category_overwrites_caller_supplied_key() {
        let mut meta = Map::new();
        meta.insert(
            META_CATEGORY_KEY.to_string(),
            Value::String("smuggled".into()),
        );
        meta.insert("attempt".to_string(), Value::from(3));

        let record = build(Some(meta));
        assert_eq!(record.meta[META_CATEGORY_KEY], "db");
        assert_eq!(record.meta["attempt"], 3);
    }

    #[test]
    fn time_matches_second_precision_format() {
        let record = build(None);
        assert!(chrono::NaiveDateTime::parse_from_str(&record.time, TIME_FORMAT).is_ok());
    }

    #[test]
    fn location_is_basename_and_line() {
        let record = build(None);
        let (file, line) = record.file.split_once(':').unwrap();
        assert_eq!(file, "record.rs");
        assert!(line.parse::<u32>().unwrap() > 0);
    }

    #[test]
    fn missing_location_uses_sentinel() {
        let record = Record::build(
            Level::Info,
            "db",
            "msg",
            None,
            Arc::new(Identity::default()),
            None,
        );
        assert_eq!(record.file, "???:0");
    }

    #[test]
    fn alarm_payload_shape() {
        let record = build(None);
        assert_eq!(record.alarm_payload(), "[error-db]-conn lost");
    }

    #[test]
    fn wire_shape_has_expected_fields() {
        let record = build(None);
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        for key in ["time", "level", "msg", "cate", "sys", "meta", "file"] {
            assert!(object.contains_key(key), "missing field {key}");
        }
        assert_eq!(json["level"], "error");
        assert_eq!(json["sys"]["IP"], "");
        assert_eq!(json["meta"][META_CATEGORY_KEY], "db");
    }
}
