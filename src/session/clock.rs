use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Local};

use crate::domain::EntryStamp;

/// Default display date, matching a US short locale date (`3/14/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Source of the current instant for stamping new entries.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Issues ids and timestamps that strictly increase within a session.
///
/// Ids are the millisecond timestamp rendered as a string. When the clock has not
/// advanced since the previous stamp (or runs behind a loaded entry), the timestamp
/// is bumped to one past the last issued value so two entries never share an id.
pub struct EntryStamper {
    clock: Box<dyn Clock>,
    date_format: String,
    last_issued: Option<i64>,
}

impl EntryStamper {
    pub fn new(clock: Box<dyn Clock>, date_format: impl Into<String>) -> Self {
        Self {
            clock,
            date_format: date_format.into(),
            last_issued: None,
        }
    }

    /// Records an existing timestamp so later stamps sort after it.
    pub fn observe(&mut self, timestamp: i64) {
        self.last_issued = Some(self.last_issued.map_or(timestamp, |last| last.max(timestamp)));
    }

    pub fn next_stamp(&mut self) -> EntryStamp {
        let now = self.clock.now();
        let mut timestamp = now.timestamp_millis();
        if let Some(last) = self.last_issued {
            if timestamp <= last {
                timestamp = last.saturating_add(1);
            }
        }
        self.last_issued = Some(timestamp);
        EntryStamp {
            id: timestamp.to_string(),
            timestamp,
            date: self.format_date(&now),
        }
    }

    fn format_date(&self, now: &DateTime<FixedOffset>) -> String {
        let mut date = String::new();
        if write!(date, "{}", now.format(&self.date_format)).is_ok() {
            return date;
        }
        tracing::warn!(
            format = %self.date_format,
            "invalid date format, using default"
        );
        now.format(DEFAULT_DATE_FORMAT).to_string()
    }
}
