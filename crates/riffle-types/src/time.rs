//! Wire timestamp decoding.
//!
//! The listing endpoint sends timestamps as a seconds/nanos pair where the
//! seconds are a decimal string. Either field — or the whole pair — may be
//! absent, and the format has changed before. Decoding therefore never fails:
//! anything the codec cannot make sense of becomes [`MessageTime::Unknown`],
//! and every consumer is forced to handle that case explicitly.

use std::fmt;

use chrono::{DateTime, LocalResult, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A timestamp as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireTimestamp {
    /// Whole seconds since the Unix epoch, as a decimal string.
    pub seconds: Option<String>,
    /// Sub-second nanoseconds, 0..1_000_000_000.
    pub nanos: Option<i64>,
}

impl WireTimestamp {
    /// Build a well-formed wire timestamp. Mostly useful for tests and fakes.
    pub fn new(seconds: i64, nanos: i64) -> Self {
        Self {
            seconds: Some(seconds.to_string()),
            nanos: Some(nanos),
        }
    }
}

/// A decoded message time.
///
/// `Unknown` is a normal value, not an error: the fetcher drops such messages
/// (they cannot be proven newer than a checkpoint) while the console sink
/// renders them with a sentinel prefix. The two policies differ on purpose,
/// which is why this is a sum type rather than a bare `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTime {
    Known(DateTime<Utc>),
    Unknown,
}

impl MessageTime {
    /// Decode a wire timestamp.
    ///
    /// Absent input, a missing or unparseable seconds field, or out-of-range
    /// nanos all yield `Unknown`.
    pub fn decode(wire: Option<&WireTimestamp>) -> MessageTime {
        let Some(wire) = wire else {
            return MessageTime::Unknown;
        };
        let Some(seconds) = wire.seconds.as_deref() else {
            return MessageTime::Unknown;
        };
        let Ok(seconds) = seconds.trim().parse::<i64>() else {
            return MessageTime::Unknown;
        };
        let nanos = wire.nanos.unwrap_or(0);
        if !(0..1_000_000_000).contains(&nanos) {
            return MessageTime::Unknown;
        }
        match Utc.timestamp_opt(seconds, nanos as u32) {
            LocalResult::Single(time) => MessageTime::Known(time),
            _ => MessageTime::Unknown,
        }
    }

    /// True if the timestamp decoded successfully.
    pub fn is_known(&self) -> bool {
        matches!(self, MessageTime::Known(_))
    }

    /// The decoded time, if there is one.
    pub fn known(&self) -> Option<DateTime<Utc>> {
        match self {
            MessageTime::Known(time) => Some(*time),
            MessageTime::Unknown => None,
        }
    }
}

impl fmt::Display for MessageTime {
    /// Canonical rendering: RFC 3339 in UTC for known times.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageTime::Known(time) => {
                write!(f, "{}", time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            MessageTime::Unknown => write!(f, "UNKNOWN TIMESTAMP"),
        }
    }
}
