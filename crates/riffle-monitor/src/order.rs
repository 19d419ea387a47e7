//! Chronological ordering for job messages.

use std::cmp::Ordering;

use riffle_types::{JobMessage, MessageTime};

/// Compare two messages by decoded timestamp, ascending.
///
/// A message without a usable timestamp sorts before any message with one —
/// "as early as possible", never nulls-last. Two such messages compare equal,
/// so a stable sort keeps their original relative order.
pub fn compare_by_time(a: &JobMessage, b: &JobMessage) -> Ordering {
    let ta = MessageTime::decode(a.time.as_ref());
    let tb = MessageTime::decode(b.time.as_ref());
    match (ta, tb) {
        (MessageTime::Unknown, MessageTime::Unknown) => Ordering::Equal,
        (MessageTime::Unknown, _) => Ordering::Less,
        (_, MessageTime::Unknown) => Ordering::Greater,
        (MessageTime::Known(ta), MessageTime::Known(tb)) => ta.cmp(&tb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riffle_types::WireTimestamp;

    fn at(seconds: i64) -> JobMessage {
        JobMessage::new(
            format!("t={seconds}"),
            "JOB_MESSAGE_DETAILED",
            Some(WireTimestamp::new(seconds, 0)),
        )
    }

    fn untimed(text: &str) -> JobMessage {
        JobMessage::new(text, "JOB_MESSAGE_DETAILED", None)
    }

    #[test]
    fn sorts_known_timestamps_ascending() {
        let mut messages = vec![at(5), at(2), at(8)];
        messages.sort_by(compare_by_time);
        let texts: Vec<_> = messages
            .iter()
            .map(|m| m.message_text.as_deref().unwrap())
            .collect();
        assert_eq!(texts, ["t=2", "t=5", "t=8"]);
    }

    #[test]
    fn unknown_sorts_first() {
        // Documented scenario: [t=5, t=?, t=2] -> [t=?, t=2, t=5]
        let mut messages = vec![at(5), untimed("?"), at(2)];
        messages.sort_by(compare_by_time);
        let texts: Vec<_> = messages
            .iter()
            .map(|m| m.message_text.as_deref().unwrap())
            .collect();
        assert_eq!(texts, ["?", "t=2", "t=5"]);
    }

    #[test]
    fn multiple_unknowns_keep_relative_order() {
        let mut messages = vec![at(5), untimed("first"), at(2), untimed("second"), at(8)];
        messages.sort_by(compare_by_time);
        let texts: Vec<_> = messages
            .iter()
            .map(|m| m.message_text.as_deref().unwrap())
            .collect();
        assert_eq!(texts, ["first", "second", "t=2", "t=5", "t=8"]);
    }

    #[test]
    fn malformed_timestamp_is_treated_as_unknown() {
        let mut garbled = untimed("garbled");
        garbled.time = Some(WireTimestamp {
            seconds: Some("soon".to_string()),
            nanos: None,
        });
        let mut messages = vec![at(3), garbled];
        messages.sort_by(compare_by_time);
        assert_eq!(messages[0].message_text.as_deref(), Some("garbled"));
    }
}
