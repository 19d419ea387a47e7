//! Message sinks: consumers of a retrieved message batch.

use std::io::{self, Write};

use riffle_types::{importance, JobMessage, MessageTime};

/// A consumer of job message batches.
///
/// The monitor hands each retrieved batch to a sink; the console renderer
/// below is the reference implementation, and alternate sinks (structured-log
/// emitters, UI feeds, capturing sinks in tests) implement the same trait.
pub trait MessageSink {
    /// Consume one batch of messages.
    ///
    /// Implementations may buffer internally but must have fully presented
    /// the batch by the time this returns.
    fn process(&mut self, messages: &[JobMessage]) -> io::Result<()>;
}

/// Renders messages one per line on a writer.
///
/// Line format: a timestamp prefix (the RFC 3339 time, or the literal
/// `UNKNOWN TIMESTAMP`), `": "`, a fixed-width severity label, then the
/// message text. Messages with no text, or with an importance outside
/// error/warning/detail, are skipped entirely rather than rendered with a
/// generic label. Output is flushed once per batch, never per message.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    /// A sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back, e.g. to inspect captured output in tests.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn severity_label(importance: &str) -> Option<&'static str> {
    match importance {
        importance::ERROR => Some("Error:   "),
        importance::WARNING => Some("Warning: "),
        importance::DETAILED => Some("Detail:  "),
        _ => None,
    }
}

impl<W: Write> MessageSink for ConsoleSink<W> {
    fn process(&mut self, messages: &[JobMessage]) -> io::Result<()> {
        for message in messages {
            let Some(text) = message.message_text.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            let Some(label) = message
                .message_importance
                .as_deref()
                .and_then(severity_label)
            else {
                continue;
            };
            let time = MessageTime::decode(message.time.as_ref());
            writeln!(self.out, "{time}: {label}{text}")?;
        }
        self.out.flush()
    }
}
