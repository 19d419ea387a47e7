//! Job state vocabulary and status message types.

use serde::{Deserialize, Serialize};

use crate::time::WireTimestamp;

/// One status event emitted by a remote job.
///
/// Wire-faithful: every field may be absent, and importance strings outside
/// the known vocabulary are preserved as-is. Messages are never mutated after
/// construction; filtering and classification happen downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobMessage {
    /// Human-readable message body.
    pub message_text: Option<String>,
    /// Severity, e.g. `JOB_MESSAGE_ERROR`. See [`importance`].
    pub message_importance: Option<String>,
    /// When the service recorded the event.
    pub time: Option<WireTimestamp>,
}

impl JobMessage {
    /// Build a fully-populated message. Mostly useful for tests and fakes.
    pub fn new(
        text: impl Into<String>,
        importance: impl Into<String>,
        time: Option<WireTimestamp>,
    ) -> Self {
        Self {
            message_text: Some(text.into()),
            message_importance: Some(importance.into()),
            time,
        }
    }
}

/// One listing round-trip's worth of messages plus an optional continuation
/// token. Pages are consumed as they arrive and never retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessagePage {
    pub messages: Option<Vec<JobMessage>>,
    pub next_page_token: Option<String>,
}

/// Message importance strings the service emits.
pub mod importance {
    pub const ERROR: &str = "JOB_MESSAGE_ERROR";
    pub const WARNING: &str = "JOB_MESSAGE_WARNING";
    pub const DETAILED: &str = "JOB_MESSAGE_DETAILED";
}

/// Lifecycle state of a remote job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobState {
    Unknown,
    Stopped,
    Running,
    Done,
    Failed,
    Cancelled,
}

impl JobState {
    /// Map a remote state string to the closed enum.
    ///
    /// Anything outside the fixed vocabulary — including states added to the
    /// service after this client shipped — funnels to `Unknown`. The mapping
    /// is intentionally lossy in that direction and never errors.
    pub fn from_remote(name: &str) -> JobState {
        match name {
            "JOB_STATE_UNKNOWN" => JobState::Unknown,
            "JOB_STATE_STOPPED" => JobState::Stopped,
            "JOB_STATE_RUNNING" => JobState::Running,
            "JOB_STATE_DONE" => JobState::Done,
            "JOB_STATE_FAILED" => JobState::Failed,
            "JOB_STATE_CANCELLED" => JobState::Cancelled,
            _ => JobState::Unknown,
        }
    }

    /// True once the job can no longer make progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Done | JobState::Failed | JobState::Cancelled)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::Unknown => write!(f, "Unknown"),
            JobState::Stopped => write!(f, "Stopped"),
            JobState::Running => write!(f, "Running"),
            JobState::Done => write!(f, "Done"),
            JobState::Failed => write!(f, "Failed"),
            JobState::Cancelled => write!(f, "Cancelled"),
        }
    }
}
