//! The remote listing seam and the monitor error type.

use async_trait::async_trait;
use thiserror::Error;

use riffle_types::MessagePage;

/// Result type for monitor operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors that can occur while retrieving job messages.
///
/// Only genuine transport/protocol failures surface here. Data-quality
/// irregularities (missing text, unparseable timestamps, unrecognized
/// importance or state strings) are absorbed locally with documented
/// fallbacks and never become errors.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Network-level failure while issuing a page request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with something the client cannot use.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors from a transport implementation.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// The remote job-message listing endpoint.
///
/// One call fetches one page of messages for a job, optionally resuming from
/// a continuation token. The endpoint is idempotent and safely retriable at
/// the page level, but this layer never retries — callers that want retry on
/// transient failures layer it on top of their implementation.
///
/// The construction and authentication of the underlying client is the
/// implementor's concern; the monitor treats it as opaque.
#[async_trait]
pub trait JobMessagesApi: Send + Sync {
    /// Fetch one page of messages for `job_id` in `project_id`.
    ///
    /// `page_token` is `None` for the first request of a sweep and the
    /// previous response's continuation token afterwards.
    async fn list_page(
        &self,
        project_id: &str,
        job_id: &str,
        page_token: Option<&str>,
    ) -> MonitorResult<MessagePage>;
}
