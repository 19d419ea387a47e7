//! Client-side monitoring for remote riffle jobs.
//!
//! A riffle job runs remotely for minutes or hours and emits status messages
//! as it goes. This crate retrieves those messages incrementally and gets them
//! in front of a human:
//!
//! - **JobMessagesApi**: the trait a transport implements to serve one listing
//!   page per call.
//! - **JobMonitor**: drives the pagination loop, filters by a checkpoint
//!   timestamp, and returns a chronologically sorted batch.
//! - **MessageSink**: a pluggable consumer for retrieved batches;
//!   `ConsoleSink` is the reference line-per-message renderer.
//!
//! # Example
//!
//! ```ignore
//! use riffle_monitor::{ConsoleSink, JobMonitor, MessageSink};
//!
//! let monitor = JobMonitor::new("my-project", transport);
//! let messages = monitor.job_messages("job-1", checkpoint).await?;
//! ConsoleSink::stdout().process(&messages)?;
//! // The caller owns checkpoint advancement between calls.
//! ```

mod api;
mod fetch;
mod order;
mod sink;
mod urls;

pub use api::{JobMessagesApi, MonitorError, MonitorResult};
pub use fetch::JobMonitor;
pub use order::compare_by_time;
pub use sink::{ConsoleSink, MessageSink};
pub use urls::{cancel_command, monitoring_page_url};
