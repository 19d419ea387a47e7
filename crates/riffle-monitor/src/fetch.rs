//! Paged retrieval of job messages.

use chrono::{DateTime, Utc};

use riffle_types::{JobMessage, MessageTime};

use crate::api::{JobMessagesApi, MonitorResult};
use crate::order::compare_by_time;

/// Incremental message retrieval for one project's jobs.
///
/// Each [`job_messages`](JobMonitor::job_messages) call is one bounded
/// pagination sweep, not a continuous monitor. Continuous monitoring is built
/// by the caller invoking it repeatedly with an advancing checkpoint; the
/// monitor itself keeps no state between calls and performs no deduplication
/// across them.
pub struct JobMonitor<A> {
    project_id: String,
    api: A,
}

impl<A: JobMessagesApi> JobMonitor<A> {
    /// Create a monitor for `project_id` backed by the given transport.
    pub fn new(project_id: impl Into<String>, api: A) -> Self {
        Self {
            project_id: project_id.into(),
            api,
        }
    }

    /// The project this monitor reads from.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Fetch all messages for `job_id` strictly after `since`, ascending by
    /// timestamp.
    ///
    /// Pages are requested sequentially until the server stops returning a
    /// continuation token or answers with no messages. Messages whose
    /// timestamp fails to decode are dropped: with no timestamp they can
    /// never be proven newer than the checkpoint. Any transport failure
    /// fails the whole call — no partial result is returned.
    ///
    /// Termination relies on the server eventually omitting the continuation
    /// token; there is no page-count bound.
    pub async fn job_messages(
        &self,
        job_id: &str,
        since: DateTime<Utc>,
    ) -> MonitorResult<Vec<JobMessage>> {
        let mut all: Vec<JobMessage> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;
        let mut dropped = 0usize;

        loop {
            let page = self
                .api
                .list_page(&self.project_id, job_id, page_token.as_deref())
                .await?;
            pages += 1;

            // No data is a normal empty result, not an error.
            let Some(messages) = page.messages else {
                break;
            };
            if messages.is_empty() {
                break;
            }

            for message in messages {
                match MessageTime::decode(message.time.as_ref()) {
                    MessageTime::Unknown => dropped += 1,
                    MessageTime::Known(time) if time > since => all.push(message),
                    MessageTime::Known(_) => {}
                }
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(
            job_id,
            pages,
            kept = all.len(),
            dropped,
            "fetched job messages"
        );

        all.sort_by(compare_by_time);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::TimeZone;

    use riffle_types::{MessagePage, WireTimestamp};

    use super::*;
    use crate::api::MonitorError;

    /// Scripted transport serving a fixed list of pages, addressed by
    /// continuation tokens that are page indices. Counts requests, and can be
    /// told to fail on the nth one.
    struct ScriptedApi {
        pages: Vec<MessagePage>,
        requests: AtomicUsize,
        fail_on_request: Option<usize>,
    }

    impl ScriptedApi {
        fn new(pages: Vec<MessagePage>) -> Self {
            Self {
                pages,
                requests: AtomicUsize::new(0),
                fail_on_request: None,
            }
        }

        fn failing_on(pages: Vec<MessagePage>, request: usize) -> Self {
            Self {
                fail_on_request: Some(request),
                ..Self::new(pages)
            }
        }

        fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JobMessagesApi for ScriptedApi {
        async fn list_page(
            &self,
            _project_id: &str,
            _job_id: &str,
            page_token: Option<&str>,
        ) -> MonitorResult<MessagePage> {
            let n = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on_request == Some(n) {
                return Err(MonitorError::Transport("connection reset".to_string()));
            }
            let index: usize = match page_token {
                Some(token) => token.parse().unwrap(),
                None => 0,
            };
            Ok(self.pages[index].clone())
        }
    }

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

    /// Page holding `messages`, optionally pointing at the page at `next`.
    fn page(messages: Vec<JobMessage>, next: Option<usize>) -> MessagePage {
        MessagePage {
            messages: Some(messages),
            next_page_token: next.map(|i| i.to_string()),
        }
    }

    fn checkpoint(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn texts(messages: &[JobMessage]) -> Vec<&str> {
        messages
            .iter()
            .map(|m| m.message_text.as_deref().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn paginates_until_token_runs_out() {
        let api = ScriptedApi::new(vec![
            page(vec![at(30), at(10)], Some(1)),
            page(vec![at(50), at(20)], Some(2)),
            page(vec![at(60), at(40)], None),
        ]);
        let monitor = JobMonitor::new("proj", api);

        let messages = monitor.job_messages("job-1", checkpoint(0)).await.unwrap();
        assert_eq!(
            texts(&messages),
            ["t=10", "t=20", "t=30", "t=40", "t=50", "t=60"]
        );
        assert_eq!(monitor.api.requests(), 3);
    }

    #[tokio::test]
    async fn filters_at_or_before_checkpoint() {
        let api = ScriptedApi::new(vec![page(vec![at(5), at(10), at(15), at(20)], None)]);
        let monitor = JobMonitor::new("proj", api);

        // Strictly after: t=10 itself is excluded.
        let messages = monitor.job_messages("job-1", checkpoint(10)).await.unwrap();
        assert_eq!(texts(&messages), ["t=15", "t=20"]);
    }

    #[tokio::test]
    async fn drops_messages_without_decodable_timestamps() {
        let mut garbled = untimed("garbled");
        garbled.time = Some(WireTimestamp {
            seconds: Some("???".to_string()),
            nanos: None,
        });
        let api = ScriptedApi::new(vec![page(vec![at(10), untimed("no-time"), garbled], None)]);
        let monitor = JobMonitor::new("proj", api);

        let messages = monitor.job_messages("job-1", checkpoint(0)).await.unwrap();
        assert_eq!(texts(&messages), ["t=10"]);
    }

    #[tokio::test]
    async fn absent_message_list_ends_the_sweep() {
        let api = ScriptedApi::new(vec![MessagePage {
            messages: None,
            // A token on an empty response must not be followed.
            next_page_token: Some("1".to_string()),
        }]);
        let monitor = JobMonitor::new("proj", api);

        let messages = monitor.job_messages("job-1", checkpoint(0)).await.unwrap();
        assert!(messages.is_empty());
        assert_eq!(monitor.api.requests(), 1);
    }

    #[tokio::test]
    async fn empty_page_mid_sweep_returns_prior_pages_sorted() {
        let api = ScriptedApi::new(vec![
            page(vec![at(30), at(10)], Some(1)),
            page(vec![], Some(2)),
        ]);
        let monitor = JobMonitor::new("proj", api);

        let messages = monitor.job_messages("job-1", checkpoint(0)).await.unwrap();
        assert_eq!(texts(&messages), ["t=10", "t=30"]);
        assert_eq!(monitor.api.requests(), 2);
    }

    #[tokio::test]
    async fn transport_failure_fails_the_whole_call() {
        let api = ScriptedApi::failing_on(
            vec![
                page(vec![at(10)], Some(1)),
                page(vec![at(20)], None),
            ],
            2,
        );
        let monitor = JobMonitor::new("proj", api);

        // Page 1 succeeded, but nothing from it is returned.
        let err = monitor.job_messages("job-1", checkpoint(0)).await.unwrap_err();
        assert!(matches!(err, MonitorError::Transport(_)));
    }

    #[tokio::test]
    async fn repeated_fetch_is_idempotent() {
        let api = ScriptedApi::new(vec![
            page(vec![at(30), at(10)], Some(1)),
            page(vec![at(20)], None),
        ]);
        let monitor = JobMonitor::new("proj", api);

        let first = monitor.job_messages("job-1", checkpoint(0)).await.unwrap();
        let second = monitor.job_messages("job-1", checkpoint(0)).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(monitor.api.requests(), 4);
    }
}
