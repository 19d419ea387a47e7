//! Human-facing monitoring URL and cancel-command builders.
//!
//! Pure string templates for CLI and UI layers. Percent-encoding via
//! `urlencoding::encode` is total over `&str`, so there is no failure path.

/// Console page showing a running job.
///
/// The project *name* is accepted in place of the project id; the console
/// redirects to the canonical URL.
pub fn monitoring_page_url(project_name: &str, job_id: &str) -> String {
    format!(
        "https://console.riffle.dev/projects/{}/jobs/{}",
        urlencoding::encode(project_name),
        urlencoding::encode(job_id),
    )
}

/// The CLI invocation that cancels a job.
pub fn cancel_command(project_name: &str, job_id: &str) -> String {
    format!("riffle jobs --project={project_name} cancel {job_id}")
}
