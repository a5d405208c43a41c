//! Default submission handler

use super::traits::SubmissionHandler;
use crate::state::{CompanyProfile, Submission};
use anyhow::Result;
use async_trait::async_trait;

/// Emits each accepted profile as a structured log event
#[derive(Debug, Default)]
pub struct LogSubmissionHandler {
    accepted: usize,
}

impl LogSubmissionHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionHandler for LogSubmissionHandler {
    async fn submit(&mut self, profile: &CompanyProfile) -> Result<Submission> {
        let record = serde_json::to_string(profile)?;
        let submission = Submission::new(profile.clone());
        self.accepted += 1;

        tracing::info!(
            submission_id = %submission.id,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            accepted = self.accepted,
            %record,
            "company profile submitted"
        );

        Ok(submission)
    }
}
