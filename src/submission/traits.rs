//! Trait abstraction for the submission collaborator to enable mocking in tests

use crate::state::{CompanyProfile, Submission};
use anyhow::Result;
use async_trait::async_trait;

/// Receives profiles that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    /// Hand off a validated profile, returning the receipt on success
    async fn submit(&mut self, profile: &CompanyProfile) -> Result<Submission>;
}
