//! Application state definitions

use super::forms::{CompanyForm, CompanyProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Receipt for a profile accepted by the submission handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub profile: CompanyProfile,
}

impl Submission {
    /// Stamp a new receipt for `profile`
    pub fn new(profile: CompanyProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            profile,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The company form being filled in
    pub form: CompanyForm,
    /// Errors waiting to be shown in the error dialog, oldest first
    pub error_queue: VecDeque<String>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Profiles accepted during this session
    pub submissions: Vec<Submission>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        tracing::debug!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn record_submission(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.submissions.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CompanyType, Flow};

    fn profile(name: &str) -> CompanyProfile {
        CompanyProfile {
            company_name: name.to_string(),
            company_type: CompanyType::Delivery,
            flow: Flow::Completo,
            auto_response: None,
        }
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = AppState::default();
        assert!(!state.has_errors());
        assert!(state.current_error().is_none());
        assert!(state.status_message.is_none());
        assert!(state.last_submission().is_none());
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_last_submission_tracks_newest() {
        let mut state = AppState::default();
        state.record_submission(Submission::new(profile("Acme")));
        state.record_submission(Submission::new(profile("Globex")));
        assert_eq!(state.submissions.len(), 2);
        assert_eq!(
            state.last_submission().map(|s| s.profile.company_name.as_str()),
            Some("Globex")
        );
    }

    #[test]
    fn test_submission_ids_are_unique() {
        let a = Submission::new(profile("Acme"));
        let b = Submission::new(profile("Acme"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = Submission::new(profile("Acme"));
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("submittedAt").is_some());
        assert_eq!(json["profile"]["companyName"], "Acme");
        assert_eq!(json["profile"]["flow"], "Completo");
    }
}
