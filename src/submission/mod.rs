//! Submission handling for validated company profiles

mod handler;
mod traits;

pub use handler::LogSubmissionHandler;
pub use traits::SubmissionHandler;

#[cfg(test)]
pub use traits::MockSubmissionHandler;
