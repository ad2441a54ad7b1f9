//! Feedback form.
//!
//! Validated, then "sent" nowhere: nothing is stored or transmitted.

use serde::Deserialize;
use thiserror::Error;

use crate::chaos::Chaos;

/// Minimum message length, in UTF-16 code units.
pub const MIN_MESSAGE_LENGTH: usize = 5;

/// Topics offered by the form. Any non-empty topic is accepted.
pub const TOPICS: [&str; 3] = ["bug", "idea", "question"];

/// Feedback form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub message: String,
}

/// Feedback failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    /// No topic selected.
    #[error("Choose a topic.")]
    TopicRequired,

    /// Message shorter than the minimum.
    #[error("Message is too short.")]
    MessageTooShort,

    /// Chaos mode simulated an outage.
    #[error("Server is not responding. Please try again later.")]
    Unavailable,
}

/// Validate and "send" feedback. Returns the acknowledgement text.
///
/// # Errors
///
/// Returns `TopicRequired` or `MessageTooShort` for invalid input, checked in
/// that order, and `Unavailable` when chaos fires.
pub fn send(chaos: &mut Chaos, form: &FeedbackForm) -> Result<String, FeedbackError> {
    if form.topic.is_empty() {
        return Err(FeedbackError::TopicRequired);
    }
    if form.message.encode_utf16().count() < MIN_MESSAGE_LENGTH {
        return Err(FeedbackError::MessageTooShort);
    }

    if chaos.maybe_chaos() {
        return Err(FeedbackError::Unavailable);
    }

    Ok(format!("Sent! Topic: {}. Thank you!", form.topic))
}
