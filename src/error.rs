//! Error taxonomy for a single lookup run.
//!
//! The display strings of the validation and upstream variants are what the
//! runner shows as the failure annotation, so they are kept verbatim.

use crate::sink::SinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    /// `email` input missing or blank.
    #[error("The email value is required to run this action.")]
    MissingEmail,

    /// `fields` input missing or blank.
    #[error("The fields value is required to run this action.")]
    MissingFields,

    /// A field path with an empty segment, e.g. `profile..email`.
    #[error("Invalid field path {0:?}: path segments must not be empty.")]
    InvalidFieldPath(String),

    /// The directory service answered with a not-ok status.
    ///
    /// `code` is the service's own error string (or the HTTP status) and is
    /// only logged.
    #[error("The Slack API thrown an error.")]
    SlackApi { code: Option<String> },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_verbatim() {
        assert_eq!(
            ActionError::MissingEmail.to_string(),
            "The email value is required to run this action."
        );
        assert_eq!(
            ActionError::MissingFields.to_string(),
            "The fields value is required to run this action."
        );
    }

    #[test]
    fn upstream_message_hides_code() {
        let err = ActionError::SlackApi {
            code: Some("users_not_found".to_string()),
        };
        assert_eq!(err.to_string(), "The Slack API thrown an error.");
    }

    #[test]
    fn sink_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ActionError = SinkError::from(io).into();
        assert_eq!(err.to_string(), "read-only");
    }
}
