use thiserror::Error;

use crate::notify::Notification;
use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum EditorError {
    /// The submission was rejected as a whole; nothing was mutated.
    #[error("{form} submission rejected: {errors}")]
    Invalid {
        form: &'static str,
        errors: FieldErrors,
        notification: Notification,
    },

    #[error("{0}")]
    NotFound(String),
}
