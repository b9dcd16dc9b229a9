//! Error taxonomy for a selection run.

use thiserror::Error;

/// Problems with the sheet contents. Only `InvalidFrequency` is run-fatal;
/// the other two exclude a single contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("contact {contact:?} references unknown category {category:?}")]
    UnknownCategory { contact: String, category: String },

    #[error("contact {contact:?} has an unreadable date {value:?} (expected yyyy-MM-dd)")]
    InvalidDate { contact: String, value: String },

    #[error("category {category:?} has frequency {value:?}, expected a positive integer")]
    InvalidFrequency { category: String, value: String },
}

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("store access failed: {0:#}")]
    StoreAccess(anyhow::Error),

    #[error("notification failed: {0:#}")]
    Notification(anyhow::Error),

    #[error(transparent)]
    Data(#[from] DataError),
}

pub type SelectionResult<T> = Result<T, SelectionError>;
