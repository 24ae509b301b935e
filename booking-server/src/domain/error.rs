//! Booking error taxonomy.
//!
//! Every recoverable failure in the booking core maps onto one of these
//! kinds. Services construct them directly; the web layer translates them
//! into HTTP statuses.

/// Errors produced by the booking services and the entities they manage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Malformed or missing input, or a duplicate unique key
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced entity is absent from its store
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Entity kind, e.g. "journey" or "train"
        kind: &'static str,
        /// The key the lookup was attempted with
        key: String,
    },

    /// A train composition rule was violated
    #[error("invalid train: {0}")]
    InvalidTrain(String),

    /// A journey's crew does not meet the staffing minimum
    #[error("invalid personnel: {0}")]
    InvalidPersonnel(String),

    /// A sale would push a class past its capacity
    #[error("oversell: {0}")]
    Oversell(String),
}

impl BookingError {
    /// Shorthand for a validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        BookingError::Validation(msg.into())
    }

    /// Shorthand for a missing entity, naming its kind and lookup key.
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        BookingError::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

/// Result alias used throughout the booking services.
pub type BookingResult<T> = Result<T, BookingError>;
