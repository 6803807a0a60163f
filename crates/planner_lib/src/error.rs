//! A module containing the [`PlannerError`] enum, which contains various basic error types.

use sea_orm::TransactionError;

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum PlannerError {
    // --------
    // --- Internal server errors
    // --------

    /// An error from the database.
    #[error(transparent)]
    DbError(#[from] sea_orm::DbErr),
    /// An internal error.
    #[error("internal error: {0}")]
    Internal(String),

    // --------
    // --- Logical errors
    // --------

    /// The event with the provided ID was not found.
    #[error("event with id `{0}` not found in database")]
    EventNotFound(
        /// The event ID.
        u32,
    ),
    /// The guest with the provided ID was not found.
    #[error("guest with id `{0}` not found in database")]
    GuestNotFound(
        /// The guest ID.
        u32,
    ),
    /// The item with the provided ID was not found.
    #[error("item with id `{0}` not found in database")]
    ItemNotFound(
        /// The item ID.
        u32,
    ),
    /// The provided guest isn't invited to the provided event.
    #[error("guest `{1}` is not invited to event `{0}`")]
    GuestNotInvited(
        /// The event ID.
        u32,
        /// The guest ID.
        u32,
    ),
    /// The provided datetime doesn't match the expected format.
    #[error("invalid datetime `{0}`, expected `YYYY-MM-DD HH:MM:SS`")]
    InvalidDatetime(
        /// The raw datetime input.
        String,
    ),
    /// The provided guest name is malformed.
    #[error("invalid guest name `{0}`, expected alphabetic characters")]
    InvalidGuestName(
        /// The raw name input.
        String,
    ),
}

/// Shortcut for creating an internal error, by formatting a message.
///
/// See [`PlannerError::Internal`].
#[macro_export]
macro_rules! internal {
    ($($t:tt)*) => {{
        $crate::error::PlannerError::Internal($crate::error::__private::format!($($t)*))
    }};
}

#[doc(hidden)]
pub mod __private {
    pub use std::format;
}

impl<E> From<TransactionError<E>> for PlannerError
where
    PlannerError: From<E>,
{
    fn from(value: TransactionError<E>) -> Self {
        match value {
            TransactionError::Connection(db_err) => From::from(db_err),
            TransactionError::Transaction(e) => From::from(e),
        }
    }
}

/// Represents the result of a computation that could return a [`PlannerError`].
pub type PlannerResult<T = ()> = Result<T, PlannerError>;
