/// Class search and registration
///
/// Both services hold their own `PgPool` handle, passed in at construction.
///
/// - `query`: filtered search over classes with an availability window
///   covering a given weekday and time
/// - `registration`: all-or-nothing creation of a tutor, a class and its
///   weekly schedule

pub mod query;
pub mod registration;

pub use query::{ClassFilters, ClassQueryService, ClassWithTutor};
pub use registration::{
    ClassRegistration, ClassRegistrationService, PreparedRegistration, RegisteredClass,
    ScheduleItem,
};

/// Errors raised by class search and registration
#[derive(Debug, thiserror::Error)]
pub enum ClassError {
    /// `subject`, `week_day` or `time` was absent or empty
    #[error("missing filters to search classes")]
    MissingFilters,

    /// Registration payload failed validation before any write
    #[error("invalid registration: {0}")]
    InvalidRegistration(String),

    /// Storage failure, including a failed commit
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
