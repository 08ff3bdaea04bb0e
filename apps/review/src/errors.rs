use thiserror::Error;

use crate::disclosure::GroupHandle;
use crate::models::CategorySlot;

/// Application-level error type.
/// Every fallible operation in the review core returns `Result<T, ReviewError>`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// A disclosure call used a handle that was never issued or whose group
    /// was already destroyed. This is API misuse, not bad input data, so it
    /// is reported loudly instead of being ignored.
    #[error("Invalid disclosure group handle: {0:?}")]
    InvalidHandle(GroupHandle),

    /// The stored analysis is missing one of the four category slots.
    #[error("Feedback is missing the '{0}' category")]
    MissingCategory(CategorySlot),

    /// The stored analysis has no ATS report.
    #[error("Analysis has no ATS report")]
    MissingAts,
}
