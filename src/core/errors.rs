use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum SplitbookError {
    /// Ledger with given ID not found
    #[error("Ledger {0} not found")]
    LedgerNotFound(String),

    /// Member with given ID not found
    #[error("Member {0} not found")]
    MemberNotFound(String),

    /// Member is not part of the ledger
    #[error("Member {0} is not a ledger member")]
    NotLedgerMember(String),

    /// Expense amount is zero or negative
    #[error("Expense amount must be positive")]
    InvalidAmount,

    /// Participant share ratio is zero or negative
    #[error("Share ratio must be positive")]
    InvalidShareRatio,

    /// Generic input validation error
    #[error("Invalid input for field `{0}`: {1}")]
    InvalidInput(String, String),

    /// A stored expense references someone outside the ledger. Data
    /// integrity fault: the whole calculation aborts.
    #[error("Expense {0} references non-member {1}")]
    UnknownParticipant(String, String),

    /// A stored expense carries a non-positive share ratio total
    #[error("Expense {0} has a non-positive share ratio total")]
    InvalidShareTotal(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
