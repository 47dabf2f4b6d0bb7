//! Error types for SMM operations.

use thiserror::Error;

/// Result type alias for SMM operations.
pub type Result<T> = std::result::Result<T, SmmError>;

/// Main error type for SMM operations.
///
/// Every condition here is recoverable: operations report it to the caller
/// and leave all structures in their prior valid state. The process never
/// aborts on any of these in normal operation.
#[derive(Error, Debug)]
pub enum SmmError {
    /// Input failed validation (empty, non-printable, whitespace where forbidden)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input exceeds its length limit; oversized input is rejected, never truncated
    #[error("Input too long: {0}")]
    TooLong(String),

    /// Referenced username or entity is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Username already registered
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Mutating action attempted without an active session, or bad credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A post/message/user/queue limit has been reached
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Underlying storage growth failed; fatal for the single operation only
    #[error("Allocation failure: {0}")]
    AllocationFailure(String),

    /// A mirrored structure was found out of step with its counterpart
    #[error("Inconsistent state: {0}")]
    Inconsistent(String),
}

impl SmmError {
    /// Creates a new invalid input error.
    pub fn invalid_input<T: ToString>(msg: T) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Creates a new too-long error.
    pub fn too_long<T: ToString>(msg: T) -> Self {
        Self::TooLong(msg.to_string())
    }

    /// Creates a new not-found error.
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// Creates a new duplicate error.
    pub fn duplicate<T: ToString>(msg: T) -> Self {
        Self::Duplicate(msg.to_string())
    }

    /// Creates a new unauthorized error.
    pub fn unauthorized<T: ToString>(msg: T) -> Self {
        Self::Unauthorized(msg.to_string())
    }

    /// Creates a new capacity-exceeded error.
    pub fn capacity_exceeded<T: ToString>(msg: T) -> Self {
        Self::CapacityExceeded(msg.to_string())
    }

    /// Creates a new allocation failure error.
    pub fn allocation<T: ToString>(msg: T) -> Self {
        Self::AllocationFailure(msg.to_string())
    }

    /// Creates a new inconsistency error.
    pub fn inconsistent<T: ToString>(msg: T) -> Self {
        Self::Inconsistent(msg.to_string())
    }
}
