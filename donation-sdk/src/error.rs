use crate::objects::{DonationType, Platform};
use thiserror::Error;

/// Errors raised while building donation events or resolving their vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DonationError {
    /// A constructor argument is outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A donation type was paired with a platform it does not belong to.
    #[error("donation type {donation_type} belongs to {actual}, not {expected}")]
    InvariantViolation {
        donation_type: DonationType,
        expected: Platform,
        actual: Platform,
    },

    /// No donation type carries the given display name.
    #[error("unknown donation type: {0}")]
    UnknownDonationType(String),
}
