//! The error module holds the crate-wide `Error` type. Pricing itself never
//! fails on its parity path (an unknown car simply costs nothing) so most of
//! these come out of the transactions.

use crate::models::booking::BookingStatus;
use thiserror::Error;

/// This is our error enum. It contains an entry for any part of the system in
/// which an expectation is not met or a problem occurs.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A booking does not belong to the customer acting on it
    #[error("this booking belongs to another customer")]
    BookingNotOwned,
    /// A booking cannot move between the given states
    #[error("booking cannot move from {from:?} to {to:?}")]
    BookingStatusInvalid {
        from: BookingStatus,
        to: BookingStatus,
    },
    /// An admin account must be bound to a branch
    #[error("a branch is required for this user")]
    BranchRequired,
    /// Error building a model
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// The car is not stationed at the pickup branch
    #[error("the car is not stationed at the pickup branch")]
    CarNotAtBranch,
    /// The pricing engine could not find the car being priced
    #[error("car not found: {0}")]
    CarNotFound(String),
    /// The car is flagged unavailable for rental
    #[error("the car is not available for rental")]
    CarUnavailable,
    /// The caller is trying to perform an action they do not have permission
    /// for.
    #[error("insufficient privileges")]
    InsufficientPrivileges,
    /// A date range runs backwards
    #[error("invalid date range")]
    InvalidDateRange,
    /// A daily rate must be above zero
    #[error("daily rate must be greater than zero")]
    InvalidDailyRate,
    /// A pricing multiplier must be above zero
    #[error("multiplier must be greater than zero")]
    InvalidMultiplier,
    /// Notes are capped at 250 characters
    #[error("notes are too long")]
    NotesTooLong,
    /// The object has been deleted and cannot be modified
    #[error("object {0} has been deleted")]
    ObjectIsDeleted(String),
    /// The object is inactive (or deleted) and cannot be used
    #[error("object {0} is inactive")]
    ObjectIsInactive(String),
    /// A modification was expected to carry a different operation
    #[error("operation mismatch")]
    OpMismatch,
    /// The caller is acting on something outside their branch
    #[error("object is outside the caller's branch")]
    OutsideBranchScope,
    /// A payment was handed in alongside a booking it does not belong to
    #[error("the payment does not belong to this booking")]
    PaymentNotForBooking,
    /// A price ran past what a `Decimal` can hold
    #[error("price is too large to compute")]
    PriceOverflow,
    /// A quote was used to book a different car than it priced
    #[error("the quote does not match the car being booked")]
    QuoteMismatch,
    /// A modification was expected to carry a different model
    #[error("wrong model type")]
    WrongModelType,
}

pub type Result<T> = std::result::Result<T, Error>;
