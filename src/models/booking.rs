//! A booking is a customer's reservation of a car between two dates, picked
//! up at one branch and dropped off at another (possibly the same one).
//!
//! The costs on a booking are fixed when it is created: they come out of a
//! [Quote] and are stored as-is, so later changes to pricing rules never
//! reprice an existing booking.
//!
//! [Quote]: ../../pricing/quote/struct.Quote.html

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{
        branch::BranchID,
        car::CarID,
        user::UserID,
    },
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
use serde::{Serialize, Deserialize};

/// Where a booking is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Created by the customer, waiting on the branch
    Pending,
    /// Accepted by the branch
    Confirmed,
    Cancelled,
    /// The car came back
    Completed,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl BookingStatus {
    /// Whether a booking may move from this status to `to`.
    pub fn can_become(&self, to: &BookingStatus) -> bool {
        match (self, to) {
            (BookingStatus::Pending, BookingStatus::Confirmed) => true,
            (BookingStatus::Pending, BookingStatus::Cancelled) => true,
            (BookingStatus::Confirmed, BookingStatus::Cancelled) => true,
            (BookingStatus::Confirmed, BookingStatus::Completed) => true,
            _ => false,
        }
    }
}

/// Insurance tiers a customer can add to a booking.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InsuranceType {
    Basic,
    Standard,
    Premium,
}

impl Default for InsuranceType {
    fn default() -> Self {
        InsuranceType::Basic
    }
}

/// The extras a customer picked for a booking.
#[derive(Clone, Debug, Default, PartialEq, CopyGetters, Serialize, Deserialize)]
pub struct Extras {
    #[getset(get_copy = "pub")]
    insurance: InsuranceType,
    #[getset(get_copy = "pub")]
    child_seat: bool,
}

impl Extras {
    pub fn new(insurance: InsuranceType, child_seat: bool) -> Self {
        Self { insurance, child_seat }
    }
}

/// The price of a booking, split into its parts.
#[derive(Clone, Debug, Default, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct BookingCosts {
    /// The rental itself, from the pricing engine
    base: Decimal,
    insurance: Decimal,
    child_seat: Decimal,
    /// `insurance + child_seat`
    extras: Decimal,
    /// `base + extras`
    total: Decimal,
}

impl BookingCosts {
    /// Build the costs of a booking from its parts, deriving the extras and
    /// total sums.
    pub fn new(base: Decimal, insurance: Decimal, child_seat: Decimal) -> Self {
        let extras = insurance + child_seat;
        Self {
            base,
            insurance,
            child_seat,
            extras,
            total: base + extras,
        }
    }
}

rental_model! {
    /// The booking model.
    pub struct Booking {
        id: <<BookingID>>,
        customer_id: UserID,
        car_id: CarID,
        pickup_branch_id: BranchID,
        dropoff_branch_id: BranchID,
        /// The first rental day
        start: NaiveDate,
        /// The return day. It is not charged as a rental day.
        end: NaiveDate,
        #[builder(default)]
        extras: Extras,
        costs: BookingCosts,
        #[builder(default)]
        status: BookingStatus,
        #[builder(default)]
        notes: Option<String>,
    }
    BookingBuilder
}

impl Booking {
    /// Move this booking to a new status, if the move is allowed.
    pub(crate) fn transition(&mut self, to: BookingStatus) -> Result<()> {
        if !self.status().can_become(&to) {
            Err(Error::BookingStatusInvalid { from: *self.status(), to })?;
        }
        self.set_status(to);
        Ok(())
    }

    /// Whether this booking touches the given branch, either as its pickup
    /// location or through the car's home branch.
    pub fn involves_branch(&self, branch_id: &BranchID, car_branch_id: &BranchID) -> bool {
        self.pickup_branch_id() == branch_id || car_branch_id == branch_id
    }
}
