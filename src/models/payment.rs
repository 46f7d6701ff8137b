//! Payments track the money side of a booking. One is opened (as pending)
//! alongside every booking, for the booking's total.

use crate::models::booking::BookingID;
use rust_decimal::prelude::*;
use serde::{Serialize, Deserialize};

/// How the customer intends to pay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    Transfer,
    Cash,
}

impl PaymentMethod {
    /// A human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::Transfer => "Bank Transfer",
            PaymentMethod::Cash => "Cash on Pick-up",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Card
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    /// The booking was cancelled and the money is on its way back
    RefundPending,
    Refunded,
    Failed,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

rental_model! {
    /// The payment model.
    pub struct Payment {
        id: <<PaymentID>>,
        booking_id: BookingID,
        amount: Decimal,
        #[builder(default)]
        method: PaymentMethod,
        #[builder(default)]
        status: PaymentStatus,
        /// The processor's reference for this payment, if any
        #[builder(default)]
        transaction_ref: Option<String>,
    }
    PaymentBuilder
}
