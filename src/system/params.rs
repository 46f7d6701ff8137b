//! Defines the systemic parameters that pricing runs on: the weekend
//! surcharge, the long-rental discount, and the daily rates of the booking
//! extras.
//!
//! The defaults are the house rules. A host that wants different numbers can
//! build its own parameters (or deserialize them from its config) and hand
//! them to the [pricing engine][engine].
//!
//! [engine]: ../../pricing/engine/struct.PricingEngine.html

use crate::models::booking::InsuranceType;
use getset::{Getters, Setters};
use rust_decimal::prelude::*;
use serde::{Serialize, Deserialize};

/// Holds the parameters of the base cost calculation.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct PricingParameters {
    /// The multiplier for Saturdays and Sundays that no pricing rule covers
    weekend_multiplier: Decimal,
    /// Rentals spanning at least this many days get the long rental discount
    long_rental_days: i64,
    /// What the total of a long rental is multiplied by
    long_rental_factor: Decimal,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            weekend_multiplier: num!(1.10),
            long_rental_days: 7,
            long_rental_factor: num!(0.90),
        }
    }
}

impl PricingParameters {
    /// Create a params object holding the defaults
    pub fn new() -> Self {
        Default::default()
    }
}

/// Holds the daily rates of the booking extras.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct ExtrasParameters {
    /// Daily rate of the standard insurance tier
    standard_insurance: Decimal,
    /// Daily rate of the premium insurance tier
    premium_insurance: Decimal,
    child_seat: Decimal,
}

impl Default for ExtrasParameters {
    fn default() -> Self {
        Self {
            standard_insurance: num!(350),
            premium_insurance: num!(700),
            child_seat: num!(250),
        }
    }
}

impl ExtrasParameters {
    /// Create a params object holding the defaults
    pub fn new() -> Self {
        Default::default()
    }

    /// The daily rate of an insurance tier. Basic cover is included in the
    /// rental.
    pub fn insurance_rate(&self, insurance: InsuranceType) -> Decimal {
        match insurance {
            InsuranceType::Basic => Decimal::zero(),
            InsuranceType::Standard => self.standard_insurance().clone(),
            InsuranceType::Premium => self.premium_insurance().clone(),
        }
    }
}
