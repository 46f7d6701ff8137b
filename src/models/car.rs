//! Cars are the rentable vehicles. Each car is stationed at a branch and
//! carries the daily base rate the pricing engine starts from.

use chrono::NaiveDate;
use crate::models::branch::BranchID;
use rust_decimal::prelude::*;

rental_model! {
    /// The car model.
    pub struct Car {
        id: <<CarID>>,
        /// The branch this car is stationed at
        branch_id: BranchID,
        plate_number: String,
        brand: String,
        model: String,
        /// The base price of one rental day, before any multipliers
        daily_rate: Decimal,
        #[builder(default)]
        mileage: u64,
        /// Whether the car can be booked right now
        #[builder(default = "true")]
        available: bool,
        #[builder(default)]
        insurance_expiry: Option<NaiveDate>,
        #[builder(default)]
        last_service: Option<NaiveDate>,
    }
    CarBuilder
}

impl Car {
    /// A display name, ie "Toyota Corolla"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand(), self.model())
    }

    /// Whether a customer could book this car right now.
    pub fn is_rentable(&self) -> bool {
        self.is_active() && *self.available()
    }

    /// Record a service on this car. The service date and mileage only ever
    /// move forward; an older record does not roll them back.
    pub(crate) fn record_service(&mut self, date: NaiveDate, mileage: u64) -> bool {
        let mut changed = false;
        let newer = match self.last_service() {
            Some(last) => date > *last,
            None => true,
        };
        if newer {
            self.set_last_service(Some(date));
            changed = true;
        }
        if mileage > *self.mileage() {
            self.set_mileage(mileage);
            changed = true;
        }
        changed
    }
}
