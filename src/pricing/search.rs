//! Search is the first thing a customer does: pick a pickup branch and the
//! rental dates, then choose from the cars that can be rented there, each
//! with its base cost for those dates.

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{
        branch::BranchID,
        car::Car,
    },
    pricing::engine::{price_days, CarRepository, PricingEngine, RuleRepository},
};
use getset::Getters;
use rust_decimal::prelude::*;
use serde::{Serialize, Deserialize};

/// A car a customer can book, priced for the dates they searched.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct CarOffer {
    car: Car,
    /// Base cost of `[start, end)`, before extras
    base_cost: Decimal,
}

impl<C: CarRepository, R: RuleRepository> PricingEngine<C, R> {
    /// Find the cars stationed at `pickup` that can be rented, and price each
    /// one for `[start, end)`.
    ///
    /// `cars` is whatever the host has on hand (usually the pickup branch's
    /// fleet); cars elsewhere, unavailable, inactive, or deleted are skipped.
    /// The rules are loaded once for the whole search. Offers come back in
    /// the order the cars were given.
    pub fn search<'a, I>(&self, cars: I, pickup: &BranchID, start: NaiveDate, end: NaiveDate) -> Result<Vec<CarOffer>>
        where I: IntoIterator<Item = &'a Car>,
    {
        if end < start {
            Err(Error::InvalidDateRange)?;
        }
        let rules = self.live_rules();
        let mut offers = Vec::new();
        for car in cars {
            if car.branch_id() != pickup || !car.is_rentable() {
                continue;
            }
            match price_days(car.daily_rate(), &rules, start, end, self.params()) {
                Ok(breakdown) => {
                    offers.push(CarOffer {
                        car: car.clone(),
                        base_cost: breakdown.total().clone(),
                    });
                }
                Err(err) => log::debug!("search: skipping {}: {}", car.id(), err),
            }
        }
        log::debug!("search: {} cars on offer at {} from {} to {}", offers.len(), pickup, start, end);
        Ok(offers)
    }
}
