//! The pricing engine works out what renting a car costs, before extras.
//!
//! Pricing walks the rental one calendar day at a time over `[start, end)`:
//! the return day is not charged, so a rental ending the day after it starts
//! is one day long. Each day is charged the car's daily rate times that day's
//! multiplier, which is
//!
//! 1. the *highest* multiplier of every pricing rule covering the day, or if
//!    no rule covers it,
//! 2. the weekend surcharge on a Saturday or Sunday, or otherwise
//! 3. one.
//!
//! Rules always beat the weekend surcharge, even a rule cheaper than it.
//! Finally, rentals spanning seven or more calendar days get 10% off the
//! total.
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use rental_core::{
//!     models::{branch::BranchID, car::{Car, CarID}, pricing_rule::{PricingRule, PricingRuleID}},
//!     pricing::engine::PricingEngine,
//! };
//! use rust_decimal_macros::dec;
//! use std::collections::HashMap;
//!
//! let now = Utc::now();
//! let car = Car::builder()
//!     .id(CarID::new("car-1"))
//!     .branch_id(BranchID::new("north"))
//!     .plate_number("ABC-123")
//!     .brand("Toyota")
//!     .model("Corolla")
//!     .daily_rate(dec!(1000))
//!     .active(true)
//!     .created(now)
//!     .updated(now)
//!     .build()
//!     .unwrap();
//! let christmas = PricingRule::builder()
//!     .id(PricingRuleID::new("xmas"))
//!     .name("Christmas")
//!     .start(NaiveDate::from_ymd_opt(2020, 12, 20).unwrap())
//!     .end(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap())
//!     .multiplier(dec!(1.5))
//!     .recurring(true)
//!     .active(true)
//!     .created(now)
//!     .updated(now)
//!     .build()
//!     .unwrap();
//!
//! let mut cars = HashMap::new();
//! cars.insert(car.id().clone(), car);
//! let engine = PricingEngine::new(cars, vec![christmas]);
//!
//! let start = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
//! assert_eq!(engine.calculate_base_cost(&CarID::new("car-1"), start, end), dec!(6000));
//! assert_eq!(engine.calculate_base_cost(&CarID::new("nope"), start, end), dec!(0));
//! ```

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{
        booking::Extras,
        car::{Car, CarID},
        pricing_rule::{PricingRule, PricingRuleID},
    },
    pricing::quote::Quote,
    system::params::{ExtrasParameters, PricingParameters},
    util,
};
use getset::Getters;
use rust_decimal::prelude::*;
use serde::{Serialize, Deserialize};
use std::collections::HashMap;

/// Somewhere the engine can look up cars.
pub trait CarRepository {
    /// Find a car by id.
    fn get_car(&self, id: &CarID) -> Option<Car>;
}

/// Somewhere the engine can load the pricing rules from. The whole set is
/// loaded on every pricing call.
///
/// Only active, undeleted rules are priced with. Note that a rule built by
/// hand starts out inactive unless `.active(true)` is set on its builder
/// (`pricing_rule::create` always sets it).
pub trait RuleRepository {
    fn list_all(&self) -> Vec<PricingRule>;
}

impl<T: CarRepository + ?Sized> CarRepository for &T {
    fn get_car(&self, id: &CarID) -> Option<Car> {
        (**self).get_car(id)
    }
}

impl CarRepository for HashMap<CarID, Car> {
    fn get_car(&self, id: &CarID) -> Option<Car> {
        self.get(id).cloned()
    }
}

impl CarRepository for [Car] {
    fn get_car(&self, id: &CarID) -> Option<Car> {
        self.iter().find(|car| car.id() == id).cloned()
    }
}

impl CarRepository for Vec<Car> {
    fn get_car(&self, id: &CarID) -> Option<Car> {
        self.as_slice().get_car(id)
    }
}

impl<T: RuleRepository + ?Sized> RuleRepository for &T {
    fn list_all(&self) -> Vec<PricingRule> {
        (**self).list_all()
    }
}

impl RuleRepository for [PricingRule] {
    fn list_all(&self) -> Vec<PricingRule> {
        self.to_vec()
    }
}

impl RuleRepository for Vec<PricingRule> {
    fn list_all(&self) -> Vec<PricingRule> {
        self.clone()
    }
}

/// Where a day's multiplier came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RateSource {
    /// The highest-multiplier rule among those covering the day
    Rule {
        id: PricingRuleID,
        name: String,
    },
    Weekend,
    /// No rule, not a weekend
    Base,
}

/// What a single rental day costs.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct DayCharge {
    date: NaiveDate,
    multiplier: Decimal,
    source: RateSource,
    /// `daily_rate * multiplier`
    amount: Decimal,
}

/// A priced rental, day by day.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct PriceBreakdown {
    daily_rate: Decimal,
    /// Calendar days between start and end. This gates the long rental
    /// discount.
    total_days: i64,
    /// One entry per charged day
    days: Vec<DayCharge>,
    /// Sum of the day charges
    subtotal: Decimal,
    /// What the long rental discount took off (zero if it did not apply)
    discount: Decimal,
    /// `subtotal - discount`
    total: Decimal,
}

/// Work out the multiplier for a single day.
fn day_rate(date: &NaiveDate, rules: &[PricingRule], params: &PricingParameters) -> (Decimal, RateSource) {
    let best = rules.iter()
        .filter(|rule| rule.applies_to(date))
        .fold(None, |best: Option<&PricingRule>, rule| {
            match best {
                Some(current) if current.multiplier() >= rule.multiplier() => Some(current),
                _ => Some(rule),
            }
        });
    match best {
        Some(rule) => {
            let source = RateSource::Rule { id: rule.id().clone(), name: rule.name().clone() };
            (rule.multiplier().clone(), source)
        }
        None if util::time::is_weekend(date) => (params.weekend_multiplier().clone(), RateSource::Weekend),
        None => (Decimal::one(), RateSource::Base),
    }
}

/// Price a rental of `[start, end)` at the given daily rate against a set of
/// rules. This is the whole pricing algorithm; the engine just loads the car
/// and the rules and hands them over.
///
/// Fails with `PriceOverflow` if the total does not fit in a `Decimal`.
pub fn price_days(daily_rate: &Decimal, rules: &[PricingRule], start: NaiveDate, end: NaiveDate, params: &PricingParameters) -> Result<PriceBreakdown> {
    let total_days = util::time::days_between(&start, &end);
    let mut days = Vec::new();
    let mut subtotal = Decimal::zero();

    let mut date = start;
    while date < end {
        let (multiplier, source) = day_rate(&date, rules, params);
        let amount = daily_rate.checked_mul(multiplier).ok_or(Error::PriceOverflow)?;
        log::trace!("pricing: {} at {}x ({:?}) = {}", date, multiplier, source, amount);
        subtotal = subtotal.checked_add(amount).ok_or(Error::PriceOverflow)?;
        days.push(DayCharge { date, multiplier, source, amount });
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let total = if total_days >= *params.long_rental_days() {
        subtotal.checked_mul(params.long_rental_factor().clone()).ok_or(Error::PriceOverflow)?
    } else {
        subtotal
    };
    let discount = subtotal.checked_sub(total).ok_or(Error::PriceOverflow)?;
    Ok(PriceBreakdown {
        daily_rate: daily_rate.clone(),
        total_days,
        days,
        subtotal,
        discount,
        total,
    })
}

/// The pricing engine. Holds where cars and rules come from, plus the
/// parameters to price with.
#[derive(Clone, Debug, Getters)]
pub struct PricingEngine<C, R> {
    cars: C,
    rules: R,
    #[getset(get = "pub")]
    params: PricingParameters,
    #[getset(get = "pub")]
    extras: ExtrasParameters,
}

impl<C: CarRepository, R: RuleRepository> PricingEngine<C, R> {
    /// Create an engine running on the default parameters.
    pub fn new(cars: C, rules: R) -> Self {
        Self {
            cars,
            rules,
            params: PricingParameters::default(),
            extras: ExtrasParameters::default(),
        }
    }

    /// Swap in different pricing parameters
    pub fn with_params(mut self, params: PricingParameters) -> Self {
        self.params = params;
        self
    }

    /// Swap in different extras rates
    pub fn with_extras(mut self, extras: ExtrasParameters) -> Self {
        self.extras = extras;
        self
    }

    /// Load the rules that are live right now. Deleted and deactivated rules
    /// are left out.
    pub(crate) fn live_rules(&self) -> Vec<PricingRule> {
        let all = self.rules.list_all();
        let loaded = all.len();
        let live = all.into_iter()
            .filter(|rule| rule.is_active())
            .collect::<Vec<_>>();
        if live.len() < loaded {
            log::debug!("pricing: skipping {} inactive or deleted rules", loaded - live.len());
        }
        live
    }

    /// Price a rental day by day. Fails if the car does not exist.
    pub fn breakdown(&self, car_id: &CarID, start: NaiveDate, end: NaiveDate) -> Result<PriceBreakdown> {
        let car = self.cars.get_car(car_id)
            .ok_or_else(|| Error::CarNotFound(car_id.to_string()))?;
        let rules = self.live_rules();
        let breakdown = price_days(car.daily_rate(), &rules, start, end, &self.params)?;
        log::debug!(
            "pricing: car {} from {} to {} over {} rules: {} charged days, total {}",
            car_id, start, end, rules.len(), breakdown.days().len(), breakdown.total(),
        );
        Ok(breakdown)
    }

    /// Calculate the base cost of renting a car from `start` up to (but not
    /// including) `end`.
    ///
    /// An unknown car (or a price too large to compute) costs zero. Use
    /// [try_calculate_base_cost] to find out about it instead.
    ///
    /// [try_calculate_base_cost]: #method.try_calculate_base_cost
    pub fn calculate_base_cost(&self, car_id: &CarID, start: NaiveDate, end: NaiveDate) -> Decimal {
        match self.breakdown(car_id, start, end) {
            Ok(breakdown) => breakdown.total().clone(),
            Err(err) => {
                log::debug!("pricing: {}, charging nothing", err);
                Decimal::zero()
            }
        }
    }

    /// Calculate the base cost of a rental, failing with `CarNotFound` if the
    /// car does not exist or `PriceOverflow` if the price can't be computed.
    pub fn try_calculate_base_cost(&self, car_id: &CarID, start: NaiveDate, end: NaiveDate) -> Result<Decimal> {
        Ok(self.breakdown(car_id, start, end)?.total().clone())
    }

    /// Price a rental along with its extras.
    pub fn quote(&self, car_id: &CarID, start: NaiveDate, end: NaiveDate, extras: Extras) -> Result<Quote> {
        let breakdown = self.breakdown(car_id, start, end)?;
        Ok(Quote::new(car_id.clone(), start, end, extras, breakdown, &self.extras))
    }
}
