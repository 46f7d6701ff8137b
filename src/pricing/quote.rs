//! A quote is everything a customer sees before booking: the day-by-day base
//! cost plus the extras they picked, all summed up. A booking stores the
//! quote's costs as they were at booking time.

use chrono::NaiveDate;
use crate::{
    models::{
        booking::{BookingCosts, Extras},
        car::CarID,
    },
    pricing::{
        engine::PriceBreakdown,
        extras,
    },
    system::params::ExtrasParameters,
};
use getset::Getters;
use serde::{Serialize, Deserialize};

/// A priced rental, extras included.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Quote {
    car_id: CarID,
    start: NaiveDate,
    end: NaiveDate,
    extras: Extras,
    costs: BookingCosts,
    /// How the base cost was arrived at
    breakdown: PriceBreakdown,
}

impl Quote {
    /// Build a quote out of a priced rental and the chosen extras.
    pub fn new(car_id: CarID, start: NaiveDate, end: NaiveDate, extras: Extras, breakdown: PriceBreakdown, params: &ExtrasParameters) -> Self {
        let (insurance, child_seat) = extras::extras_costs(params, &extras, &start, &end);
        let costs = BookingCosts::new(breakdown.total().clone(), insurance, child_seat);
        Self {
            car_id,
            start,
            end,
            extras,
            costs,
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::booking::InsuranceType,
        pricing::engine::price_days,
        system::params::PricingParameters,
        util::test::date,
    };

    #[test]
    fn sums_base_and_extras() {
        // thu 2024-03-07 .. mon 2024-03-11: thu, fri, sat, sun
        let start = date(2024, 3, 7);
        let end = date(2024, 3, 11);
        let breakdown = price_days(&num!(1000), &[], start, end, &PricingParameters::new()).unwrap();
        let quote = Quote::new(CarID::new("car"), start, end, Extras::new(InsuranceType::Premium, false), breakdown, &ExtrasParameters::new());
        assert_eq!(quote.costs().base(), &num!(4200));
        assert_eq!(quote.costs().insurance(), &num!(2800));
        assert_eq!(quote.costs().child_seat(), &num!(0));
        assert_eq!(quote.costs().extras(), &num!(2800));
        assert_eq!(quote.costs().total(), &num!(7000));
        assert_eq!(quote.breakdown().days().len(), 4);
    }

    #[test]
    fn zero_day_quote_still_pays_extras() {
        let day = date(2024, 3, 7);
        let breakdown = price_days(&num!(1000), &[], day, day, &PricingParameters::new()).unwrap();
        let quote = Quote::new(CarID::new("car"), day, day, Extras::new(InsuranceType::Basic, true), breakdown, &ExtrasParameters::new());
        assert_eq!(quote.costs().base(), &num!(0));
        assert_eq!(quote.costs().total(), &num!(250));
    }
}
