//! Extras are the add-ons of a booking: an insurance tier and a child seat.
//! Both are a flat daily rate.
//!
//! Extras are charged for the calendar days between start and end, but never
//! for less than one day, so a same-day rental still pays for a day of cover.

use chrono::NaiveDate;
use crate::{
    models::booking::Extras,
    system::params::ExtrasParameters,
    util,
};
use rust_decimal::prelude::*;

/// How many days of extras a rental pays for.
pub fn extras_days(start: &NaiveDate, end: &NaiveDate) -> i64 {
    std::cmp::max(1, util::time::days_between(start, end))
}

/// Work out the insurance and child seat costs of a rental, returned as
/// `(insurance, child_seat)`.
pub fn extras_costs(params: &ExtrasParameters, extras: &Extras, start: &NaiveDate, end: &NaiveDate) -> (Decimal, Decimal) {
    let days = Decimal::from(extras_days(start, end));
    let insurance = days * params.insurance_rate(extras.insurance());
    let child_seat = if extras.child_seat() {
        days * params.child_seat().clone()
    } else {
        Decimal::zero()
    };
    (insurance, child_seat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::booking::InsuranceType,
        util::test::date,
    };

    #[test]
    fn days_never_below_one() {
        assert_eq!(extras_days(&date(2024, 3, 4), &date(2024, 3, 4)), 1);
        assert_eq!(extras_days(&date(2024, 3, 4), &date(2024, 3, 5)), 1);
        assert_eq!(extras_days(&date(2024, 3, 4), &date(2024, 3, 14)), 10);
        assert_eq!(extras_days(&date(2024, 3, 14), &date(2024, 3, 4)), 1);
    }

    #[test]
    fn costs() {
        let params = ExtrasParameters::new();
        let start = date(2024, 3, 4);
        let end = date(2024, 3, 8);

        let none = Extras::default();
        assert_eq!(extras_costs(&params, &none, &start, &end), (num!(0), num!(0)));

        let standard = Extras::new(InsuranceType::Standard, false);
        assert_eq!(extras_costs(&params, &standard, &start, &end), (num!(1400), num!(0)));

        let premium = Extras::new(InsuranceType::Premium, true);
        assert_eq!(extras_costs(&params, &premium, &start, &end), (num!(2800), num!(1000)));

        // same day still pays a day
        assert_eq!(extras_costs(&params, &premium, &start, &start), (num!(700), num!(250)));
    }
}
