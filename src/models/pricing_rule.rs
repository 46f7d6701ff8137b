//! Pricing rules are admin-defined date ranges that scale the daily rate of
//! every car in the fleet, ie "Summer Peak" at 1.3x or "Christmas" at 1.5x.
//! Rules are global: they are not tied to a car or a branch.
//!
//! A rule can be marked recurring, in which case its years are ignored and it
//! matches the same month/day range every year.

use chrono::NaiveDate;
use crate::util;
use rust_decimal::prelude::*;

rental_model! {
    /// The pricing rule model.
    pub struct PricingRule {
        id: <<PricingRuleID>>,
        /// A label for admins, ie "Summer Peak". Not used when pricing.
        name: String,
        /// First day the rule applies (inclusive)
        start: NaiveDate,
        /// Last day the rule applies (inclusive)
        end: NaiveDate,
        /// What the daily rate is multiplied by on matching days. 1.5 means
        /// +50%, 0.8 means -20%.
        multiplier: Decimal,
        /// If true, the years of `start` and `end` are ignored.
        #[builder(default)]
        recurring: bool,
    }
    PricingRuleBuilder
}

impl PricingRule {
    /// Whether this rule covers the given day.
    ///
    /// A rule matches when the day sits within `start..=end` as written, or
    /// when the rule is recurring and the day's month/day sits within the
    /// rule's month/day range. A non-recurring rule whose start is after its
    /// end never matches.
    pub fn applies_to(&self, date: &NaiveDate) -> bool {
        let direct = date >= self.start() && date <= self.end();
        direct || (*self.recurring() && util::time::in_annual_range(date, self.start(), self.end()))
    }
}
