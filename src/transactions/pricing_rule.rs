//! Pricing rules scale the daily rate of the whole fleet over a date range.
//! They're global, so only the super admin manages them.
//!
//! See the [pricing rule model.][1]
//!
//! [1]: ../../models/pricing_rule/index.html

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        pricing_rule::{PricingRule, PricingRuleID},
        user::User,
    },
    transactions::require_not_deleted,
};
use rust_decimal::prelude::*;

/// Multipliers must be positive. A one-off rule's range must run forwards; a
/// recurring rule may wrap across the new year.
fn validate(rule: &PricingRule) -> Result<()> {
    if rule.multiplier() <= &Decimal::zero() {
        Err(Error::InvalidMultiplier)?;
    }
    if !rule.recurring() && rule.start() > rule.end() {
        Err(Error::InvalidDateRange)?;
    }
    Ok(())
}

/// Create a new `PricingRule`.
pub fn create<T: Into<String>>(caller: &User, id: PricingRuleID, name: T, start: NaiveDate, end: NaiveDate, multiplier: Decimal, recurring: bool, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::PricingRuleCreate)?;
    let model = PricingRule::builder()
        .id(id)
        .name(name.into())
        .start(start)
        .end(end)
        .multiplier(multiplier)
        .recurring(recurring)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    validate(&model)?;
    log::debug!("pricing_rule::create() -- {} {}..{} x{}", model.name(), model.start(), model.end(), model.multiplier());
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `PricingRule`
pub fn update(caller: &User, mut subject: PricingRule, name: Option<String>, start: Option<NaiveDate>, end: Option<NaiveDate>, multiplier: Option<Decimal>, recurring: Option<bool>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::PricingRuleUpdate)?;
    require_not_deleted(&subject, "pricing_rule")?;
    if let Some(name) = name {
        subject.set_name(name);
    }
    if let Some(start) = start {
        subject.set_start(start);
    }
    if let Some(end) = end {
        subject.set_end(end);
    }
    if let Some(multiplier) = multiplier {
        subject.set_multiplier(multiplier);
    }
    if let Some(recurring) = recurring {
        subject.set_recurring(recurring);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    validate(&subject)?;
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `PricingRule`
pub fn delete(caller: &User, mut subject: PricingRule, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::PricingRuleDelete)?;
    require_not_deleted(&subject, "pricing_rule")?;
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
