//! Cars make up a branch's fleet. Branch admins manage the cars stationed at
//! their own branch, the super admin manages every fleet.
//!
//! See the [car model.][1]
//!
//! [1]: ../../models/car/index.html

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        branch::Branch,
        car::{Car, CarID},
        user::User,
    },
    scope::BranchScope,
    transactions::{require_active, require_not_deleted},
};
use rust_decimal::prelude::*;

fn check_daily_rate(daily_rate: &Decimal) -> Result<()> {
    if daily_rate <= &Decimal::zero() {
        Err(Error::InvalidDailyRate)?;
    }
    Ok(())
}

/// Add a car to a branch's fleet.
pub fn create<T: Into<String>>(caller: &User, id: CarID, branch: &Branch, plate_number: T, brand: T, model: T, daily_rate: Decimal, mileage: u64, insurance_expiry: Option<NaiveDate>, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CarCreate)?;
    BranchScope::for_user(caller).check_branch(branch.id())?;
    require_active(branch, "branch")?;
    check_daily_rate(&daily_rate)?;
    let car = Car::builder()
        .id(id)
        .branch_id(branch.id().clone())
        .plate_number(plate_number.into())
        .brand(brand.into())
        .model(model.into())
        .daily_rate(daily_rate)
        .mileage(mileage)
        .insurance_expiry(insurance_expiry)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    log::debug!("car::create() -- {} {} at branch {}", car.display_name(), car.plate_number(), branch.id());
    Ok(Modifications::new_single(Op::Create, car))
}

/// Update an existing `Car`
pub fn update(caller: &User, mut subject: Car, plate_number: Option<String>, daily_rate: Option<Decimal>, mileage: Option<u64>, available: Option<bool>, insurance_expiry: Option<NaiveDate>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CarUpdate)?;
    BranchScope::for_user(caller).check_branch(subject.branch_id())?;
    require_not_deleted(&subject, "car")?;
    if let Some(plate_number) = plate_number {
        subject.set_plate_number(plate_number);
    }
    if let Some(daily_rate) = daily_rate {
        check_daily_rate(&daily_rate)?;
        subject.set_daily_rate(daily_rate);
    }
    if let Some(mileage) = mileage {
        subject.set_mileage(mileage);
    }
    if let Some(available) = available {
        subject.set_available(available);
    }
    if insurance_expiry.is_some() {
        subject.set_insurance_expiry(insurance_expiry);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Station a car at another branch. The caller needs scope over both ends.
pub fn transfer(caller: &User, mut subject: Car, to: &Branch, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CarUpdate)?;
    let scope = BranchScope::for_user(caller);
    scope.check_branch(subject.branch_id())?;
    scope.check_branch(to.id())?;
    require_not_deleted(&subject, "car")?;
    require_active(to, "branch")?;
    log::debug!("car::transfer() -- {} from {} to {}", subject.id(), subject.branch_id(), to.id());
    subject.set_branch_id(to.id().clone());
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `Car`
pub fn delete(caller: &User, mut subject: Car, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CarDelete)?;
    BranchScope::for_user(caller).check_branch(subject.branch_id())?;
    require_not_deleted(&subject, "car")?;
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
