//! Maintenance records are a car's service history. Logging a service also
//! moves the car's last service date and odometer forward, so creating a
//! record can update the car as well.
//!
//! See the [maintenance model.][1]
//!
//! [1]: ../../models/maintenance/index.html

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        car::Car,
        maintenance::{MaintenanceRecord, MaintenanceRecordID},
        user::User,
    },
    scope::BranchScope,
    transactions::require_not_deleted,
};

/// Build a maintenance record for a car and push it (and the car, if the
/// service moved it forward) onto `mods`. Also used when a service reminder
/// gets completed.
pub(crate) fn log_service(mut car: Car, id: MaintenanceRecordID, service_date: NaiveDate, mileage: u64, service_type: Option<String>, notes: Option<String>, now: &DateTime<Utc>, mods: &mut Modifications) -> Result<()> {
    if car.is_deleted() {
        Err(Error::ObjectIsInactive("car".into()))?;
    }
    let record = MaintenanceRecord::builder()
        .id(id)
        .car_id(car.id().clone())
        .branch_id(car.branch_id().clone())
        .service_date(service_date)
        .mileage(mileage)
        .service_type(service_type)
        .notes(notes)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    log::debug!("maintenance -- logged service on {} at {}", car.id(), record.service_date());
    mods.push(Op::Create, record);
    if car.record_service(service_date, mileage) {
        car.set_updated(now.clone());
        mods.push(Op::Update, car);
    }
    Ok(())
}

/// Log a service on a car. The record is filed under the car's branch.
pub fn create(caller: &User, id: MaintenanceRecordID, car: Car, service_date: NaiveDate, mileage: u64, service_type: Option<String>, notes: Option<String>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::MaintenanceCreate)?;
    BranchScope::for_user(caller).check_branch(car.branch_id())?;
    let mut mods = Modifications::new();
    log_service(car, id, service_date, mileage, service_type, notes, now, &mut mods)?;
    Ok(mods)
}

/// Update an existing `MaintenanceRecord`
pub fn update(caller: &User, mut subject: MaintenanceRecord, service_date: Option<NaiveDate>, mileage: Option<u64>, service_type: Option<String>, notes: Option<String>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::MaintenanceUpdate)?;
    let scope = BranchScope::for_user(caller);
    if !scope.allows_maintenance(&subject) {
        Err(Error::OutsideBranchScope)?;
    }
    require_not_deleted(&subject, "maintenance")?;
    if let Some(service_date) = service_date {
        subject.set_service_date(service_date);
    }
    if let Some(mileage) = mileage {
        subject.set_mileage(mileage);
    }
    if service_type.is_some() {
        subject.set_service_type(service_type);
    }
    if notes.is_some() {
        subject.set_notes(notes);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `MaintenanceRecord`
pub fn delete(caller: &User, mut subject: MaintenanceRecord, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::MaintenanceDelete)?;
    BranchScope::for_user(caller).check_branch(subject.branch_id())?;
    require_not_deleted(&subject, "maintenance")?;
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
