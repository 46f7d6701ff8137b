//! Reminders keep upcoming work on a car in front of its branch. Ticking off a
//! service reminder logs the service in the car's maintenance history.
//!
//! See the [reminder model.][1]
//!
//! [1]: ../../models/reminder/index.html

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        car::Car,
        maintenance::MaintenanceRecordID,
        reminder::{Reminder, ReminderID, ReminderKind},
        user::User,
    },
    scope::BranchScope,
    transactions::{maintenance, require_not_deleted},
};

fn scope_check(caller: &User, reminder: &Reminder) -> Result<()> {
    if !BranchScope::for_user(caller).allows_reminder(reminder) {
        Err(Error::OutsideBranchScope)?;
    }
    Ok(())
}

/// Create a reminder for a car. It's filed under the car's branch.
pub fn create(caller: &User, id: ReminderID, car: &Car, kind: ReminderKind, due: NaiveDate, notes: Option<String>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ReminderCreate)?;
    BranchScope::for_user(caller).check_branch(car.branch_id())?;
    if car.is_deleted() {
        Err(Error::ObjectIsInactive("car".into()))?;
    }
    let model = Reminder::builder()
        .id(id)
        .car_id(car.id().clone())
        .branch_id(car.branch_id().clone())
        .kind(kind)
        .due(due)
        .notes(notes)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    log::debug!("reminder::create() -- {} for {} due {}", model.kind().label(), car.id(), model.due());
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `Reminder`
pub fn update(caller: &User, mut subject: Reminder, kind: Option<ReminderKind>, due: Option<NaiveDate>, notes: Option<String>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ReminderUpdate)?;
    scope_check(caller, &subject)?;
    require_not_deleted(&subject, "reminder")?;
    if let Some(kind) = kind {
        subject.set_kind(kind);
    }
    if let Some(due) = due {
        subject.set_due(due);
    }
    if notes.is_some() {
        subject.set_notes(notes);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Flip a reminder between open and completed.
///
/// Completing a `Service` reminder also logs a service on the car, dated
/// today at the car's current mileage. Pass `already_logged` if the car
/// already has a maintenance record for today so we don't log it twice.
/// `maintenance_id` is only used if a record gets created.
pub fn toggle_complete(caller: &User, mut subject: Reminder, car: Car, maintenance_id: MaintenanceRecordID, already_logged: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ReminderUpdate)?;
    scope_check(caller, &subject)?;
    require_not_deleted(&subject, "reminder")?;
    if subject.car_id() != car.id() {
        Err(Error::CarNotFound(subject.car_id().to_string()))?;
    }
    let mut mods = Modifications::new();
    if subject.is_completed() {
        subject.set_completed(None);
    } else {
        subject.set_completed(Some(now.clone()));
        if subject.kind() == &ReminderKind::Service && !already_logged {
            caller.access_check(Permission::MaintenanceCreate)?;
            // the record lands at the car's branch, which may have moved
            BranchScope::for_user(caller).check_branch(car.branch_id())?;
            let today = now.naive_utc().date();
            let mileage = car.mileage().clone();
            maintenance::log_service(car, maintenance_id, today, mileage, Some(subject.kind().label().into()), subject.notes().clone(), now, &mut mods)?;
        }
    }
    log::debug!("reminder::toggle_complete() -- {} completed: {}", subject.id(), subject.is_completed());
    subject.set_updated(now.clone());
    mods.push(Op::Update, subject);
    Ok(mods)
}

/// Delete a `Reminder`
pub fn delete(caller: &User, mut subject: Reminder, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ReminderDelete)?;
    scope_check(caller, &subject)?;
    require_not_deleted(&subject, "reminder")?;
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
