//! Branches are the rental locations. Only the super admin opens, edits, or
//! closes them.
//!
//! See the [branch model.][1]
//!
//! [1]: ../../models/branch/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        branch::{Branch, BranchID},
        user::{User, UserID},
    },
    transactions::require_not_deleted,
};

/// Create a new `Branch`.
pub fn create<T: Into<String>>(caller: &User, id: BranchID, name: T, address: Option<String>, phone: Option<String>, email: Option<String>, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::BranchCreate)?;
    let model = Branch::builder()
        .id(id)
        .name(name.into())
        .address(address)
        .phone(phone)
        .email(email)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    log::debug!("branch::create() -- {} ({})", model.name(), model.id());
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `Branch`
pub fn update(caller: &User, mut subject: Branch, name: Option<String>, address: Option<String>, phone: Option<String>, email: Option<String>, manager_id: Option<UserID>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::BranchUpdate)?;
    require_not_deleted(&subject, "branch")?;
    if let Some(name) = name {
        subject.set_name(name);
    }
    if address.is_some() {
        subject.set_address(address);
    }
    if phone.is_some() {
        subject.set_phone(phone);
    }
    if email.is_some() {
        subject.set_email(email);
    }
    if manager_id.is_some() {
        subject.set_manager_id(manager_id);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `Branch`
pub fn delete(caller: &User, mut subject: Branch, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::BranchDelete)?;
    require_not_deleted(&subject, "branch")?;
    subject.set_deleted(Some(now.clone()));
    log::debug!("branch::delete() -- {}", subject.id());
    Ok(Modifications::new_single(Op::Delete, subject))
}
