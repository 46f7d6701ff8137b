//! Users are customers, branch admins, and the super admin. Customers sign
//! themselves up; branch admins are created by the super admin and bound to a
//! branch.
//!
//! See the [user model.][1]
//!
//! [1]: ../../models/user/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::{self, Permission, Role},
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        branch::{Branch, BranchID},
        user::{User, UserID},
    },
    transactions::{require_active, require_not_deleted},
};

/// Sign up as a new customer. There's no caller here: anyone may register.
pub fn create<T: Into<String>>(id: UserID, email: T, name: T, address: Option<String>, now: &DateTime<Utc>) -> Result<Modifications> {
    access::guest_check(Permission::UserCreate)?;
    let model = User::builder()
        .id(id)
        .roles(vec![Role::Customer])
        .email(email.into())
        .name(name.into())
        .address(address)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    log::debug!("user::create() -- customer {}", model.id());
    Ok(Modifications::new_single(Op::Create, model))
}

/// Create a branch admin, bound to the given branch.
pub fn create_admin<T: Into<String>>(caller: &User, id: UserID, email: T, name: T, branch: &Branch, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::UserAdminCreate)?;
    require_active(branch, "branch")?;
    let model = User::builder()
        .id(id)
        .roles(vec![Role::Admin])
        .email(email.into())
        .name(name.into())
        .branch_id(Some(branch.id().clone()))
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    log::debug!("user::create_admin() -- admin {} at branch {}", model.id(), branch.id());
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update a user's profile. Users may update themselves; updating anyone else
/// takes admin rights over users.
pub fn update(caller: &User, mut subject: User, email: Option<String>, name: Option<String>, address: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    if caller.id() == subject.id() {
        caller.access_check(Permission::UserUpdate)?;
    } else {
        caller.access_check(Permission::UserAdminUpdate)?;
    }
    require_not_deleted(&subject, "user")?;
    if let Some(email) = email {
        subject.set_email(email);
    }
    if let Some(name) = name {
        subject.set_name(name);
    }
    if address.is_some() {
        subject.set_address(address);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Update a user's roles. Anyone holding the admin role must be bound to a
/// branch, so `branch_id` is required when handing out `Role::Admin`.
pub fn set_roles(caller: &User, mut subject: User, roles: Vec<Role>, branch_id: Option<BranchID>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::UserSetRoles)?;
    require_not_deleted(&subject, "user")?;
    if roles.contains(&Role::Admin) && branch_id.is_none() {
        Err(Error::BranchRequired)?;
    }
    log::debug!("user::set_roles() -- {} -> {:?}", subject.id(), roles);
    subject.set_roles(roles);
    subject.set_branch_id(branch_id);
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a user. Customers may close their own account; removing anyone else
/// takes admin rights over users.
pub fn delete(caller: &User, mut subject: User, now: &DateTime<Utc>) -> Result<Modifications> {
    if caller.id() == subject.id() {
        caller.access_check(Permission::UserDelete)?;
    } else {
        caller.access_check(Permission::UserAdminUpdate)?;
    }
    require_not_deleted(&subject, "user")?;
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
