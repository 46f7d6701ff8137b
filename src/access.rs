//! The access module defines the various top-level permissions within the
//! system and the roles that contain those permissions.
//!
//! Roles can have multiple Permission objects. Permissions are additive,
//! meaning everyone starts with *no* permissions (returning
//! [Error::InsufficientPrivileges][err_priv]) and permissions are added
//! (allowed) from there.
//!
//! Roles only say *what* a user may do. *Where* a branch admin may do it is
//! handled separately by the [branch scope][scope].
//!
//! [err_priv]: ../error/enum.Error.html#variant.InsufficientPrivileges
//! [scope]: ../scope/index.html

use crate::error::{Error, Result};
use serde::{Serialize, Deserialize};

/// Define the system-wide permissions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Permission {
    All,
    AllBut(Vec<Permission>),

    BookingCancelOwn,
    BookingCreate,
    /// Confirm, cancel, or complete bookings
    BookingManage,

    BranchCreate,
    BranchDelete,
    BranchUpdate,

    CarCreate,
    CarDelete,
    CarUpdate,

    MaintenanceCreate,
    MaintenanceDelete,
    MaintenanceUpdate,

    PaymentUpdate,

    PricingRuleCreate,
    PricingRuleDelete,
    PricingRuleUpdate,

    ReminderCreate,
    ReminderDelete,
    ReminderUpdate,

    UserAdminCreate,
    UserAdminUpdate,
    UserCreate,
    UserDelete,
    UserSetRoles,
    UserUpdate,
}

/// Define the system-wide roles users can have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// Runs the whole operation: branches, pricing, admins.
    SuperAdmin,
    /// Runs a single branch's fleet and bookings.
    Admin,
    Customer,
    Guest,
}

impl Role {
    /// For a given role, return the permissions that role has access to.
    pub fn permissions(&self) -> Vec<Permission> {
        match *self {
            Role::SuperAdmin => {
                vec![Permission::All]
            }
            Role::Admin => {
                vec![
                    Permission::BookingManage,
                    Permission::CarCreate,
                    Permission::CarUpdate,
                    Permission::CarDelete,
                    Permission::MaintenanceCreate,
                    Permission::MaintenanceUpdate,
                    Permission::MaintenanceDelete,
                    Permission::PaymentUpdate,
                    Permission::ReminderCreate,
                    Permission::ReminderUpdate,
                    Permission::ReminderDelete,
                    Permission::UserUpdate,
                ]
            }
            Role::Customer => {
                vec![
                    Permission::UserUpdate,
                    Permission::UserDelete,
                    Permission::BookingCreate,
                    Permission::BookingCancelOwn,
                ]
            }
            Role::Guest => {
                vec![
                    Permission::UserCreate,
                ]
            }
        }
    }

    /// Determine if a role has a specific permission.
    pub fn can(&self, perm: &Permission) -> bool {
        for p in &self.permissions() {
            match p {
                Permission::All => {
                    return true;
                }
                Permission::AllBut(x) => {
                    return !x.contains(perm);
                }
                _ => {
                    if p == perm {
                        return true
                    }
                }
            }
        }
        false
    }
}

/// Check if a guest can perform an action.
pub fn guest_check(perm: Permission) -> Result<()> {
    if (Role::Guest).can(&perm) {
        Ok(())
    } else {
        Err(Error::InsufficientPrivileges)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn permissions_work() {
        let super_admin = Role::SuperAdmin;
        assert!(super_admin.can(&Permission::All));
        assert!(super_admin.can(&Permission::PricingRuleCreate));
        assert!(super_admin.can(&Permission::BranchDelete));
        assert!(super_admin.can(&Permission::UserAdminCreate));
        assert!(super_admin.can(&Permission::BookingManage));

        let admin = Role::Admin;
        assert!(admin.can(&Permission::CarCreate));
        assert!(admin.can(&Permission::BookingManage));
        assert!(admin.can(&Permission::ReminderUpdate));
        assert!(!admin.can(&Permission::PricingRuleCreate));
        assert!(!admin.can(&Permission::PricingRuleDelete));
        assert!(!admin.can(&Permission::BranchCreate));
        assert!(!admin.can(&Permission::UserAdminCreate));
        assert!(!admin.can(&Permission::BookingCreate));

        let customer = Role::Customer;
        assert!(customer.can(&Permission::BookingCreate));
        assert!(customer.can(&Permission::BookingCancelOwn));
        assert!(!customer.can(&Permission::BookingManage));
        assert!(!customer.can(&Permission::CarUpdate));
    }

    #[test]
    fn guests() {
        assert!(guest_check(Permission::UserCreate).is_ok());
        assert_eq!(guest_check(Permission::BookingCreate), Err(Error::InsufficientPrivileges));
    }
}
