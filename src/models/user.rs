//! The user is the point of access to the entire system. Customers, branch
//! admins, and the super admin are all users; what separates them is their
//! roles (and, for branch admins, the branch they are bound to).

use crate::{
    access::{Permission, Role},
    error::{Error, Result},
    models::branch::BranchID,
};

rental_model! {
    /// The `User` model describes a user of the system.
    pub struct User {
        id: <<UserID>>,
        /// Defines this user's roles, ie what permissions they have access to.
        roles: Vec<Role>,
        /// The user's email.
        email: String,
        /// The user's full name.
        name: String,
        #[builder(default)]
        address: Option<String>,
        /// The branch a branch admin works at. Customers and the super admin
        /// have none.
        #[builder(default)]
        branch_id: Option<BranchID>,
    }
    UserBuilder
}

impl User {
    /// Determines if a user can perform an action (base on their roles).
    pub fn can(&self, permission: &Permission) -> bool {
        if !self.is_active() {
            return false;
        }
        for role in self.roles() {
            if role.can(permission) {
                return true;
            }
        }
        false
    }

    /// Check if this user can perform an action.
    pub fn access_check(&self, permission: Permission) -> Result<()> {
        if !self.can(&permission) {
            Err(Error::InsufficientPrivileges)?;
        }
        Ok(())
    }

    /// Whether this user holds the given role.
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles().contains(role)
    }
}
