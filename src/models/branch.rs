//! A branch is a rental location. Branches own a fleet of cars, employ admins,
//! and act as the pickup and dropoff points of bookings.

use crate::models::user::UserID;

rental_model! {
    /// The branch model.
    pub struct Branch {
        id: <<BranchID>>,
        /// This branch's name.
        name: String,
        /// Street address, if we have one
        #[builder(default)]
        address: Option<String>,
        #[builder(default)]
        phone: Option<String>,
        #[builder(default)]
        email: Option<String>,
        /// The user managing this branch, if any
        #[builder(default)]
        manager_id: Option<UserID>,
    }
    BranchBuilder
}
