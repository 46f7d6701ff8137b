//! Branch scoping decides *where* a user may act. A super admin sees every
//! branch, a branch admin sees only their own, and everyone else sees no
//! branch at all.
//!
//! Scope is worked out once per caller into a `BranchScope` value, which is
//! then used as a predicate: checked directly inside transactions, or used to
//! filter lists of cars, bookings, and so on before they are shown.
//!
//! ```rust
//! use rental_core::{
//!     access::Role,
//!     models::{branch::BranchID, user::{User, UserID}},
//!     scope::BranchScope,
//! };
//! use chrono::Utc;
//!
//! let admin = User::builder()
//!     .id(UserID::new("u-1"))
//!     .roles(vec![Role::Admin])
//!     .email("ops@north.example")
//!     .name("North Ops")
//!     .branch_id(Some(BranchID::new("north")))
//!     .active(true)
//!     .created(Utc::now())
//!     .updated(Utc::now())
//!     .build()
//!     .unwrap();
//! let scope = BranchScope::for_user(&admin);
//! assert!(scope.allows_branch(&BranchID::new("north")));
//! assert!(!scope.allows_branch(&BranchID::new("south")));
//! ```

use chrono::NaiveDate;
use crate::{
    access::Role,
    error::{Error, Result},
    models::{
        booking::Booking,
        branch::BranchID,
        car::Car,
        maintenance::MaintenanceRecord,
        reminder::Reminder,
        user::User,
    },
};
use getset::CopyGetters;
use serde::{Serialize, Deserialize};

/// The set of branches a user may act on.
#[derive(Clone, Debug, PartialEq)]
pub enum BranchScope {
    All,
    Branch(BranchID),
    Nothing,
}

impl BranchScope {
    /// Work out a user's scope from their roles and branch.
    pub fn for_user(user: &User) -> Self {
        if !user.is_active() {
            return BranchScope::Nothing;
        }
        if user.has_role(&Role::SuperAdmin) {
            return BranchScope::All;
        }
        match (user.has_role(&Role::Admin), user.branch_id()) {
            (true, Some(branch_id)) => BranchScope::Branch(branch_id.clone()),
            _ => BranchScope::Nothing,
        }
    }

    pub fn allows_branch(&self, branch_id: &BranchID) -> bool {
        match self {
            BranchScope::All => true,
            BranchScope::Branch(id) => id == branch_id,
            BranchScope::Nothing => false,
        }
    }

    pub fn allows_car(&self, car: &Car) -> bool {
        self.allows_branch(car.branch_id())
    }

    /// A booking is visible from its pickup branch and from its car's branch.
    pub fn allows_booking(&self, booking: &Booking, car: &Car) -> bool {
        match self {
            BranchScope::All => true,
            BranchScope::Branch(id) => booking.involves_branch(id, car.branch_id()),
            BranchScope::Nothing => false,
        }
    }

    pub fn allows_maintenance(&self, record: &MaintenanceRecord) -> bool {
        self.allows_branch(record.branch_id())
    }

    pub fn allows_reminder(&self, reminder: &Reminder) -> bool {
        self.allows_branch(reminder.branch_id())
    }

    /// Error out unless the branch is in scope.
    pub fn check_branch(&self, branch_id: &BranchID) -> Result<()> {
        if !self.allows_branch(branch_id) {
            Err(Error::OutsideBranchScope)?;
        }
        Ok(())
    }

    /// Error out unless the booking is in scope.
    pub fn check_booking(&self, booking: &Booking, car: &Car) -> Result<()> {
        if !self.allows_booking(booking, car) {
            Err(Error::OutsideBranchScope)?;
        }
        Ok(())
    }

    /// Keep only the items this scope allows, using `branch_of` to find each
    /// item's branch.
    pub fn filter<'a, T, I, F>(&'a self, items: I, branch_of: F) -> impl Iterator<Item = T> + 'a
        where T: 'a,
              I: IntoIterator<Item = T>,
              I::IntoIter: 'a,
              F: Fn(&T) -> &BranchID + 'a,
    {
        items.into_iter().filter(move |item| self.allows_branch(branch_of(item)))
    }

    /// Count the open reminders in scope that are overdue or due today.
    /// Deleted reminders don't count.
    pub fn due_counts<'a, I>(&self, reminders: I, today: &NaiveDate) -> ReminderCounts
        where I: IntoIterator<Item = &'a Reminder>,
    {
        let mut counts = ReminderCounts::default();
        for reminder in self.filter(reminders, |r| r.branch_id()) {
            if reminder.is_deleted() {
                continue;
            }
            if reminder.is_overdue(today) {
                counts.overdue += 1;
            } else if reminder.is_due_on(today) {
                counts.due_today += 1;
            }
        }
        log::debug!("BranchScope::due_counts() -- {:?} on {}", counts, today);
        counts
    }
}

/// How many reminders need attention, as shown on a branch dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct ReminderCounts {
    overdue: usize,
    due_today: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            booking::BookingID,
            car::CarID,
            reminder::{ReminderID, ReminderKind},
            user::UserID,
        },
        util::{self, test::*},
    };

    #[test]
    fn scope_from_roles() {
        let now = util::time::now();
        let branch_id = BranchID::create();
        let super_admin = make_user(&UserID::create(), Some(vec![Role::SuperAdmin]), &now);
        assert_eq!(BranchScope::for_user(&super_admin), BranchScope::All);

        let admin = make_admin(&UserID::create(), &branch_id, &now);
        assert_eq!(BranchScope::for_user(&admin), BranchScope::Branch(branch_id.clone()));

        let mut unbound = admin.clone();
        unbound.set_branch_id(None);
        assert_eq!(BranchScope::for_user(&unbound), BranchScope::Nothing);

        let customer = make_user(&UserID::create(), None, &now);
        assert_eq!(BranchScope::for_user(&customer), BranchScope::Nothing);

        let mut inactive = super_admin.clone();
        inactive.set_active(false);
        assert_eq!(BranchScope::for_user(&inactive), BranchScope::Nothing);
    }

    #[test]
    fn bookings_visible_from_pickup_or_car_branch() {
        let now = util::time::now();
        let north = BranchID::create();
        let south = BranchID::create();
        let east = BranchID::create();
        let car = make_car(&CarID::create(), &south, num!(900), &now);
        let booking = make_booking(&BookingID::create(), &UserID::create(), &car, &north, date(2024, 3, 4), date(2024, 3, 6), &now);

        assert!(BranchScope::Branch(north.clone()).allows_booking(&booking, &car));
        assert!(BranchScope::Branch(south.clone()).allows_booking(&booking, &car));
        assert!(!BranchScope::Branch(east.clone()).allows_booking(&booking, &car));
        assert!(BranchScope::All.allows_booking(&booking, &car));
        assert!(!BranchScope::Nothing.allows_booking(&booking, &car));
        assert_eq!(BranchScope::Branch(east).check_booking(&booking, &car), Err(Error::OutsideBranchScope));
    }

    #[test]
    fn filters_cars() {
        let now = util::time::now();
        let north = BranchID::create();
        let south = BranchID::create();
        let cars = vec![
            make_car(&CarID::create(), &north, num!(900), &now),
            make_car(&CarID::create(), &south, num!(1200), &now),
            make_car(&CarID::create(), &north, num!(700), &now),
        ];
        let scope = BranchScope::Branch(north.clone());
        let visible = scope.filter(cars.iter(), |car| car.branch_id()).collect::<Vec<_>>();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|car| car.branch_id() == &north));
        assert!(scope.allows_car(visible[0]));

        assert_eq!(BranchScope::All.filter(cars.iter(), |car| car.branch_id()).count(), 3);
        assert_eq!(BranchScope::Nothing.filter(cars.iter(), |car| car.branch_id()).count(), 0);
    }

    #[test]
    fn counts_due_reminders_in_scope() {
        let now = util::time::now();
        let north = BranchID::create();
        let south = BranchID::create();
        let today = date(2024, 6, 10);
        let reminder = |branch_id: &BranchID, due: NaiveDate| {
            make_reminder(&ReminderID::create(), &CarID::create(), branch_id, ReminderKind::Service, due, &now)
        };
        let mut done = reminder(&north, date(2024, 6, 1));
        done.set_completed(Some(now.clone()));
        let mut gone = reminder(&north, date(2024, 6, 2));
        gone.set_deleted(Some(now.clone()));
        let reminders = vec![
            reminder(&north, date(2024, 6, 1)),
            reminder(&north, date(2024, 6, 9)),
            reminder(&north, today.clone()),
            reminder(&north, date(2024, 6, 11)),
            reminder(&south, date(2024, 6, 1)),
            reminder(&south, today.clone()),
            reminder(&south, today.clone()),
            done,
            gone,
        ];

        let counts = BranchScope::Branch(north.clone()).due_counts(&reminders, &today);
        assert_eq!(counts.overdue(), 2);
        assert_eq!(counts.due_today(), 1);

        let counts = BranchScope::Branch(south.clone()).due_counts(&reminders, &today);
        assert_eq!(counts.overdue(), 1);
        assert_eq!(counts.due_today(), 2);

        let counts = BranchScope::All.due_counts(reminders.iter(), &today);
        assert_eq!(counts.overdue(), 3);
        assert_eq!(counts.due_today(), 3);

        assert_eq!(BranchScope::Nothing.due_counts(&reminders, &today), ReminderCounts::default());
    }
}
