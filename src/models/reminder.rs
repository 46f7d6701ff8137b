//! Reminders flag upcoming work on a car (a service, an insurance renewal...)
//! so branch admins see it coming.

use chrono::{DateTime, NaiveDate, Utc};
use crate::models::{
    branch::BranchID,
    car::CarID,
};
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReminderKind {
    /// Completing a service reminder logs a maintenance record.
    Service,
    Insurance,
    Inspection,
    Other(String),
}

impl ReminderKind {
    pub fn label(&self) -> &str {
        match self {
            ReminderKind::Service => "Service",
            ReminderKind::Insurance => "Insurance",
            ReminderKind::Inspection => "Inspection",
            ReminderKind::Other(label) => label.as_str(),
        }
    }
}

rental_model! {
    /// The reminder model.
    pub struct Reminder {
        id: <<ReminderID>>,
        car_id: CarID,
        branch_id: BranchID,
        kind: ReminderKind,
        /// When the work is due
        due: NaiveDate,
        #[builder(default)]
        completed: Option<DateTime<Utc>>,
        #[builder(default)]
        notes: Option<String>,
    }
    ReminderBuilder
}

impl Reminder {
    pub fn is_completed(&self) -> bool {
        self.completed().is_some()
    }

    /// Whether the reminder is still open past its due date.
    pub fn is_overdue(&self, today: &NaiveDate) -> bool {
        !self.is_completed() && self.due() < today
    }

    /// Whether the reminder is still open and falls due on `today`.
    pub fn is_due_on(&self, today: &NaiveDate) -> bool {
        !self.is_completed() && self.due() == today
    }
}
