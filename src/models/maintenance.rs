//! Maintenance records are the service history of a car.

use chrono::NaiveDate;
use crate::models::{
    branch::BranchID,
    car::CarID,
};

rental_model! {
    /// A single service performed on a car.
    pub struct MaintenanceRecord {
        id: <<MaintenanceRecordID>>,
        car_id: CarID,
        /// Always the car's branch at the time of the service
        branch_id: BranchID,
        service_date: NaiveDate,
        /// Odometer reading at the time of service
        #[builder(default)]
        mileage: u64,
        /// ie "Oil change", "Service"
        #[builder(default)]
        service_type: Option<String>,
        #[builder(default)]
        notes: Option<String>,
    }
    MaintenanceRecordBuilder
}
