//! Welcome to the rental core. This crate holds the models, the pricing
//! engine, and the workflow transactions for a multi-branch car rental
//! system: customers book cars out of branches, branch admins run their fleet,
//! and a super admin manages branches and the pricing rules.
//!
//! The [pricing engine][pricing] is the heart of it. Everything else is a set
//! of [transactions] that take the models they need, check the caller's
//! permissions, and hand back a list of [modifications][mods] for the caller
//! to persist. Storage never happens here.
//!
//! [pricing]: pricing/index.html
//! [transactions]: transactions/index.html
//! [mods]: models/struct.Modifications.html

/// A macro that standardizes including, exporting, and creating wrapper type(s)
/// for our models.
macro_rules! load_models {
    (
        @pub use
        $( ($path:ident, $model:ident, $($extratypes:ident),*), )*
    ) => {
        pub use models::{
            $( $path::{$model, $($extratypes),*}, )*
        };
    };

    (
        @pub mod
        $( ($path:ident, $($_rest:tt)*), )*
    ) => {
        $(
            pub mod $path;
        )*
    };

    // create an enum that wraps our models so modifications can carry any of
    // them, plus the conversions in and out of it.
    (
        @pub enum $enumname:ident
        $( ($path:ident, $model:ident, $($_extratypes:ident),*), )*
    ) => {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub enum $enumname {
            $(
                $model(crate::models::$path::$model),
            )*
        }

        $(
            impl From<crate::models::$path::$model> for $enumname {
                fn from(val: crate::models::$path::$model) -> Self {
                    $enumname::$model(val)
                }
            }

            impl std::convert::TryFrom<$enumname> for crate::models::$path::$model {
                type Error = crate::error::Error;

                fn try_from(val: $enumname) -> std::result::Result<Self, Self::Error> {
                    match val {
                        $enumname::$model(model) => Ok(model),
                        #[allow(unreachable_patterns)]
                        _ => Err(crate::error::Error::WrongModelType),
                    }
                }
            }
        )*
    };

    // entry point
    ($($load_type:tt)*) => {
        load_models! {
            @$($load_type)*
            // loosely in dependency order
            (branch, Branch, BranchID),
            (user, User, UserID),
            (car, Car, CarID),
            (pricing_rule, PricingRule, PricingRuleID),
            (booking, Booking, BookingID, BookingCosts, BookingStatus, Extras, InsuranceType),
            (payment, Payment, PaymentID, PaymentMethod, PaymentStatus),
            (maintenance, MaintenanceRecord, MaintenanceRecordID),
            (reminder, Reminder, ReminderID, ReminderKind),
        }
    };
}

pub mod error;
#[macro_use]
mod util;
pub mod access;
pub mod models;
pub mod pricing;
pub mod scope;
pub mod system;
pub mod transactions;

load_models!{ pub use }
