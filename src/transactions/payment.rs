//! Payments are opened by [booking creation][1]. After that, the branch keeps
//! them up to date as money comes in (or goes back out).
//!
//! See the [payment model.][2]
//!
//! [1]: ../booking/fn.create.html
//! [2]: ../../models/payment/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        booking::Booking,
        car::Car,
        payment::{Payment, PaymentMethod, PaymentStatus},
        user::User,
    },
    scope::BranchScope,
    transactions::require_not_deleted,
};

/// Update a booking's `Payment`. The booking (and its car) are needed to work
/// out whether the caller's branch has any say over it.
pub fn update(caller: &User, mut subject: Payment, booking: &Booking, car: &Car, method: Option<PaymentMethod>, status: Option<PaymentStatus>, transaction_ref: Option<String>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::PaymentUpdate)?;
    if subject.booking_id() != booking.id() {
        Err(Error::PaymentNotForBooking)?;
    }
    if booking.car_id() != car.id() {
        Err(Error::CarNotFound(booking.car_id().to_string()))?;
    }
    BranchScope::for_user(caller).check_booking(booking, car)?;
    require_not_deleted(&subject, "payment")?;
    if let Some(method) = method {
        subject.set_method(method);
    }
    if let Some(status) = status {
        log::debug!("payment::update() -- {} {:?} -> {:?}", subject.id(), subject.status(), status);
        subject.set_status(status);
    }
    if transaction_ref.is_some() {
        subject.set_transaction_ref(transaction_ref);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}
