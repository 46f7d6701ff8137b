//! Bookings are where pricing meets the customer. A customer books a car off a
//! [Quote], which opens the booking as pending alongside a pending payment for
//! the quoted total. From there the branch confirms it, completes it when the
//! car comes back, or cancels it; a customer can also back out of their own
//! booking while it's still pending.
//!
//! Admins act on bookings picked up at their branch, or for cars stationed at
//! their branch.
//!
//! See the [booking model.][1]
//!
//! [Quote]: ../../pricing/quote/struct.Quote.html
//! [1]: ../../models/booking/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        booking::{Booking, BookingID, BookingStatus},
        branch::Branch,
        car::Car,
        payment::{Payment, PaymentID, PaymentMethod, PaymentStatus},
        user::User,
    },
    pricing::Quote,
    scope::BranchScope,
    transactions::{require_active, require_not_deleted},
};

/// Booking notes are capped at this many characters.
pub const MAX_NOTES_LENGTH: usize = 250;

/// Create a booking (and its pending payment) from a quote.
///
/// The car must be rentable and stationed at the pickup branch, and both
/// branches must be open. The booking's costs are copied from the quote.
pub fn create(caller: &User, id: BookingID, payment_id: PaymentID, car: &Car, pickup: &Branch, dropoff: &Branch, quote: &Quote, method: PaymentMethod, notes: Option<String>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::BookingCreate)?;
    if !car.is_rentable() {
        // say why: gone or parked comes before simply unavailable
        require_active(car, "car")?;
        Err(Error::CarUnavailable)?;
    }
    require_active(pickup, "branch")?;
    require_active(dropoff, "branch")?;
    if car.branch_id() != pickup.id() {
        Err(Error::CarNotAtBranch)?;
    }
    if quote.car_id() != car.id() {
        Err(Error::QuoteMismatch)?;
    }
    if quote.end() < quote.start() {
        Err(Error::InvalidDateRange)?;
    }
    if let Some(notes) = notes.as_ref() {
        if notes.chars().count() > MAX_NOTES_LENGTH {
            Err(Error::NotesTooLong)?;
        }
    }
    let booking = Booking::builder()
        .id(id)
        .customer_id(caller.id().clone())
        .car_id(car.id().clone())
        .pickup_branch_id(pickup.id().clone())
        .dropoff_branch_id(dropoff.id().clone())
        .start(quote.start().clone())
        .end(quote.end().clone())
        .extras(quote.extras().clone())
        .costs(quote.costs().clone())
        .status(BookingStatus::Pending)
        .notes(notes)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    let payment = Payment::builder()
        .id(payment_id)
        .booking_id(booking.id().clone())
        .amount(booking.costs().total().clone())
        .method(method)
        .status(PaymentStatus::Pending)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    log::debug!("booking::create() -- {} for {} ({} .. {}) total {}", booking.id(), car.display_name(), booking.start(), booking.end(), booking.costs().total());
    let mut mods = Modifications::new();
    mods.push(Op::Create, booking);
    mods.push(Op::Create, payment);
    Ok(mods)
}

/// Shared checks for the branch side of the booking workflow.
fn manage_check(caller: &User, booking: &Booking, car: &Car) -> Result<()> {
    caller.access_check(Permission::BookingManage)?;
    if booking.car_id() != car.id() {
        Err(Error::CarNotFound(booking.car_id().to_string()))?;
    }
    BranchScope::for_user(caller).check_booking(booking, car)?;
    require_not_deleted(booking, "booking")?;
    Ok(())
}

/// Move a booking's payment (if we were handed one) into a pending refund.
fn refund(booking: &Booking, payment: Option<Payment>, now: &DateTime<Utc>, mods: &mut Modifications) -> Result<()> {
    if let Some(mut payment) = payment {
        if payment.booking_id() != booking.id() {
            Err(Error::PaymentNotForBooking)?;
        }
        payment.set_status(PaymentStatus::RefundPending);
        payment.set_updated(now.clone());
        mods.push(Op::Update, payment);
    }
    Ok(())
}

/// Confirm a pending booking.
pub fn confirm(caller: &User, mut subject: Booking, car: &Car, now: &DateTime<Utc>) -> Result<Modifications> {
    manage_check(caller, &subject, car)?;
    subject.transition(BookingStatus::Confirmed)?;
    subject.set_updated(now.clone());
    log::debug!("booking::confirm() -- {}", subject.id());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Mark a confirmed booking as completed (the car is back).
pub fn complete(caller: &User, mut subject: Booking, car: &Car, now: &DateTime<Utc>) -> Result<Modifications> {
    manage_check(caller, &subject, car)?;
    subject.transition(BookingStatus::Completed)?;
    subject.set_updated(now.clone());
    log::debug!("booking::complete() -- {}", subject.id());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Cancel a pending or confirmed booking from the branch side. If the
/// booking's payment is passed in, it moves to a pending refund.
pub fn cancel(caller: &User, mut subject: Booking, car: &Car, payment: Option<Payment>, now: &DateTime<Utc>) -> Result<Modifications> {
    manage_check(caller, &subject, car)?;
    subject.transition(BookingStatus::Cancelled)?;
    subject.set_updated(now.clone());
    log::debug!("booking::cancel() -- {}", subject.id());
    let mut mods = Modifications::new();
    refund(&subject, payment, now, &mut mods)?;
    mods.push(Op::Update, subject);
    Ok(mods)
}

/// Let a customer cancel their own booking, as long as the branch hasn't
/// confirmed it yet.
pub fn cancel_own(caller: &User, mut subject: Booking, payment: Option<Payment>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::BookingCancelOwn)?;
    if subject.customer_id() != caller.id() {
        Err(Error::BookingNotOwned)?;
    }
    require_not_deleted(&subject, "booking")?;
    if subject.status() != &BookingStatus::Pending {
        Err(Error::BookingStatusInvalid { from: *subject.status(), to: BookingStatus::Cancelled })?;
    }
    subject.transition(BookingStatus::Cancelled)?;
    subject.set_updated(now.clone());
    log::debug!("booking::cancel_own() -- {}", subject.id());
    let mut mods = Modifications::new();
    refund(&subject, payment, now, &mut mods)?;
    mods.push(Op::Update, subject);
    Ok(mods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access::Role,
        models::{
            booking::{Extras, InsuranceType},
            branch::BranchID,
            car::CarID,
            pricing_rule::PricingRule,
            user::UserID,
        },
        pricing::PricingEngine,
        util::{self, test::{self, *}},
    };
    use chrono::NaiveDate;

    struct Fixture {
        now: DateTime<Utc>,
        customer: User,
        admin: User,
        north: Branch,
        south: Branch,
        car: Car,
    }

    fn fixture() -> Fixture {
        let now = util::time::now();
        let north = make_branch(&BranchID::create(), "Northside", &now);
        let south = make_branch(&BranchID::create(), "Southside", &now);
        let car = make_car(&CarID::create(), north.id(), num!(1000), &now);
        Fixture {
            customer: make_user(&UserID::create(), None, &now),
            admin: make_admin(&UserID::create(), north.id(), &now),
            north,
            south,
            car,
            now,
        }
    }

    fn quote_for(car: &Car, start: NaiveDate, end: NaiveDate, extras: Extras) -> Quote {
        let cars = vec![car.clone()];
        let rules: Vec<PricingRule> = vec![];
        PricingEngine::new(cars, rules).quote(car.id(), start, end, extras).unwrap()
    }

    #[test]
    fn can_create() {
        let f = fixture();
        let id = BookingID::create();
        let payment_id = PaymentID::create();
        // thu .. mon
        let quote = quote_for(&f.car, date(2024, 3, 7), date(2024, 3, 11), Extras::new(InsuranceType::Standard, true));

        let testfn = |caller: &User| {
            create(caller, id.clone(), payment_id.clone(), &f.car, &f.north, &f.south, &quote, PaymentMethod::Transfer, Some("late pickup".into()), &f.now)
        };

        let mods = testfn(&f.customer).unwrap().into_vec();
        assert_eq!(mods.len(), 2);
        let booking = mods[0].clone().expect_op::<Booking>(Op::Create).unwrap();
        assert_eq!(booking.id(), &id);
        assert_eq!(booking.customer_id(), f.customer.id());
        assert_eq!(booking.car_id(), f.car.id());
        assert_eq!(booking.pickup_branch_id(), f.north.id());
        assert_eq!(booking.dropoff_branch_id(), f.south.id());
        assert_eq!(booking.start(), &date(2024, 3, 7));
        assert_eq!(booking.end(), &date(2024, 3, 11));
        assert_eq!(booking.extras(), &Extras::new(InsuranceType::Standard, true));
        assert_eq!(booking.costs().base(), &num!(4200));
        assert_eq!(booking.costs().insurance(), &num!(1400));
        assert_eq!(booking.costs().child_seat(), &num!(1000));
        assert_eq!(booking.costs().total(), &num!(6600));
        assert_eq!(booking.status(), &BookingStatus::Pending);
        assert_eq!(booking.notes(), &Some("late pickup".into()));
        assert_eq!(booking.created(), &f.now);

        let payment = mods[1].clone().expect_op::<Payment>(Op::Create).unwrap();
        assert_eq!(payment.id(), &payment_id);
        assert_eq!(payment.booking_id(), &id);
        assert_eq!(payment.amount(), &num!(6600));
        assert_eq!(payment.method(), &PaymentMethod::Transfer);
        assert_eq!(payment.status(), &PaymentStatus::Pending);
        assert_eq!(payment.transaction_ref(), &None);

        test::permissions_checks(&f.customer, &testfn);
        assert_eq!(testfn(&f.admin), Err(Error::InsufficientPrivileges));
    }

    #[test]
    fn create_checks_car_and_branches() {
        let f = fixture();
        let quote = quote_for(&f.car, date(2024, 3, 7), date(2024, 3, 11), Extras::default());
        let testfn = |car: &Car, pickup: &Branch, dropoff: &Branch, quote: &Quote, notes: Option<String>| {
            create(&f.customer, BookingID::create(), PaymentID::create(), car, pickup, dropoff, quote, PaymentMethod::Card, notes, &f.now)
        };
        assert!(testfn(&f.car, &f.north, &f.north, &quote, None).is_ok());

        let mut car = f.car.clone();
        car.set_available(false);
        assert_eq!(testfn(&car, &f.north, &f.north, &quote, None), Err(Error::CarUnavailable));
        let mut car = f.car.clone();
        car.set_active(false);
        assert_eq!(testfn(&car, &f.north, &f.north, &quote, None), Err(Error::ObjectIsInactive("car".into())));
        car.set_available(false);
        assert_eq!(testfn(&car, &f.north, &f.north, &quote, None), Err(Error::ObjectIsInactive("car".into())));
        let mut car = f.car.clone();
        car.set_deleted(Some(f.now.clone()));
        assert!(!car.is_rentable());
        assert_eq!(testfn(&car, &f.north, &f.north, &quote, None), Err(Error::ObjectIsInactive("car".into())));

        let mut closed = f.south.clone();
        closed.set_deleted(Some(f.now.clone()));
        assert_eq!(testfn(&f.car, &f.north, &closed, &quote, None), Err(Error::ObjectIsInactive("branch".into())));

        // the car lives at north
        assert_eq!(testfn(&f.car, &f.south, &f.north, &quote, None), Err(Error::CarNotAtBranch));

        let other_car = make_car(&CarID::create(), f.north.id(), num!(500), &f.now);
        let other_quote = quote_for(&other_car, date(2024, 3, 7), date(2024, 3, 11), Extras::default());
        assert_eq!(testfn(&f.car, &f.north, &f.north, &other_quote, None), Err(Error::QuoteMismatch));

        let backwards = quote_for(&f.car, date(2024, 3, 11), date(2024, 3, 7), Extras::default());
        assert_eq!(testfn(&f.car, &f.north, &f.north, &backwards, None), Err(Error::InvalidDateRange));

        // same-day rentals are fine
        let same_day = quote_for(&f.car, date(2024, 3, 7), date(2024, 3, 7), Extras::default());
        assert!(testfn(&f.car, &f.north, &f.north, &same_day, None).is_ok());

        let notes = "x".repeat(MAX_NOTES_LENGTH);
        assert!(testfn(&f.car, &f.north, &f.north, &quote, Some(notes)).is_ok());
        let notes = "x".repeat(MAX_NOTES_LENGTH + 1);
        assert_eq!(testfn(&f.car, &f.north, &f.north, &quote, Some(notes)), Err(Error::NotesTooLong));
    }

    #[test]
    fn can_confirm_and_complete() {
        let f = fixture();
        let booking = make_booking(&BookingID::create(), f.customer.id(), &f.car, f.north.id(), date(2024, 3, 7), date(2024, 3, 11), &f.now);

        let now2 = util::time::now();
        let confirmfn = |caller: &User| {
            confirm(caller, booking.clone(), &f.car, &now2)
        };
        let mods = confirmfn(&f.admin).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let confirmed = mods[0].clone().expect_op::<Booking>(Op::Update).unwrap();
        assert_eq!(confirmed.status(), &BookingStatus::Confirmed);
        assert_eq!(confirmed.updated(), &now2);

        test::permissions_checks(&f.admin, &confirmfn);
        test::branch_scope_checks(&f.admin, &confirmfn);
        assert_eq!(confirmfn(&f.customer), Err(Error::InsufficientPrivileges));
        test::double_deleted_tester(&booking, "booking", |subject| confirm(&f.admin, subject, &f.car, &now2));

        // can't confirm twice
        let res = confirm(&f.admin, confirmed.clone(), &f.car, &now2);
        assert_eq!(res, Err(Error::BookingStatusInvalid { from: BookingStatus::Confirmed, to: BookingStatus::Confirmed }));
        // can't complete before confirming
        let res = complete(&f.admin, booking.clone(), &f.car, &now2);
        assert_eq!(res, Err(Error::BookingStatusInvalid { from: BookingStatus::Pending, to: BookingStatus::Completed }));

        let mods = complete(&f.admin, confirmed.clone(), &f.car, &now2).unwrap().into_vec();
        let completed = mods[0].clone().expect_op::<Booking>(Op::Update).unwrap();
        assert_eq!(completed.status(), &BookingStatus::Completed);

        let other_car = make_car(&CarID::create(), f.north.id(), num!(500), &f.now);
        assert_eq!(confirm(&f.admin, booking.clone(), &other_car, &now2), Err(Error::CarNotFound(booking.car_id().to_string())));
    }

    #[test]
    fn admins_reach_bookings_through_the_car() {
        let f = fixture();
        // picked up at south, but the car lives at north
        let booking = make_booking(&BookingID::create(), f.customer.id(), &f.car, f.south.id(), date(2024, 3, 7), date(2024, 3, 11), &f.now);
        assert!(confirm(&f.admin, booking.clone(), &f.car, &f.now).is_ok());
        let south_admin = make_admin(&UserID::create(), f.south.id(), &f.now);
        assert!(confirm(&south_admin, booking.clone(), &f.car, &f.now).is_ok());
        let east_admin = make_admin(&UserID::create(), &BranchID::create(), &f.now);
        assert_eq!(confirm(&east_admin, booking.clone(), &f.car, &f.now), Err(Error::OutsideBranchScope));
        let super_admin = make_user(&UserID::create(), Some(vec![Role::SuperAdmin]), &f.now);
        assert!(confirm(&super_admin, booking.clone(), &f.car, &f.now).is_ok());
    }

    #[test]
    fn can_cancel() {
        let f = fixture();
        let booking = make_booking(&BookingID::create(), f.customer.id(), &f.car, f.north.id(), date(2024, 3, 7), date(2024, 3, 11), &f.now);
        let mut payment = make_payment(&PaymentID::create(), &booking, &f.now);
        payment.set_status(PaymentStatus::Paid);

        let now2 = util::time::now();
        let testfn = |caller: &User| {
            cancel(caller, booking.clone(), &f.car, Some(payment.clone()), &now2)
        };
        let mods = testfn(&f.admin).unwrap().into_vec();
        assert_eq!(mods.len(), 2);
        let payment2 = mods[0].clone().expect_op::<Payment>(Op::Update).unwrap();
        assert_eq!(payment2.status(), &PaymentStatus::RefundPending);
        assert_eq!(payment2.updated(), &now2);
        let cancelled = mods[1].clone().expect_op::<Booking>(Op::Update).unwrap();
        assert_eq!(cancelled.status(), &BookingStatus::Cancelled);

        test::permissions_checks(&f.admin, &testfn);
        test::branch_scope_checks(&f.admin, &testfn);

        // confirmed bookings can be cancelled too, with or without a payment
        let mut confirmed = booking.clone();
        confirmed.set_status(BookingStatus::Confirmed);
        let mods = cancel(&f.admin, confirmed, &f.car, None, &now2).unwrap().into_vec();
        assert_eq!(mods.len(), 1);

        let mut completed = booking.clone();
        completed.set_status(BookingStatus::Completed);
        let res = cancel(&f.admin, completed, &f.car, None, &now2);
        assert_eq!(res, Err(Error::BookingStatusInvalid { from: BookingStatus::Completed, to: BookingStatus::Cancelled }));

        let other_booking = make_booking(&BookingID::create(), f.customer.id(), &f.car, f.north.id(), date(2024, 3, 7), date(2024, 3, 11), &f.now);
        let other_payment = make_payment(&PaymentID::create(), &other_booking, &f.now);
        let res = cancel(&f.admin, booking.clone(), &f.car, Some(other_payment), &now2);
        assert_eq!(res, Err(Error::PaymentNotForBooking));
    }

    #[test]
    fn can_cancel_own() {
        let f = fixture();
        let booking = make_booking(&BookingID::create(), f.customer.id(), &f.car, f.north.id(), date(2024, 3, 7), date(2024, 3, 11), &f.now);
        let payment = make_payment(&PaymentID::create(), &booking, &f.now);

        let now2 = util::time::now();
        let testfn = |caller: &User| {
            cancel_own(caller, booking.clone(), Some(payment.clone()), &now2)
        };
        let mods = testfn(&f.customer).unwrap().into_vec();
        assert_eq!(mods.len(), 2);
        let payment2 = mods[0].clone().expect_op::<Payment>(Op::Update).unwrap();
        assert_eq!(payment2.status(), &PaymentStatus::RefundPending);
        let cancelled = mods[1].clone().expect_op::<Booking>(Op::Update).unwrap();
        assert_eq!(cancelled.status(), &BookingStatus::Cancelled);
        assert_eq!(cancelled.updated(), &now2);

        test::permissions_checks(&f.customer, &testfn);
        let someone_else = make_user(&UserID::create(), None, &f.now);
        assert_eq!(testfn(&someone_else), Err(Error::BookingNotOwned));
        test::double_deleted_tester(&booking, "booking", |subject| cancel_own(&f.customer, subject, None, &now2));

        // once the branch confirms, only the branch can cancel
        let mut confirmed = booking.clone();
        confirmed.set_status(BookingStatus::Confirmed);
        let res = cancel_own(&f.customer, confirmed, None, &now2);
        assert_eq!(res, Err(Error::BookingStatusInvalid { from: BookingStatus::Confirmed, to: BookingStatus::Cancelled }));
    }
}
