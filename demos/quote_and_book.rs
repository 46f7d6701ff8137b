//! Searches a branch for cars over Christmas, quotes one, books it, and has
//! the branch confirm it.
//!
//! Run with `RUST_LOG=debug` to watch the engine and the transactions work.

use chrono::{NaiveDate, Utc};
use rental_core::{
    access::Role,
    error::Result,
    models::{
        Op,
        ModelData,
        booking::{Booking, BookingID, Extras, InsuranceType},
        branch::{Branch, BranchID},
        car::{Car, CarID},
        payment::{PaymentID, PaymentMethod},
        pricing_rule::{PricingRule, PricingRuleID},
        user::{User, UserID},
    },
    pricing::PricingEngine,
    transactions::{booking, branch, car, pricing_rule, user},
};
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::convert::TryFrom;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| panic!("bad date {}-{}-{}", year, month, day))
}

/// Pull the first created model of a given type out of a transaction's result.
fn created<T>(mods: rental_core::models::Modifications) -> T
    where T: TryFrom<ModelData>
{
    mods.into_vec().into_iter()
        .filter_map(|m| match m.into_pair() {
            (Op::Create, model) => T::try_from(model).ok(),
            _ => None,
        })
        .next()
        .expect("transaction created nothing of that type")
}

fn main() -> Result<()> {
    env_logger::init();
    let now = Utc::now();

    let boss = User::builder()
        .id(UserID::new("super"))
        .roles(vec![Role::SuperAdmin])
        .email("boss@rental.example")
        .name("The Boss")
        .active(true)
        .created(now)
        .updated(now)
        .build()
        .expect("super admin");

    let north: Branch = created(branch::create(&boss, BranchID::new("north"), "Northside", Some("12 North St".into()), None, None, true, &now)?);
    let admin: User = created(user::create_admin(&boss, UserID::new("north-ops"), "ops@north.example", "North Ops", &north, &now)?);
    let corolla: Car = created(car::create(&admin, CarID::new("car-1"), &north, "ABC-123", "Toyota", "Corolla", dec!(1000), 42000, None, true, &now)?);
    let christmas: PricingRule = created(pricing_rule::create(&boss, PricingRuleID::new("xmas"), "Christmas", day(2020, 12, 20), day(2020, 12, 31), dec!(1.5), true, true, &now)?);
    let customer: User = created(user::create(UserID::new("frog"), "frog@example.com", "Buzzin' Frog", None, &now)?);

    let mut cars = HashMap::new();
    cars.insert(corolla.id().clone(), corolla.clone());
    let engine = PricingEngine::new(cars, vec![christmas]);

    let start = day(2025, 12, 24);
    let end = day(2025, 12, 28);
    let fleet = vec![corolla.clone()];
    for offer in engine.search(&fleet, north.id(), start, end)? {
        println!("on offer at {}: {} for {}", north.name(), offer.car().display_name(), offer.base_cost());
    }
    let quote = engine.quote(corolla.id(), start, end, Extras::new(InsuranceType::Standard, true))?;
    println!("{} from {} to {}", corolla.display_name(), start, end);
    for charge in quote.breakdown().days() {
        println!("  {}  x{:<5} {:>8}  {:?}", charge.date(), charge.multiplier(), charge.amount(), charge.source());
    }
    println!("  base     {:>10}", quote.costs().base());
    println!("  extras   {:>10}", quote.costs().extras());
    println!("  total    {:>10}", quote.costs().total());

    let mods = booking::create(&customer, BookingID::new("booking-1"), PaymentID::new("payment-1"), &corolla, &north, &north, &quote, PaymentMethod::Card, None, &now)?;
    println!("booking created {} models", mods.len());
    let pending: Booking = created(mods);

    let confirmed = booking::confirm(&admin, pending, &corolla, &Utc::now())?;
    for modification in confirmed.into_vec() {
        let (op, model) = modification.into_pair();
        if let (Op::Update, ModelData::Booking(booking)) = (op, model) {
            println!("booking {} is now {:?}", booking.id(), booking.status());
        }
    }
    Ok(())
}
