//! Pricing turns a car and a pair of dates into money. The [engine] prices
//! the rental itself, [extras] prices the add-ons, and a [quote] puts the two
//! together for a booking. [search] prices every car a customer could pick up
//! at a branch.
//!
//! [engine]: engine/index.html
//! [extras]: extras/index.html
//! [quote]: quote/index.html
//! [search]: search/index.html

pub mod engine;
pub mod extras;
pub mod quote;
pub mod search;

pub use engine::{CarRepository, PricingEngine, RuleRepository};
pub use quote::Quote;
pub use search::CarOffer;
